//! [`Query`] definition.

pub mod booking;
pub mod bookings;
pub mod quote;
pub mod room;
pub mod rooms;

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    infra::{database, Database},
    Service,
};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

pub use self::quote::Quote;

/// [`Query`] [`Select`]ing a `T`ype from a [`Database`].
#[derive(Clone, Copy, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct DatabaseQuery<T>(T);

impl<W, B> DatabaseQuery<By<W, B>> {
    /// Creates a new [`DatabaseQuery`] selecting a `W` by the provided `B`.
    #[must_use]
    pub fn by(by: B) -> Self {
        Self(By::new(by))
    }
}

impl<Db, Clk, W, B> Query<DatabaseQuery<By<W, B>>> for Service<Db, Clk>
where
    Db: Database<Select<By<W, B>>, Ok = W, Err = Traced<database::Error>>,
{
    type Ok = W;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        DatabaseQuery(by): DatabaseQuery<By<W, B>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.database()
            .execute(Select(by))
            .await
            .map_err(tracerr::wrap!())
    }
}

#[cfg(test)]
pub(crate) mod fixture {
    //! Shared fixtures of [`Service`] tests.

    use common::{Currency, DateTime, Money};
    use rust_decimal::Decimal;

    use crate::{
        domain::{
            booking::{guest, Guest},
            room, Room,
        },
        infra::{clock, Memory},
        Config, Service,
    };

    /// Sample catalog of [`Room`]s.
    pub(crate) fn rooms() -> Vec<Room> {
        use room::{Amenity as A, Bed, Kind};

        [
            (1, "Deluxe Suite", Kind::Deluxe, 250, 2, "4.8", Bed::King),
            (2, "Executive Suite", Kind::Executive, 350, 2, "4.9", Bed::King),
            (3, "Premium Suite", Kind::Premium, 450, 3, "5.0", Bed::King),
            (4, "Standard Room", Kind::Standard, 150, 2, "4.5", Bed::Double),
            (5, "Family Suite", Kind::Family, 400, 4, "4.7", Bed::Queen),
            (6, "Honeymoon Suite Deluxe", Kind::Deluxe, 500, 2, "4.9", Bed::King),
        ]
        .into_iter()
        .zip([
            &[A::Wifi, A::Pool, A::Gym, A::Restaurant, A::Parking][..],
            &[A::Wifi, A::Gym, A::Restaurant, A::Parking],
            A::ALL,
            &[A::Wifi, A::Restaurant, A::Parking],
            &[A::Wifi, A::Pool, A::Gym, A::Restaurant, A::Parking],
            &[A::Wifi, A::Pool, A::Spa, A::Restaurant, A::Parking],
        ])
        .map(|((id, name, kind, price, guests, rating, bed), amenities)| Room {
            id: room::Id::from(id),
            name: room::Name::new(name).unwrap(),
            kind,
            nightly_price: Money::new(price, Currency::Usd),
            capacity: room::Capacity::new(guests).unwrap(),
            rating: room::Rating::new(rating.parse::<Decimal>().unwrap())
                .unwrap(),
            bed,
            amenities: amenities.iter().copied().collect(),
        })
        .collect()
    }

    /// [`Service`] over the sample catalog standing still at `now`.
    pub(crate) fn service(now: &str) -> Service<Memory, clock::Fixed> {
        let config = Config {
            seed: Some(42),
            ..Config::default()
        };
        Service::new(config, Memory::new(rooms()))
            .with_clock(clock::Fixed(DateTime::from_rfc3339(now).unwrap()))
    }

    /// Sample guest details.
    pub(crate) fn guest() -> Guest {
        Guest {
            first_name: guest::Name::new("John").unwrap(),
            last_name: guest::Name::new("Doe").unwrap(),
            email: guest::Email::new("john.doe@example.com").unwrap(),
            phone: guest::Phone::new("+1 (555) 123-4567").unwrap(),
        }
    }
}
