//! [`Config`]-related definitions.

use std::{
    collections::{BTreeSet, HashSet},
    num::NonZeroU8,
    time,
};

use common::{Currency, Money, Percent};
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use derive_more::{Display, Error};
use rust_decimal::Decimal;
use serde::Deserialize;
use service::domain::{cancellation, pre_check_in, pricing, room};
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Pricing configuration.
    #[serde(default)]
    pub pricing: Pricing,

    /// Pre-check-in configuration.
    #[serde(default)]
    pub pre_check_in: PreCheckIn,

    /// Booking configuration.
    #[serde(default)]
    pub booking: Booking,

    /// Random source configuration.
    #[serde(default)]
    pub random: Random,

    /// Catalog configuration.
    #[serde(default)]
    pub catalog: Catalog,

    /// Log configuration.
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }

    /// Returns the [`service::Config`] described by this [`Config`].
    #[must_use]
    pub fn service(&self) -> service::Config {
        service::Config {
            pricing: self.pricing.into(),
            pre_check_in: self.pre_check_in.into(),
            cancellation: cancellation::Config {
                free_notice: self.booking.free_cancellation,
            },
            confirmation_attempts: self.booking.confirmation_attempts,
            seed: self.random.seed,
        }
    }
}

/// Pricing configuration.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct Pricing {
    /// Currency of every price.
    pub currency: Currency,

    /// Flat fee charged once per booking.
    pub service_fee: Decimal,

    /// Share of the room total charged as taxes.
    pub tax_rate: Percent,

    /// Price of breakfast per guest per night.
    pub breakfast: Decimal,

    /// Flat price of airport pickup.
    pub airport_pickup: Decimal,

    /// Flat price of early check-in.
    pub early_check_in: Decimal,

    /// Flat price of late check-out.
    pub late_check_out: Decimal,
}

impl Default for Pricing {
    fn default() -> Self {
        let pricing::Config {
            currency,
            service_fee,
            tax_rate,
            breakfast,
            airport_pickup,
            early_check_in,
            late_check_out,
        } = pricing::Config::default();
        Self {
            currency,
            service_fee,
            tax_rate,
            breakfast,
            airport_pickup,
            early_check_in,
            late_check_out,
        }
    }
}

impl From<Pricing> for pricing::Config {
    fn from(value: Pricing) -> Self {
        let Pricing {
            currency,
            service_fee,
            tax_rate,
            breakfast,
            airport_pickup,
            early_check_in,
            late_check_out,
        } = value;
        Self {
            currency,
            service_fee,
            tax_rate,
            breakfast,
            airport_pickup,
            early_check_in,
            late_check_out,
        }
    }
}

/// Pre-check-in configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct PreCheckIn {
    /// How long before the check-in pre-check-in opens.
    #[default(time::Duration::from_secs(24 * 60 * 60))]
    #[serde(with = "humantime_serde")]
    pub window: time::Duration,

    /// Time of day guests check in at, as `HH:MM` in UTC.
    #[default(::time::macros::time!(14:00))]
    #[serde(deserialize_with = "time_of_day::deserialize")]
    pub check_in_time: ::time::Time,
}

impl From<PreCheckIn> for pre_check_in::Config {
    fn from(value: PreCheckIn) -> Self {
        let PreCheckIn {
            window,
            check_in_time,
        } = value;
        Self {
            window,
            check_in_time,
        }
    }
}

/// Booking configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Booking {
    /// Number of attempts to generate an unused confirmation number.
    #[default(service::Config::default().confirmation_attempts)]
    pub confirmation_attempts: NonZeroU8,

    /// How long before the check-in a booking stops being cancellable free
    /// of charge.
    #[default(service::Config::default().cancellation.free_notice)]
    #[serde(with = "humantime_serde")]
    pub free_cancellation: time::Duration,
}

/// Random source configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Random {
    /// Seed making generated confirmation numbers reproducible.
    pub seed: Option<u64>,
}

/// Catalog configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Catalog {
    /// Rooms available for booking.
    #[default(Room::samples())]
    pub rooms: Vec<Room>,
}

impl Catalog {
    /// Converts the configured [`Room`]s into [`room::Room`]s priced in the
    /// provided [`Currency`].
    ///
    /// # Errors
    ///
    /// Errors with [`InvalidRoom`] if any of the [`Room`]s is invalid, or if
    /// their IDs repeat.
    pub fn rooms(
        &self,
        currency: Currency,
    ) -> Result<Vec<room::Room>, InvalidRoom> {
        let mut ids = HashSet::with_capacity(self.rooms.len());
        self.rooms
            .iter()
            .map(|r| {
                if !ids.insert(r.id) {
                    return Err(InvalidRoom::DuplicateId(r.id));
                }
                r.to_room(currency)
            })
            .collect()
    }
}

/// Catalog room configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct Room {
    /// ID of the room.
    pub id: u32,

    /// Name of the room.
    pub name: String,

    /// Kind of the room.
    pub kind: room::Kind,

    /// Price of a single night in the room.
    pub nightly_price: Decimal,

    /// Maximum number of guests the room accommodates.
    pub capacity: u32,

    /// Rating of the room in `[0, 5]` range.
    pub rating: Decimal,

    /// Bed type of the room.
    pub bed: room::Bed,

    /// Amenities available to the guests of the room.
    #[serde(default)]
    pub amenities: BTreeSet<room::Amenity>,
}

impl Room {
    /// Returns the sample catalog of the hotel.
    fn samples() -> Vec<Self> {
        use room::{Amenity as A, Bed, Kind};

        [
            (1, "Deluxe Suite", Kind::Deluxe, 250, 2, (48, 1), Bed::King),
            (2, "Executive Suite", Kind::Executive, 350, 2, (49, 1), Bed::King),
            (3, "Premium Suite", Kind::Premium, 450, 3, (50, 1), Bed::King),
            (4, "Standard Room", Kind::Standard, 150, 2, (45, 1), Bed::Double),
            (5, "Family Suite", Kind::Family, 400, 4, (47, 1), Bed::Queen),
            (6, "Honeymoon Suite Deluxe", Kind::Deluxe, 500, 2, (49, 1), Bed::King),
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
        .map(
            |((id, name, kind, price, capacity, (rating, scale), bed), amenities)| {
                Self {
                    id,
                    name: name.to_owned(),
                    kind,
                    nightly_price: Decimal::from(price),
                    capacity,
                    rating: Decimal::new(rating, scale),
                    bed,
                    amenities: amenities.iter().copied().collect(),
                }
            },
        )
        .collect()
    }

    /// Converts this [`Room`] into a [`room::Room`] priced in the provided
    /// [`Currency`].
    fn to_room(&self, currency: Currency) -> Result<room::Room, InvalidRoom> {
        use InvalidRoom as E;

        let Self {
            id,
            name,
            kind,
            nightly_price,
            capacity,
            rating,
            bed,
            amenities,
        } = self;

        let price = Money::new(*nightly_price, currency);
        if price.is_negative() {
            return Err(E::NegativePrice(*id));
        }
        Ok(room::Room {
            id: room::Id::from(*id),
            name: room::Name::new(name.as_str()).ok_or(E::Name(*id))?,
            kind: *kind,
            nightly_price: price,
            capacity: room::Capacity::new(*capacity).ok_or(E::Capacity(*id))?,
            rating: room::Rating::new(*rating).ok_or(E::Rating(*id))?,
            bed: *bed,
            amenities: amenities.clone(),
        })
    }
}

/// Error of converting a configured [`Room`] into a [`room::Room`].
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum InvalidRoom {
    /// [`Room`] ID is used more than once.
    #[display("`Room(id: {_0})` is configured more than once")]
    DuplicateId(#[error(not(source))] u32),

    /// [`Room`] name is empty, too long or padded with spaces.
    #[display("`Room(id: {_0})` has invalid name")]
    Name(#[error(not(source))] u32),

    /// [`Room`] nightly price is negative.
    #[display("`Room(id: {_0})` has negative nightly price")]
    NegativePrice(#[error(not(source))] u32),

    /// [`Room`] accommodates no guests.
    #[display("`Room(id: {_0})` has zero capacity")]
    Capacity(#[error(not(source))] u32),

    /// [`Room`] rating is out of `[0, 5]` range.
    #[display("`Room(id: {_0})` has rating out of `[0, 5]` range")]
    Rating(#[error(not(source))] u32),
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

mod time_of_day {
    //! Deserialization of a time of day written as `HH:MM`.

    use serde::{de::Error as _, Deserialize as _, Deserializer};
    use time::macros::format_description;

    /// Deserializes a [`time::Time`] out of a `HH:MM` string.
    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<time::Time, D::Error> {
        let s = String::deserialize(d)?;
        time::Time::parse(&s, format_description!("[hour]:[minute]")).map_err(
            |e| D::Error::custom(format!("invalid time of day `{s}`: {e}")),
        )
    }
}
