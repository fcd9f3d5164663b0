//! [`Booking`] definitions.

pub mod guest;
pub mod reference;

use std::time::Duration;

use common::{define_kind, unit, DateTime, DateTimeOf, Money};
use derive_more::{Display, From, FromStr, Into};
use uuid::Uuid;

use crate::domain::{
    add_on, cancellation, pre_check_in, pricing::Breakdown, room,
    stay::CheckInDateTime, Stay,
};

pub use self::{
    guest::Guest,
    reference::{ConfirmationNumber, TransactionId},
};

/// Room reservation made by a [`Guest`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Booking {
    /// ID of this [`Booking`].
    pub id: Id,

    /// [`ConfirmationNumber`] of this [`Booking`] shown to the [`Guest`].
    pub confirmation: ConfirmationNumber,

    /// [`TransactionId`] of the payment for this [`Booking`].
    pub transaction: TransactionId,

    /// ID of the booked [`Room`].
    ///
    /// [`Room`]: crate::domain::Room
    pub room_id: room::Id,

    /// [`Guest`] this [`Booking`] is made by.
    pub guest: Guest,

    /// [`Stay`] this [`Booking`] is made for.
    pub stay: Stay,

    /// [`DateTime`] when the [`Guest`] is expected to check in.
    pub check_in_at: CheckInDateTime,

    /// Number of guests staying.
    pub guests: u32,

    /// [`add_on::Selection`] of this [`Booking`].
    pub add_ons: add_on::Selection,

    /// Price [`Breakdown`] of this [`Booking`].
    pub price: Breakdown,

    /// [`Status`] of this [`Booking`].
    pub status: Status,

    /// [`DateTime`] when this [`Booking`] was created.
    pub created_at: CreationDateTime,

    /// Completed pre-check-in of this [`Booking`], if any.
    pub pre_check_in: Option<pre_check_in::Record>,

    /// Cancellation of this [`Booking`], if it was [`Status::Cancelled`].
    pub cancellation: Option<cancellation::Record>,
}

impl Booking {
    /// Indicates whether pre-check-in may be completed for this [`Booking`]
    /// at the provided `now` moment.
    #[must_use]
    pub fn is_open_for_pre_check_in(
        &self,
        now: DateTime,
        window: Duration,
    ) -> bool {
        self.status == Status::Confirmed
            && self.pre_check_in.is_none()
            && pre_check_in::is_eligible(self.check_in_at, now, window)
    }

    /// Returns the last moment this [`Booking`] may be cancelled free of
    /// charge.
    #[must_use]
    pub fn free_cancellation_until(&self, notice: Duration) -> DateTime {
        cancellation::free_until(self.check_in_at, notice)
    }

    /// Returns the fee of cancelling this [`Booking`] at the provided `now`
    /// moment.
    ///
    /// [`None`] is returned if this [`Booking`] cannot be cancelled anymore.
    #[must_use]
    pub fn cancellation_fee(
        &self,
        now: DateTime,
        notice: Duration,
    ) -> Option<Money> {
        if self.status != Status::Confirmed {
            return None;
        }
        cancellation::fee(
            self.check_in_at,
            now,
            notice,
            self.price.nightly_price,
        )
    }
}

/// ID of a [`Booking`].
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, From, FromStr, Hash, Into, PartialEq,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

define_kind! {
    #[doc = "Status of a [`Booking`]."]
    enum Status {
        #[doc = "[`Booking`] is paid and holds the room."]
        Confirmed = 1,

        #[doc = "[`Booking`] was cancelled and holds nothing."]
        Cancelled = 2,
    }
}

/// [`DateTime`] of a [`Booking`] creation.
pub type CreationDateTime = DateTimeOf<(Booking, unit::Creation)>;

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::{Currency, DateTime, Money};
    use time::macros::time;

    use crate::domain::{
        add_on,
        pre_check_in::{self, ArrivalTime, Details, Floor, Keys},
        pricing, room, Stay,
    };

    use super::{
        guest, Booking, ConfirmationNumber, Guest, Id, Status, TransactionId,
    };

    const DAY: Duration = Duration::from_secs(24 * 60 * 60);

    fn booking() -> Booking {
        let stay = Stay::new(
            "2025-11-20".parse().unwrap(),
            "2025-11-23".parse().unwrap(),
        )
        .unwrap();
        let created_at = DateTime::from_rfc3339("2025-11-01T10:00:00Z").unwrap();
        Booking {
            id: Id::new(),
            confirmation: "GLM123456".parse().unwrap(),
            transaction: TransactionId::at(created_at),
            room_id: room::Id::from(1),
            guest: Guest {
                first_name: guest::Name::new("John").unwrap(),
                last_name: guest::Name::new("Doe").unwrap(),
                email: guest::Email::new("john@example.com").unwrap(),
                phone: guest::Phone::new("+1 555 123 4567").unwrap(),
            },
            stay,
            check_in_at: stay.check_in_at(time!(14:00)),
            guests: 2,
            add_ons: add_on::Selection::default(),
            price: pricing::Config::default()
                .quote(
                    Money::new(250, Currency::Usd),
                    stay.nights(),
                    2,
                    &add_on::Selection::default(),
                )
                .unwrap(),
            status: Status::Confirmed,
            created_at: created_at.coerce(),
            pre_check_in: None,
            cancellation: None,
        }
    }

    #[test]
    fn open_for_pre_check_in_only_when_confirmed_and_pending() {
        let now = DateTime::from_rfc3339("2025-11-20T08:00:00Z").unwrap();
        let mut booking = booking();

        assert!(booking.is_open_for_pre_check_in(now, DAY));

        booking.status = Status::Cancelled;
        assert!(!booking.is_open_for_pre_check_in(now, DAY));

        booking.status = Status::Confirmed;
        booking.pre_check_in = Some(pre_check_in::Record {
            details: Details {
                arrival_time: ArrivalTime::Afternoon,
                keys: Keys::default(),
                preferred_floor: Floor::High,
                special_requests: None,
            },
            completed_at: now.coerce(),
        });
        assert!(!booking.is_open_for_pre_check_in(now, DAY));
    }

    #[test]
    fn closed_for_pre_check_in_outside_window() {
        let booking = booking();
        let early = DateTime::from_rfc3339("2025-11-18T08:00:00Z").unwrap();
        let late = DateTime::from_rfc3339("2025-11-20T14:00:01Z").unwrap();

        assert!(!booking.is_open_for_pre_check_in(early, DAY));
        assert!(!booking.is_open_for_pre_check_in(late, DAY));
    }

    #[test]
    fn charges_cancellation_by_notice() {
        let mut booking = booking();
        let early = DateTime::from_rfc3339("2025-11-19T13:00:00Z").unwrap();
        let late = DateTime::from_rfc3339("2025-11-20T08:00:00Z").unwrap();

        assert_eq!(
            booking.free_cancellation_until(DAY).to_string(),
            "2025-11-19T14:00:00Z",
        );
        assert_eq!(
            booking.cancellation_fee(early, DAY),
            Some(Money::zero(Currency::Usd)),
        );
        assert_eq!(
            booking.cancellation_fee(late, DAY),
            Some(Money::new(250, Currency::Usd)),
        );

        booking.status = Status::Cancelled;
        assert_eq!(booking.cancellation_fee(early, DAY), None);
    }

    #[test]
    fn status_uses_screaming_case() {
        assert_eq!(Status::Confirmed.to_string(), "CONFIRMED");
        assert_eq!("CANCELLED".parse::<Status>(), Ok(Status::Cancelled));
        assert_eq!(
            ConfirmationNumber::PREFIX.len() + 6,
            booking().confirmation.to_string().len(),
        );
    }
}
