//! Pre-check-in definitions.
//!
//! A guest may hand in their arrival details ahead of time, but only within
//! a limited window before the check-in moment.

use std::time::Duration;

use common::{define_kind, unit, DateTime, DateTimeOf};
use smart_default::SmartDefault;
use time::macros::time;

use crate::domain::stay::CheckInDateTime;

/// Indicates whether pre-check-in is open at the provided `now` moment for a
/// booking arriving at `check_in_at`.
///
/// Pre-check-in is open strictly after the moment `window` before the
/// check-in and is closed at the check-in itself and after it.
#[must_use]
pub fn is_eligible(
    check_in_at: CheckInDateTime,
    now: DateTime,
    window: Duration,
) -> bool {
    let check_in_at = check_in_at.coerce::<()>();
    now < check_in_at && check_in_at <= now + window
}

/// Settings of pre-check-in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, SmartDefault)]
pub struct Config {
    /// How long before the check-in moment pre-check-in opens.
    #[default(Duration::from_secs(24 * 60 * 60))]
    pub window: Duration,

    /// Time of day guests check in at.
    #[default(time!(14:00))]
    pub check_in_time: time::Time,
}

/// Arrival details handed in on pre-check-in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Details {
    /// Expected [`ArrivalTime`].
    pub arrival_time: ArrivalTime,

    /// Number of room [`Keys`] to prepare.
    pub keys: Keys,

    /// [`Floor`] the guest prefers.
    pub preferred_floor: Floor,

    /// Free-form requests of the guest, if any.
    pub special_requests: Option<String>,
}

define_kind! {
    #[doc = "Expected arrival time range."]
    enum ArrivalTime {
        #[doc = "From 12:00 till 14:00."]
        Midday = 1,

        #[doc = "From 14:00 till 16:00."]
        Afternoon = 2,

        #[doc = "From 16:00 till 18:00."]
        LateAfternoon = 3,

        #[doc = "From 18:00 till 20:00."]
        Evening = 4,

        #[doc = "From 20:00 till 22:00."]
        LateEvening = 5,

        #[doc = "After 22:00."]
        Night = 6,
    }
}

define_kind! {
    #[doc = "Preferred floor range."]
    enum Floor {
        #[doc = "Any floor."]
        Any = 1,

        #[doc = "Floors from 1 to 3."]
        Low = 2,

        #[doc = "Floors from 4 to 7."]
        Mid = 3,

        #[doc = "Floors from 8 and above."]
        High = 4,
    }
}

impl Default for Floor {
    fn default() -> Self {
        Self::Any
    }
}

/// Number of room keys in `[1, 4]` range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Keys(u8);

impl Default for Keys {
    fn default() -> Self {
        Self(2)
    }
}

impl Keys {
    /// Maximum number of [`Keys`] handed to a guest.
    pub const MAX: u8 = 4;

    /// Creates new [`Keys`] if the provided `count` is in `[1, 4]` range.
    #[must_use]
    pub fn new(count: u8) -> Option<Self> {
        (1..=Self::MAX).contains(&count).then_some(Self(count))
    }

    /// Returns the number of these [`Keys`].
    #[must_use]
    pub fn count(self) -> u8 {
        self.0
    }
}

/// Completed pre-check-in of a booking.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// [`Details`] handed in by the guest.
    pub details: Details,

    /// [`DateTime`] when the pre-check-in was completed.
    pub completed_at: CompletionDateTime,
}

/// [`DateTime`] of a pre-check-in completion.
pub type CompletionDateTime = DateTimeOf<(Record, unit::Completion)>;
