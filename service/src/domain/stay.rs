//! [`Stay`] definitions.

use common::{Date, DateTime, DateTimeOf};

use crate::domain::InvalidInput;

/// Calendar dates of a guest's stay.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Stay {
    /// [`Date`] of the arrival.
    check_in: Date,

    /// [`Date`] of the departure.
    check_out: Date,
}

impl Stay {
    /// Creates a new [`Stay`] between the provided dates.
    ///
    /// # Errors
    ///
    /// Errors with [`InvalidInput::CheckOutNotAfterCheckIn`] unless
    /// `check_out` is strictly later than `check_in`.
    pub fn new(check_in: Date, check_out: Date) -> Result<Self, InvalidInput> {
        if check_out <= check_in {
            return Err(InvalidInput::CheckOutNotAfterCheckIn {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Returns the [`Date`] of the arrival.
    #[must_use]
    pub fn check_in(&self) -> Date {
        self.check_in
    }

    /// Returns the [`Date`] of the departure.
    #[must_use]
    pub fn check_out(&self) -> Date {
        self.check_out
    }

    /// Returns the number of nights of this [`Stay`].
    #[must_use]
    pub fn nights(&self) -> u32 {
        nights(self.check_in, self.check_out)
    }

    /// Returns the moment of the arrival, given the hotel's check-in time of
    /// day.
    #[must_use]
    pub fn check_in_at(&self, time_of_day: time::Time) -> CheckInDateTime {
        DateTime::at(self.check_in, time_of_day).coerce()
    }
}

/// Counts the nights between the provided dates.
///
/// Calendar dates carry no time of day, so the difference is always a whole
/// number of days and no rounding is involved. Reversed or equal dates give
/// zero nights.
#[must_use]
pub fn nights(check_in: Date, check_out: Date) -> u32 {
    u32::try_from(check_in.days_until(check_out).max(0)).unwrap_or(u32::MAX)
}

/// Marker type of a check-in moment.
#[derive(Clone, Copy, Debug)]
pub struct CheckIn;

/// [`DateTime`] of a guest's arrival.
pub type CheckInDateTime = DateTimeOf<(Stay, CheckIn)>;

#[cfg(test)]
mod spec {
    use common::{Date, DateTime};
    use time::macros::time;

    use crate::domain::InvalidInput;

    use super::{nights, Stay};

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn counts_nights() {
        assert_eq!(nights(date("2025-11-20"), date("2025-11-23")), 3);
        assert_eq!(nights(date("2025-11-20"), date("2025-11-21")), 1);
        assert_eq!(nights(date("2025-12-30"), date("2026-01-02")), 3);
    }

    #[test]
    fn clamps_reversed_dates_to_zero_nights() {
        assert_eq!(nights(date("2025-11-20"), date("2025-11-20")), 0);
        assert_eq!(nights(date("2025-11-23"), date("2025-11-20")), 0);
    }

    #[test]
    fn one_more_day_is_one_more_night() {
        let check_in = date("2025-11-20");
        let mut check_out = date("2025-11-21");
        for expected in 1..=400 {
            assert_eq!(nights(check_in, check_out), expected);
            check_out = check_out.next_day().unwrap();
        }
    }

    #[test]
    fn requires_check_out_after_check_in() {
        assert!(Stay::new(date("2025-11-20"), date("2025-11-21")).is_ok());

        assert_eq!(
            Stay::new(date("2025-11-20"), date("2025-11-20")),
            Err(InvalidInput::CheckOutNotAfterCheckIn {
                check_in: date("2025-11-20"),
                check_out: date("2025-11-20"),
            }),
        );
        assert!(Stay::new(date("2025-11-21"), date("2025-11-20")).is_err());
    }

    #[test]
    fn derives_moments_and_dates() {
        let stay = Stay::new(date("2025-11-20"), date("2025-11-23")).unwrap();

        assert_eq!(stay.nights(), 3);
        assert_eq!(
            stay.check_in_at(time!(14:00)),
            DateTime::from_rfc3339("2025-11-20T14:00:00Z")
                .unwrap()
                .coerce(),
        );
    }
}
