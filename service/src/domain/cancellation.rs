//! Cancellation definitions.
//!
//! A booking may be cancelled free of charge until some notice before the
//! check-in moment. Later cancellations are charged for a single night.

use std::time::Duration;

use common::{unit, DateTime, DateTimeOf, Money};
use smart_default::SmartDefault;

use crate::domain::stay::CheckInDateTime;

/// Returns the last moment a booking arriving at `check_in_at` may be
/// cancelled free of charge.
#[must_use]
pub fn free_until(check_in_at: CheckInDateTime, notice: Duration) -> DateTime {
    check_in_at.coerce::<()>() - notice
}

/// Returns the fee of cancelling at the provided `now` moment a booking
/// arriving at `check_in_at` and costing `nightly_price` per night.
///
/// [`None`] is returned once the check-in moment is reached, as there is
/// nothing to cancel anymore.
#[must_use]
pub fn fee(
    check_in_at: CheckInDateTime,
    now: DateTime,
    notice: Duration,
    nightly_price: Money,
) -> Option<Money> {
    if now >= check_in_at.coerce() {
        return None;
    }
    Some(if now <= free_until(check_in_at, notice) {
        Money::zero(nightly_price.currency)
    } else {
        nightly_price
    })
}

/// Settings of cancellation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, SmartDefault)]
pub struct Config {
    /// How long before the check-in moment a booking stops being cancellable
    /// free of charge.
    #[default(Duration::from_secs(24 * 60 * 60))]
    pub free_notice: Duration,
}

/// Cancellation of a booking.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Record {
    /// Charged fee, zero if cancelled free of charge.
    pub fee: Money,

    /// [`DateTime`] when the booking was cancelled.
    pub cancelled_at: CancellationDateTime,
}

/// [`DateTime`] of a booking cancellation.
pub type CancellationDateTime = DateTimeOf<(Record, unit::Cancellation)>;
