//! [`Command`] definition.

pub mod cancel_booking;
pub mod complete_pre_check_in;
pub mod create_booking;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    cancel_booking::CancelBooking, complete_pre_check_in::CompletePreCheckIn,
    create_booking::CreateBooking,
};
