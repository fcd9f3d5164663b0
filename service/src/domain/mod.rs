//! Domain definitions.

pub mod add_on;
pub mod booking;
pub mod cancellation;
pub mod pre_check_in;
pub mod pricing;
pub mod room;
pub mod stay;

pub use self::{
    add_on::AddOn,
    booking::Booking,
    pricing::{Breakdown, InvalidInput},
    room::Room,
    stay::Stay,
};
