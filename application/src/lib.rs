//! Application provides CLI for interacting with the [`Service`].

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod args;
pub mod config;
pub mod error;
pub mod view;

use service::{
    command::CreateBooking,
    domain::pre_check_in,
    query::{self, rooms::Search},
    Query as _,
};
// Used in binary.
use tokio as _;
use tracing_subscriber as _;

pub use self::{
    args::Args,
    config::Config,
    error::{AsError, Error},
};

/// [`Service`] with filled infrastructure dependencies.
///
/// [`Service`]: service::Service
pub type Service = service::Service<service::infra::Memory>;

/// Runs the provided [`args::Command`] against the [`Service`], returning
/// its human-readable result.
///
/// # Errors
///
/// Errors if the [`args::Command`] fails.
pub async fn run(
    service: &Service,
    command: args::Command,
) -> Result<String, Error> {
    use args::Command as C;

    let output = match command {
        C::Rooms(args) => {
            let page = service
                .execute(Search::from(args))
                .await
                .map_err(AsError::into_error)?;
            view::Rooms(&page).to_string()
        }
        C::Room(args::Room { id }) => {
            let room = service
                .execute(query::room::ById::by(id))
                .await
                .map_err(AsError::into_error)?
                .ok_or_else(|| {
                    Error::new(
                        "ROOM_NOT_EXISTS",
                        &format!("`Room(id: {id})` does not exist"),
                    )
                })?;
            view::Room(&room).to_string()
        }
        C::Quote(args) => {
            let quote =
                query::Quote::try_from(args).map_err(AsError::into_error)?;
            let breakdown = service
                .execute(quote)
                .await
                .map_err(AsError::into_error)?;
            view::Breakdown(&breakdown).to_string()
        }
        C::Book(args) => {
            let cmd =
                CreateBooking::try_from(args).map_err(AsError::into_error)?;
            let booking =
                service.execute(cmd).await.map_err(AsError::into_error)?;
            let pre_check_in_open = booking.is_open_for_pre_check_in(
                service.now(),
                service.config().pre_check_in.window,
            );
            view::Booking {
                booking: &booking,
                free_cancellation_until: booking.free_cancellation_until(
                    service.config().cancellation.free_notice,
                ),
                pre_check_in_open,
            }
            .to_string()
        }
        C::Eligibility(args) => {
            let args::Eligibility { check_in_at, now } = args;
            let now = now.unwrap_or_else(|| service.now());
            view::Eligibility {
                check_in_at,
                now,
                eligible: pre_check_in::is_eligible(
                    check_in_at.coerce(),
                    now,
                    service.config().pre_check_in.window,
                ),
            }
            .to_string()
        }
    };
    Ok(output)
}
