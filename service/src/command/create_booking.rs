//! [`Command`] for creating a new [`Booking`].

use std::num::NonZeroU8;

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::booking::ConfirmationNumber;
use crate::{
    domain::{
        add_on,
        booking::{self, Guest, TransactionId},
        room, Booking, Breakdown, Stay,
    },
    infra::{database, Clock, Database},
    query::{quote, Quote},
    Query, Service,
};

use super::Command;

/// [`Command`] for creating a new confirmed [`Booking`].
#[derive(Clone, Debug)]
pub struct CreateBooking {
    /// ID of the [`Room`] to book.
    ///
    /// [`Room`]: crate::domain::Room
    pub room_id: room::Id,

    /// [`Stay`] to book.
    pub stay: Stay,

    /// Number of guests staying.
    pub guests: u32,

    /// [`Guest`] making the [`Booking`].
    pub guest: Guest,

    /// Selected [`AddOn`]s.
    ///
    /// [`AddOn`]: crate::domain::AddOn
    pub add_ons: add_on::Selection,
}

impl<Db, Clk> Command<CreateBooking> for Service<Db, Clk>
where
    Db: Database<Insert<Booking>, Ok = (), Err = Traced<database::Error>>,
    Clk: Clock,
    Self: Query<Quote, Ok = Breakdown, Err = Traced<quote::ExecutionError>>,
{
    type Ok = Booking;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateBooking,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateBooking {
            room_id,
            stay,
            guests,
            guest,
            add_ons,
        } = cmd;

        let price = self
            .execute(Quote {
                room_id,
                stay,
                guests,
                add_ons,
            })
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let now = self.now();
        let mut booking = Booking {
            id: booking::Id::new(),
            confirmation: self.generate_confirmation(),
            transaction: TransactionId::at(now),
            room_id,
            guest,
            stay,
            check_in_at: stay
                .check_in_at(self.config().pre_check_in.check_in_time),
            guests,
            add_ons,
            price,
            status: booking::Status::Confirmed,
            created_at: now.coerce(),
            pre_check_in: None,
            cancellation: None,
        };

        let attempts = self.config().confirmation_attempts;
        for _ in 0..attempts.get() {
            match self.database().execute(Insert(booking.clone())).await {
                Ok(()) => {
                    log::info!(
                        confirmation = %booking.confirmation,
                        transaction = %booking.transaction,
                        room = %booking.room_id,
                        total = %booking.price.grand_total,
                        "`Booking` created",
                    );
                    return Ok(booking);
                }
                Err(e) if e.as_ref().is_duplicate() => {
                    log::warn!(
                        "`{}` confirmation number is taken, regenerating",
                        booking.confirmation,
                    );
                    booking.confirmation = self.generate_confirmation();
                }
                Err(e) => {
                    return Err(e).map_err(tracerr::map_from_and_wrap!(=> E));
                }
            }
        }

        Err(tracerr::new!(E::ConfirmationNumberExhausted(attempts)))
    }
}

/// Error of [`CreateBooking`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Quote`] of the [`Booking`] failed.
    #[display("cannot price `Booking`: {_0}")]
    #[from]
    Quote(quote::ExecutionError),

    /// No unused [`ConfirmationNumber`] was generated.
    #[display("no unused confirmation number in {_0} attempts")]
    ConfirmationNumberExhausted(#[error(not(source))] NonZeroU8),
}
