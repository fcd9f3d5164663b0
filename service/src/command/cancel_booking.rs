//! [`Command`] for cancelling a [`Booking`].

use common::operations::{By, Replace, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        booking::{self, guest, ConfirmationNumber},
        cancellation,
        stay::CheckInDateTime,
        Booking,
    },
    infra::{database, Clock, Database},
    Service,
};

use super::Command;

/// [`Command`] for cancelling a confirmed [`Booking`].
///
/// Cancellation is free of charge until the configured notice before the
/// check-in, and costs a single night after that.
#[derive(Clone, Debug)]
pub struct CancelBooking {
    /// [`ConfirmationNumber`] of the [`Booking`].
    pub confirmation: ConfirmationNumber,

    /// [`Email`] the [`Booking`] was made with, in any letters case.
    ///
    /// [`Email`]: guest::Email
    pub email: guest::Email,
}

impl<Db, Clk> Command<CancelBooking> for Service<Db, Clk>
where
    Db: Database<
            Select<By<Option<Booking>, ConfirmationNumber>>,
            Ok = Option<Booking>,
            Err = Traced<database::Error>,
        > + Database<Replace<Booking>, Ok = (), Err = Traced<database::Error>>,
    Clk: Clock,
{
    type Ok = Booking;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CancelBooking) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CancelBooking {
            confirmation,
            email,
        } = cmd;

        let now = self.now();
        let notice = self.config().cancellation.free_notice;
        loop {
            let current = self
                .database()
                .execute(Select(By::<Option<Booking>, _>::new(confirmation)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .filter(|b| b.guest.email.matches(email.as_ref()))
                .ok_or(E::BookingNotExists(confirmation))
                .map_err(tracerr::wrap!())?;

            if current.status != booking::Status::Confirmed {
                return Err(tracerr::new!(E::NotConfirmed(current.status)));
            }
            let fee = current
                .cancellation_fee(now, notice)
                .ok_or(E::CheckInPassed(current.check_in_at))
                .map_err(tracerr::wrap!())?;

            let mut booking = current.clone();
            booking.status = booking::Status::Cancelled;
            booking.cancellation = Some(cancellation::Record {
                fee,
                cancelled_at: now.coerce(),
            });
            match self
                .database()
                .execute(Replace {
                    current,
                    new: booking.clone(),
                })
                .await
            {
                Ok(()) => {
                    log::info!(
                        confirmation = %booking.confirmation,
                        %fee,
                        "`Booking` cancelled",
                    );
                    return Ok(booking);
                }
                Err(e) if e.as_ref().is_conflict() => {
                    log::debug!(
                        %confirmation,
                        "`Booking` changed concurrently, retrying",
                    );
                }
                Err(e) => {
                    return Err(e).map_err(tracerr::map_from_and_wrap!(=> E));
                }
            }
        }
    }
}

/// Error of [`CancelBooking`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Booking`] doesn't exist or was made with another email.
    #[display("`Booking(confirmation: {_0})` does not exist")]
    BookingNotExists(#[error(not(source))] ConfirmationNumber),

    /// [`Booking`] is not confirmed.
    #[display("`Booking` is `{_0}`, but `CONFIRMED` is required")]
    NotConfirmed(#[error(not(source))] booking::Status),

    /// Check-in moment of the [`Booking`] has passed already.
    #[display("check-in at `{_0}` has passed already")]
    CheckInPassed(#[error(not(source))] CheckInDateTime),
}

#[cfg(test)]
mod spec {
    use common::{Currency, Money};

    use crate::{
        command::CreateBooking,
        domain::{add_on, booking, room, Booking, Stay},
        infra::{clock, Memory},
        query::{booking::ByConfirmation, fixture},
        Command as _, Service,
    };

    use super::{CancelBooking, ExecutionError};

    /// Books 2 nights in a `350USD` room, checking in at
    /// `2025-11-20T14:00:00Z`.
    async fn book(svc: &Service<Memory, clock::Fixed>) -> Booking {
        svc.execute(CreateBooking {
            room_id: room::Id::from(2),
            stay: Stay::new(
                "2025-11-20".parse().unwrap(),
                "2025-11-22".parse().unwrap(),
            )
            .unwrap(),
            guests: 2,
            guest: fixture::guest(),
            add_ons: add_on::Selection::default(),
        })
        .await
        .unwrap()
    }

    fn cancel(booking: &Booking, email: &str) -> CancelBooking {
        CancelBooking {
            confirmation: booking.confirmation,
            email: email.parse().unwrap(),
        }
    }

    /// Returns the `svc` with its clock moved to `now`.
    fn at(
        svc: &Service<Memory, clock::Fixed>,
        now: &str,
    ) -> Service<Memory, clock::Fixed> {
        svc.clone().with_clock(clock::Fixed(now.parse().unwrap()))
    }

    #[tokio::test]
    async fn cancels_free_of_charge_before_notice() {
        let svc = fixture::service("2025-11-01T10:00:00Z");
        let booking = book(&svc).await;
        let svc = at(&svc, "2025-11-19T14:00:00Z");

        let cancelled = svc
            .execute(cancel(&booking, "John.Doe@Example.com"))
            .await
            .unwrap();

        assert_eq!(cancelled.status, booking::Status::Cancelled);
        let record = cancelled.cancellation.unwrap();
        assert_eq!(record.fee, Money::zero(Currency::Usd));
        assert_eq!(record.cancelled_at.to_string(), "2025-11-19T14:00:00Z");

        let stored = svc
            .execute(ByConfirmation {
                confirmation: booking.confirmation,
                email: booking.guest.email.clone(),
            })
            .await
            .unwrap();
        assert_eq!(stored, Some(cancelled));
    }

    #[tokio::test]
    async fn charges_single_night_within_notice() {
        let svc = fixture::service("2025-11-01T10:00:00Z");
        let booking = book(&svc).await;

        let cancelled = at(&svc, "2025-11-19T14:00:01Z")
            .execute(cancel(&booking, "john.doe@example.com"))
            .await
            .unwrap();

        assert_eq!(
            cancelled.cancellation.map(|c| c.fee),
            Some(Money::new(350, Currency::Usd)),
        );
    }

    #[tokio::test]
    async fn refuses_after_check_in() {
        let svc = fixture::service("2025-11-01T10:00:00Z");
        let booking = book(&svc).await;

        let err = at(&svc, "2025-11-20T14:00:00Z")
            .execute(cancel(&booking, "john.doe@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::CheckInPassed(_)));
    }

    #[tokio::test]
    async fn refuses_second_cancellation() {
        let svc = fixture::service("2025-11-01T10:00:00Z");
        let booking = book(&svc).await;

        _ = svc
            .execute(cancel(&booking, "john.doe@example.com"))
            .await
            .unwrap();
        let err = svc
            .execute(cancel(&booking, "john.doe@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::NotConfirmed(booking::Status::Cancelled),
        ));
    }

    #[tokio::test]
    async fn refuses_unknown_email() {
        let svc = fixture::service("2025-11-01T10:00:00Z");
        let booking = book(&svc).await;

        let err = svc
            .execute(cancel(&booking, "someone@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::BookingNotExists(_)));
    }
}
