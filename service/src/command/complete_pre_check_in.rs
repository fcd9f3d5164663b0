//! [`Command`] for completing a pre-check-in of a [`Booking`].

use common::operations::{By, Replace, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        booking::{self, guest, ConfirmationNumber},
        pre_check_in,
        stay::CheckInDateTime,
        Booking,
    },
    infra::{database, Clock, Database},
    Service,
};

use super::Command;

/// [`Command`] for completing a pre-check-in of a [`Booking`].
#[derive(Clone, Debug)]
pub struct CompletePreCheckIn {
    /// [`ConfirmationNumber`] of the [`Booking`].
    pub confirmation: ConfirmationNumber,

    /// [`Email`] the [`Booking`] was made with, in any letters case.
    ///
    /// [`Email`]: guest::Email
    pub email: guest::Email,

    /// Arrival [`pre_check_in::Details`] of the guest.
    pub details: pre_check_in::Details,

    /// Whether the guest accepted the hotel policies.
    pub terms_accepted: bool,
}

impl<Db, Clk> Command<CompletePreCheckIn> for Service<Db, Clk>
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

    async fn execute(
        &self,
        cmd: CompletePreCheckIn,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CompletePreCheckIn {
            confirmation,
            email,
            details,
            terms_accepted,
        } = cmd;

        if !terms_accepted {
            return Err(tracerr::new!(E::TermsNotAccepted));
        }

        let now = self.now();
        let window = self.config().pre_check_in.window;
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
            if current.pre_check_in.is_some() {
                return Err(tracerr::new!(E::AlreadyCompleted(confirmation)));
            }
            if !pre_check_in::is_eligible(current.check_in_at, now, window) {
                return Err(tracerr::new!(E::OutsideWindow(
                    current.check_in_at
                )));
            }

            let mut booking = current.clone();
            booking.pre_check_in = Some(pre_check_in::Record {
                details: details.clone(),
                completed_at: now.coerce(),
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
                        "`Booking` pre-check-in completed",
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

/// Error of [`CompletePreCheckIn`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Hotel policies were not accepted.
    #[display("hotel policies must be accepted")]
    TermsNotAccepted,

    /// [`Booking`] doesn't exist or was made with another email.
    #[display("`Booking(confirmation: {_0})` does not exist")]
    BookingNotExists(#[error(not(source))] ConfirmationNumber),

    /// [`Booking`] is not confirmed.
    #[display("`Booking` is `{_0}`, but `CONFIRMED` is required")]
    NotConfirmed(#[error(not(source))] booking::Status),

    /// Pre-check-in of the [`Booking`] is completed already.
    #[display("`Booking(confirmation: {_0})` pre-check-in is completed already")]
    AlreadyCompleted(#[error(not(source))] ConfirmationNumber),

    /// Pre-check-in is not open at the current moment.
    #[display("pre-check-in is closed for check-in at `{_0}`")]
    OutsideWindow(#[error(not(source))] CheckInDateTime),
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{CancelBooking, CreateBooking},
        domain::{
            add_on,
            booking::{self, guest},
            pre_check_in::{ArrivalTime, Details, Floor, Keys},
            room, Booking, Stay,
        },
        infra::{clock, Memory},
        query::{
            booking::ByConfirmation, bookings::EligibleForPreCheckIn, fixture,
        },
        Command as _, Service,
    };

    use super::{CompletePreCheckIn, ExecutionError};

    /// Books a stay checking in at `2025-11-20T14:00:00Z`.
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

    fn complete(booking: &Booking, email: &str) -> CompletePreCheckIn {
        CompletePreCheckIn {
            confirmation: booking.confirmation,
            email: guest::Email::new(email).unwrap(),
            details: Details {
                arrival_time: ArrivalTime::Afternoon,
                keys: Keys::new(2).unwrap(),
                preferred_floor: Floor::High,
                special_requests: Some("Quiet room".into()),
            },
            terms_accepted: true,
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
    async fn completes_within_window() {
        let svc = fixture::service("2025-11-01T10:00:00Z");
        let booking = book(&svc).await;
        let svc = at(&svc, "2025-11-19T20:00:00Z");

        let done = svc
            .execute(complete(&booking, "JOHN.DOE@example.com"))
            .await
            .unwrap();
        let record = done.pre_check_in.clone().unwrap();
        assert_eq!(record.details.preferred_floor, Floor::High);
        assert_eq!(record.completed_at.to_string(), "2025-11-19T20:00:00Z");

        let stored = svc
            .execute(ByConfirmation {
                confirmation: booking.confirmation,
                email: booking.guest.email.clone(),
            })
            .await
            .unwrap();
        assert_eq!(stored, Some(done));
    }

    #[tokio::test]
    async fn refuses_second_completion() {
        let svc = fixture::service("2025-11-01T10:00:00Z");
        let booking = book(&svc).await;
        let svc = at(&svc, "2025-11-20T08:00:00Z");

        _ = svc
            .execute(complete(&booking, "john.doe@example.com"))
            .await
            .unwrap();
        let err = svc
            .execute(complete(&booking, "john.doe@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::AlreadyCompleted(_)));
    }

    #[tokio::test]
    async fn refuses_outside_window() {
        let svc = fixture::service("2025-11-01T10:00:00Z");
        let booking = book(&svc).await;

        for now in ["2025-11-19T13:59:59Z", "2025-11-20T14:00:00Z"] {
            let err = at(&svc, now)
                .execute(complete(&booking, "john.doe@example.com"))
                .await
                .unwrap_err();

            assert!(
                matches!(err.as_ref(), ExecutionError::OutsideWindow(_)),
                "at `{now}`",
            );
        }
    }

    #[tokio::test]
    async fn refuses_unknown_booking_or_email() {
        let svc = fixture::service("2025-11-01T10:00:00Z");
        let booking = book(&svc).await;
        let svc = at(&svc, "2025-11-20T08:00:00Z");

        let err = svc
            .execute(complete(&booking, "someone@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::BookingNotExists(_)));

        let mut unknown = complete(&booking, "john.doe@example.com");
        unknown.confirmation = if booking.confirmation.digits() == 999_999 {
            "GLM999998"
        } else {
            "GLM999999"
        }
        .parse()
        .unwrap();
        let err = svc.execute(unknown).await.unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::BookingNotExists(_)));
    }

    #[tokio::test]
    async fn refuses_cancelled_booking() {
        let svc = fixture::service("2025-11-01T10:00:00Z");
        let booking = book(&svc).await;
        let cancelled = svc
            .execute(CancelBooking {
                confirmation: booking.confirmation,
                email: booking.guest.email.clone(),
            })
            .await
            .unwrap();
        assert_eq!(cancelled.status, booking::Status::Cancelled);
        let svc = at(&svc, "2025-11-20T08:00:00Z");

        let err = svc
            .execute(complete(&booking, "john.doe@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::NotConfirmed(booking::Status::Cancelled),
        ));
    }

    #[tokio::test]
    async fn requires_accepted_terms() {
        let svc = fixture::service("2025-11-01T10:00:00Z");
        let booking = book(&svc).await;
        let svc = at(&svc, "2025-11-20T08:00:00Z");

        let mut cmd = complete(&booking, "john.doe@example.com");
        cmd.terms_accepted = false;
        let err = svc.execute(cmd).await.unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::TermsNotAccepted));
    }

    #[tokio::test]
    async fn lists_only_eligible_bookings() {
        let svc = fixture::service("2025-11-01T10:00:00Z");
        let first = book(&svc).await;
        let second = book(&svc).await;
        let email = guest::Email::new("John.Doe@Example.com").unwrap();

        let early = at(&svc, "2025-11-18T08:00:00Z")
            .execute(EligibleForPreCheckIn {
                email: email.clone(),
            })
            .await
            .unwrap();
        assert!(early.is_empty());

        let svc = at(&svc, "2025-11-20T08:00:00Z");
        let open = svc
            .execute(EligibleForPreCheckIn {
                email: email.clone(),
            })
            .await
            .unwrap();
        assert_eq!(open.len(), 2);

        let done = svc
            .execute(complete(&first, "john.doe@example.com"))
            .await
            .unwrap();
        assert!(done.pre_check_in.is_some());
        let open = svc
            .execute(EligibleForPreCheckIn { email })
            .await
            .unwrap();
        assert_eq!(
            open.iter().map(|b| b.confirmation).collect::<Vec<_>>(),
            vec![second.confirmation],
        );
    }

    #[tokio::test]
    async fn completes_only_once_when_raced() {
        let svc = fixture::service("2025-11-01T10:00:00Z");
        let booking = book(&svc).await;
        let svc = at(&svc, "2025-11-20T08:00:00Z");

        let (a, b) = tokio::join!(
            svc.execute(complete(&booking, "john.doe@example.com")),
            svc.execute(complete(&booking, "john.doe@example.com")),
        );
        let (done, err) = match (a, b) {
            (Ok(done), Err(err)) | (Err(err), Ok(done)) => (done, err),
            (a, b) => panic!("expected single completion: {a:?}, {b:?}"),
        };

        assert!(done.pre_check_in.is_some());
        assert!(matches!(err.as_ref(), ExecutionError::AlreadyCompleted(_)));
    }
}
