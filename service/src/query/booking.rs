//! [`Query`] collection related to a single [`Booking`].

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{
        booking::{guest, ConfirmationNumber},
        Booking,
    },
    infra::{database, Database},
    Service,
};

use super::Query;

/// Queries a [`Booking`] by its [`ConfirmationNumber`] and the [`Email`] of
/// its guest.
///
/// A [`Booking`] made with another [`Email`] is not found, so knowing the
/// [`ConfirmationNumber`] alone reveals nothing.
///
/// [`Email`]: guest::Email
#[derive(Clone, Debug)]
pub struct ByConfirmation {
    /// [`ConfirmationNumber`] of the [`Booking`].
    pub confirmation: ConfirmationNumber,

    /// [`Email`] the [`Booking`] was made with, in any letters case.
    ///
    /// [`Email`]: guest::Email
    pub email: guest::Email,
}

impl<Db, Clk> Query<ByConfirmation> for Service<Db, Clk>
where
    Db: Database<
        Select<By<Option<Booking>, ConfirmationNumber>>,
        Ok = Option<Booking>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Option<Booking>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        query: ByConfirmation,
    ) -> Result<Self::Ok, Self::Err> {
        let ByConfirmation {
            confirmation,
            email,
        } = query;

        Ok(self
            .database()
            .execute(Select(By::new(confirmation)))
            .await
            .map_err(tracerr::wrap!())?
            .filter(|b| b.guest.email.matches(email.as_ref())))
    }
}
