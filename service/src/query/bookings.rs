//! [`Query`] collection related to multiple [`Booking`]s.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{booking::guest, Booking},
    infra::{database, Clock, Database},
    Service,
};

use super::Query;

/// Queries [`Booking`]s of a guest which pre-check-in may be completed for
/// right now.
///
/// Only confirmed [`Booking`]s not pre-checked-in yet are listed.
#[derive(Clone, Debug)]
pub struct EligibleForPreCheckIn {
    /// [`Email`] the [`Booking`]s were made with, in any letters case.
    ///
    /// [`Email`]: guest::Email
    pub email: guest::Email,
}

impl<Db, Clk> Query<EligibleForPreCheckIn> for Service<Db, Clk>
where
    Db: Database<
        Select<By<Vec<Booking>, guest::Email>>,
        Ok = Vec<Booking>,
        Err = Traced<database::Error>,
    >,
    Clk: Clock,
{
    type Ok = Vec<Booking>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        query: EligibleForPreCheckIn,
    ) -> Result<Self::Ok, Self::Err> {
        let EligibleForPreCheckIn { email } = query;

        let now = self.now();
        let window = self.config().pre_check_in.window;
        let mut bookings = self
            .database()
            .execute(Select(By::new(email)))
            .await
            .map_err(tracerr::wrap!())?;
        bookings.retain(|b| b.is_open_for_pre_check_in(now, window));

        Ok(bookings)
    }
}
