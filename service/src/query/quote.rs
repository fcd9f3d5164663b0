//! [`Query`] for pricing a stay in a [`Room`].

use derive_more::{Display, Error, From};
use tracerr::Traced;

#[cfg(doc)]
use crate::infra::Database;
use crate::{
    domain::{add_on, room, Breakdown, InvalidInput, Room, Stay},
    infra::database,
    Service,
};

use super::{room::ById, Query};

/// [`Query`] for pricing a [`Stay`] in a catalog [`Room`].
#[derive(Clone, Copy, Debug)]
pub struct Quote {
    /// ID of the [`Room`] to stay in.
    pub room_id: room::Id,

    /// [`Stay`] to price.
    pub stay: Stay,

    /// Number of guests staying.
    pub guests: u32,

    /// Selected [`AddOn`]s.
    ///
    /// [`AddOn`]: crate::domain::AddOn
    pub add_ons: add_on::Selection,
}

impl<Db, Clk> Query<Quote> for Service<Db, Clk>
where
    Self: Query<ById, Ok = Option<Room>, Err = Traced<database::Error>>,
{
    type Ok = Breakdown;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, query: Quote) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let Quote {
            room_id,
            stay,
            guests,
            add_ons,
        } = query;

        let room = self
            .execute(ById::by(room_id))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::RoomNotExists(room_id))
            .map_err(tracerr::wrap!())?;
        if !room.capacity.fits(guests) {
            return Err(tracerr::new!(E::CapacityExceeded {
                room_id,
                capacity: room.capacity,
                guests,
            }));
        }

        self.config()
            .pricing
            .quote(room.nightly_price, stay.nights(), guests, &add_ons)
            .map_err(E::InvalidInput)
            .map_err(tracerr::wrap!())
    }
}

/// Error of [`Quote`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Room`] doesn't exist.
    #[display("`Room(id: {_0})` does not exist")]
    #[from(ignore)]
    RoomNotExists(#[error(not(source))] room::Id),

    /// [`Room`] cannot accommodate the requested number of guests.
    #[display(
        "`Room(id: {room_id})` accommodates at most {capacity} guests, \
         but {guests} requested"
    )]
    #[from(ignore)]
    CapacityExceeded {
        /// ID of the [`Room`].
        room_id: room::Id,

        /// [`room::Capacity`] of the [`Room`].
        capacity: room::Capacity,

        /// Requested number of guests.
        guests: u32,
    },

    /// Price cannot be computed out of the provided values.
    #[display("invalid input: {_0}")]
    InvalidInput(InvalidInput),
}
