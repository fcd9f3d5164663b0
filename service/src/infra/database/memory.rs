//! In-memory [`Database`] implementation.

use std::{collections::HashMap, sync::Arc};

use common::operations::{By, Insert, Replace, Select};
use derive_more::{Display, Error as StdError};
use tokio::sync::RwLock;
use tracerr::Traced;

use crate::{
    domain::{
        booking::{self, ConfirmationNumber},
        room, Booking, Room,
    },
    infra::{database, Database},
};

/// [`Database`] keeping everything in the process memory.
///
/// [`Room`]s are fixed at creation, while [`Booking`]s live as long as any
/// clone of this [`Memory`] does.
#[derive(Clone, Debug)]
pub struct Memory {
    /// Catalog of [`Room`]s in the order they were added.
    rooms: Arc<[Room]>,

    /// Stored [`Booking`]s indexed by their [`ConfirmationNumber`].
    bookings: Arc<RwLock<HashMap<ConfirmationNumber, Booking>>>,
}

impl Memory {
    /// Creates a new [`Memory`] with the provided catalog of [`Room`]s and no
    /// [`Booking`]s.
    #[must_use]
    pub fn new(rooms: impl IntoIterator<Item = Room>) -> Self {
        Self {
            rooms: rooms.into_iter().collect(),
            bookings: Arc::default(),
        }
    }
}

/// [`Memory`] error.
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// [`Booking`] with the same [`ConfirmationNumber`] is stored already.
    #[display("`Booking(confirmation: {_0})` already exists")]
    Duplicate(#[error(not(source))] ConfirmationNumber),

    /// [`Booking`] to replace is not stored.
    #[display("`Booking(confirmation: {_0})` does not exist")]
    NotFound(#[error(not(source))] ConfirmationNumber),

    /// [`Booking`] to replace was changed since it has been read.
    #[display("`Booking(confirmation: {_0})` was changed concurrently")]
    Conflict(#[error(not(source))] ConfirmationNumber),
}

impl Database<Select<By<Option<Room>, room::Id>>> for Memory {
    type Ok = Option<Room>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Room>, room::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.rooms.iter().find(|r| r.id == id).cloned())
    }
}

impl Database<Select<By<Vec<Room>, room::Filter>>> for Memory {
    type Ok = Vec<Room>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Room>, room::Filter>>,
    ) -> Result<Self::Ok, Self::Err> {
        let filter = by.into_inner();
        Ok(self
            .rooms
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }
}

impl Database<Select<By<Option<Booking>, ConfirmationNumber>>> for Memory {
    type Ok = Option<Booking>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Booking>, ConfirmationNumber>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.bookings.read().await.get(by.by()).cloned())
    }
}

impl Database<Select<By<Vec<Booking>, booking::guest::Email>>> for Memory {
    type Ok = Vec<Booking>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Booking>, booking::guest::Email>>,
    ) -> Result<Self::Ok, Self::Err> {
        let email = by.into_inner();
        let mut bookings = self
            .bookings
            .read()
            .await
            .values()
            .filter(|b| b.guest.email.matches(email.as_ref()))
            .cloned()
            .collect::<Vec<_>>();
        bookings.sort_by_key(|b| (b.check_in_at, b.confirmation));
        Ok(bookings)
    }
}

impl Database<Insert<Booking>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(booking): Insert<Booking>,
    ) -> Result<Self::Ok, Self::Err> {
        use std::collections::hash_map::Entry;

        match self.bookings.write().await.entry(booking.confirmation) {
            Entry::Occupied(e) => Err(tracerr::new!(database::Error::from(
                Error::Duplicate(*e.key())
            ))),
            Entry::Vacant(e) => {
                _ = e.insert(booking);
                Ok(())
            }
        }
    }
}

impl Database<Replace<Booking>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Replace { current, new }: Replace<Booking>,
    ) -> Result<Self::Ok, Self::Err> {
        let number = new.confirmation;
        let mut bookings = self.bookings.write().await;
        let stored = bookings.get_mut(&number).ok_or_else(|| {
            tracerr::new!(database::Error::from(Error::NotFound(number)))
        })?;
        if *stored != current {
            return Err(tracerr::new!(database::Error::from(Error::Conflict(
                number
            ))));
        }
        *stored = new;
        Ok(())
    }
}
