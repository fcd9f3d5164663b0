//! [`Database`]-related implementations.

pub mod memory;

use derive_more::{Display, Error as StdError, From};

pub use self::memory::Memory;

/// Database operation.
pub use common::Handler as Database;

/// [`Database`] error.
#[derive(Clone, Copy, Debug, Display, From, StdError)]
pub enum Error {
    /// [`Memory`] error.
    Memory(memory::Error),
}

impl Error {
    /// Indicates whether this [`Error`] is caused by storing a value, which
    /// unique key is taken already.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Memory(memory::Error::Duplicate(_)))
    }

    /// Indicates whether this [`Error`] is caused by replacing a value, which
    /// was changed concurrently.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Memory(memory::Error::Conflict(_)))
    }
}
