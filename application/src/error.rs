//! [`Error`]-related definitions.

use std::fmt;

use derive_more::Error as StdError;
use itertools::Itertools as _;
use service::{
    command::create_booking,
    domain::InvalidInput,
    infra::database,
    query::quote,
};
use tracerr::{Trace, Traced};

/// [`Error`] reported by a CLI command.
#[derive(Clone, Debug, StdError)]
pub struct Error {
    /// [`Error`] code.
    pub code: Code,

    /// Backtrace of this [`Error`].
    #[error(not(backtrace))]
    pub backtrace: Option<Trace>,

    /// [`Error`] message.
    pub message: String,
}

impl Error {
    /// Creates a new [`Error`] with the provided [`Code`] and message.
    #[must_use]
    pub fn new(code: Code, msg: &impl ToString) -> Self {
        Self {
            code,
            backtrace: None,
            message: msg.to_string(),
        }
    }

    /// Creates a new [`Error`] representing an internal failure.
    #[must_use]
    pub fn internal(msg: &impl ToString) -> Self {
        Self::new("INTERNAL_ERROR", msg)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            code,
            backtrace,
            message,
        } = self;

        write!(
            f,
            "[{code}]: {message}{}",
            backtrace
                .iter()
                .format_with("\n", |trace, f| f(&format_args!("\n{trace}"))),
        )
    }
}

/// [`Error`] code.
pub type Code = &'static str;

/// Helper trait for converting types into [`Error`]s.
pub trait AsError {
    /// Tries to convert the type into an [`Error`].
    ///
    /// [`None`] is returned if the type cannot be converted into an [`Error`].
    fn try_as_error(&self) -> Option<Error>;

    /// Converts the type into an [`Error`].
    fn as_error(&self) -> Error
    where
        Self: fmt::Display,
    {
        self.try_as_error()
            .unwrap_or_else(|| Error::internal(&self))
    }

    /// Converts the type into an [`Error`] by consuming it.
    fn into_error(self) -> Error
    where
        Self: fmt::Display + Sized,
    {
        self.as_error()
    }
}

impl<E: AsError> AsError for Traced<E> {
    fn try_as_error(&self) -> Option<Error> {
        let mut error = self.as_ref().try_as_error()?;
        error.backtrace = Some(self.trace().clone());
        Some(error)
    }
}

impl AsError for database::Error {
    fn try_as_error(&self) -> Option<Error> {
        None
    }
}

impl AsError for InvalidInput {
    fn try_as_error(&self) -> Option<Error> {
        Some(Error::new("INVALID_INPUT", self))
    }
}

impl AsError for quote::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use quote::ExecutionError as E;

        match self {
            E::Db(e) => e.try_as_error(),
            E::RoomNotExists(_) => Some(Error::new("ROOM_NOT_EXISTS", self)),
            E::CapacityExceeded { .. } => {
                Some(Error::new("CAPACITY_EXCEEDED", self))
            }
            E::InvalidInput(e) => e.try_as_error(),
        }
    }
}

impl AsError for create_booking::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use create_booking::ExecutionError as E;

        match self {
            E::Db(e) => e.try_as_error(),
            E::Quote(e) => e.try_as_error(),
            E::ConfirmationNumberExhausted(_) => None,
        }
    }
}
