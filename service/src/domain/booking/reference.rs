//! Human-facing references of a [`Booking`].
//!
//! [`Booking`]: super::Booking

use std::{fmt, str::FromStr};

use common::DateTimeOf;
use derive_more::{Display, Error};
use rand::Rng;

/// Confirmation number of a [`Booking`], like `GLM482913`.
///
/// [`Booking`]: super::Booking
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ConfirmationNumber(u32);

impl ConfirmationNumber {
    /// Prefix of every [`ConfirmationNumber`].
    pub const PREFIX: &'static str = "GLM";

    /// Smallest numeric part of a [`ConfirmationNumber`].
    const MIN: u32 = 100_000;

    /// Largest numeric part of a [`ConfirmationNumber`].
    const MAX: u32 = 999_999;

    /// Generates a new [`ConfirmationNumber`] uniformly at random.
    #[must_use]
    pub fn generate(rng: &mut impl Rng) -> Self {
        Self(rng.gen_range(Self::MIN..=Self::MAX))
    }

    /// Returns the numeric part of this [`ConfirmationNumber`].
    #[must_use]
    pub fn digits(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ConfirmationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

impl FromStr for ConfirmationNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .trim()
            .strip_prefix(Self::PREFIX)
            .ok_or(ParseError::Prefix)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::Digits);
        }
        digits
            .parse()
            .ok()
            .filter(|n| (Self::MIN..=Self::MAX).contains(n))
            .map(Self)
            .ok_or(ParseError::Digits)
    }
}

/// Error of parsing a [`ConfirmationNumber`].
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum ParseError {
    /// The value doesn't start with [`ConfirmationNumber::PREFIX`].
    #[display("confirmation number must start with `GLM`")]
    Prefix,

    /// The value has no six digits after the prefix.
    #[display("confirmation number must end with 6 digits")]
    Digits,
}

/// Payment transaction ID of a [`Booking`], like `TXN1763647200123`.
///
/// [`Booking`]: super::Booking
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TransactionId(i64);

impl TransactionId {
    /// Prefix of every [`TransactionId`].
    pub const PREFIX: &'static str = "TXN";

    /// Creates a new [`TransactionId`] for a payment made at the provided
    /// moment.
    #[must_use]
    pub fn at<Of: ?Sized>(now: DateTimeOf<Of>) -> Self {
        Self(now.unix_timestamp_millis())
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}
