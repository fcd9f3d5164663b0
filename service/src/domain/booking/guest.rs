//! [`Guest`] definitions.

use std::{str::FromStr, sync::LazyLock};

use derive_more::{AsRef, Display};
use regex::Regex;

/// Contact details of a guest making a booking.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Guest {
    /// First [`Name`] of this [`Guest`].
    pub first_name: Name,

    /// Last [`Name`] of this [`Guest`].
    pub last_name: Name,

    /// [`Email`] of this [`Guest`].
    pub email: Email,

    /// [`Phone`] of this [`Guest`].
    pub phone: Phone,
}

/// First or last name of a [`Guest`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] out of the trimmed `name` if it's valid.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Option<Self> {
        let name = name.as_ref().trim();
        Self::check(name).then(|| Self(name.to_owned()))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: &str) -> bool {
        /// Regular expression checking [`Name`] invariants:
        /// - Must contain letters and spaces only;
        /// - Must be at least 2 characters long.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[\p{L} ]{2,128}$").expect("valid regex")
        });

        REGEX.is_match(name)
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Email address of a [`Guest`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Email`].
    fn check(address: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Email`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex")
        });

        REGEX.is_match(address.as_ref())
    }

    /// Indicates whether this [`Email`] is the provided `address`, ignoring
    /// the letters case.
    #[must_use]
    pub fn matches(&self, address: &str) -> bool {
        self.0.to_lowercase() == address.trim().to_lowercase()
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}

/// Phone number of a [`Guest`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Phone(String);

impl Phone {
    /// Minimal number of digits in a [`Phone`].
    pub const MIN_DIGITS: usize = 10;

    /// Creates a new [`Phone`] if the given `number` is valid.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Option<Self> {
        let number = number.into();
        Self::check(&number).then_some(Self(number))
    }

    /// Checks whether the given `number` is a valid [`Phone`].
    fn check(number: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Phone`] characters.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[\d\s+\-()]+$").expect("valid regex")
        });

        let number = number.as_ref();
        REGEX.is_match(number)
            && number.chars().filter(char::is_ascii_digit).count()
                >= Self::MIN_DIGITS
    }
}

impl FromStr for Phone {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Phone`")
    }
}

#[cfg(test)]
mod spec {
    use super::{Email, Name, Phone};

    #[test]
    fn validates_names() {
        assert_eq!(Name::new("  John ").unwrap().to_string(), "John");
        assert!(Name::new("Mary Ann").is_some());
        assert!(Name::new("Zoë").is_some());

        assert!(Name::new("J").is_none());
        assert!(Name::new("   ").is_none());
        assert!(Name::new("R2D2").is_none());
        assert!(Name::new("O'Neil").is_none());
    }

    #[test]
    fn validates_emails() {
        assert!(Email::new("john.doe@example.com").is_some());
        assert!(Email::new("a@b.co").is_some());

        assert!(Email::new("john.doe@example").is_none());
        assert!(Email::new("john doe@example.com").is_none());
        assert!(Email::new("@example.com").is_none());
        assert!(Email::new("john@@example.com").is_none());
    }

    #[test]
    fn matches_emails_case_insensitively() {
        let email = Email::new("John.Doe@Example.com").unwrap();

        assert!(email.matches("john.doe@example.com"));
        assert!(email.matches(" JOHN.DOE@EXAMPLE.COM "));
        assert!(!email.matches("jane.doe@example.com"));
    }

    #[test]
    fn validates_phones() {
        assert!(Phone::new("+1 (555) 123-4567").is_some());
        assert!(Phone::new("5551234567").is_some());

        assert!(Phone::new("555-1234").is_none());
        assert!(Phone::new("+1 555 CALL NOW").is_none());
        assert!(Phone::new("").is_none());
    }
}
