//! [`Clock`] definitions.

use common::DateTime;

/// Source of the current [`DateTime`].
pub trait Clock {
    /// Returns the current [`DateTime`].
    fn now(&self) -> DateTime;
}

/// [`Clock`] reading the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct System;

impl Clock for System {
    fn now(&self) -> DateTime {
        DateTime::now()
    }
}

/// [`Clock`] standing still at the provided [`DateTime`].
#[derive(Clone, Copy, Debug)]
pub struct Fixed(pub DateTime);

impl Clock for Fixed {
    fn now(&self) -> DateTime {
        self.0
    }
}
