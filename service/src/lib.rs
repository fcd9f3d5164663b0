//! Service contains the business logic of the hotel booking.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;

use std::{
    num::NonZeroU8,
    sync::{Arc, Mutex, PoisonError},
};

use common::DateTime;
use rand::SeedableRng as _;
use rand_chacha::ChaCha8Rng;
use smart_default::SmartDefault;

#[cfg(doc)]
use crate::infra::Database;
use crate::{
    domain::{booking::ConfirmationNumber, cancellation, pre_check_in, pricing},
    infra::{clock, Clock},
};

pub use self::{command::Command, query::Query};

/// Default number of attempts to generate an unused [`ConfirmationNumber`].
const DEFAULT_CONFIRMATION_ATTEMPTS: NonZeroU8 = match NonZeroU8::new(10) {
    Some(n) => n,
    None => panic!("10 is not zero"),
};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// [`pricing::Config`] every booking is priced with.
    pub pricing: pricing::Config,

    /// [`pre_check_in::Config`] of bookings.
    pub pre_check_in: pre_check_in::Config,

    /// [`cancellation::Config`] of bookings.
    pub cancellation: cancellation::Config,

    /// Number of attempts to generate a [`ConfirmationNumber`] not used by
    /// any stored booking.
    #[default(DEFAULT_CONFIRMATION_ATTEMPTS)]
    pub confirmation_attempts: NonZeroU8,

    /// Seed of the random source, making generated [`ConfirmationNumber`]s
    /// reproducible.
    ///
    /// [`None`] seeds from the operating system.
    pub seed: Option<u64>,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Db, Clk = clock::System> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Database`] of this [`Service`].
    database: Db,

    /// [`Clock`] of this [`Service`].
    clock: Clk,

    /// Random source of this [`Service`].
    rng: Arc<Mutex<ChaCha8Rng>>,
}

impl<Db> Service<Db> {
    /// Creates a new [`Service`] with the provided parameters, reading the
    /// system time.
    #[must_use]
    pub fn new(config: Config, database: Db) -> Self {
        let rng = config
            .seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        Self {
            config,
            database,
            clock: clock::System,
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}

impl<Db, Clk> Service<Db, Clk> {
    /// Replaces the [`Clock`] of this [`Service`].
    #[must_use]
    pub fn with_clock<C: Clock>(self, clock: C) -> Service<Db, C> {
        let Self {
            config,
            database,
            clock: _,
            rng,
        } = self;
        Service {
            config,
            database,
            clock,
            rng,
        }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Database`] of this [`Service`].
    #[must_use]
    pub fn database(&self) -> &Db {
        &self.database
    }

    /// Returns the current [`DateTime`] according to the [`Clock`] of this
    /// [`Service`].
    #[must_use]
    pub fn now(&self) -> DateTime
    where
        Clk: Clock,
    {
        self.clock.now()
    }

    /// Generates a new random [`ConfirmationNumber`].
    fn generate_confirmation(&self) -> ConfirmationNumber {
        // The generator holds no invariants a panicked holder could break.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        ConfirmationNumber::generate(&mut *rng)
    }
}
