//! Infrastructure layer.

pub mod clock;
pub mod database;

pub use self::{
    clock::Clock,
    database::{Database, Memory},
};
