//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters
//! (here, the relational store). Each trait exposes strongly typed errors so
//! adapters map their failures into predictable variants.

mod macros;
mod user_repository;

pub(crate) use macros::define_port_error;

pub use user_repository::{UserPersistenceError, UserRepository};
