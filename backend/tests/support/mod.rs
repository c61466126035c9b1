//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`; this
//! module is included by each suite that needs a database.

pub mod cluster_skip;
pub mod embedded_postgres;
pub mod shared_cluster;

pub use cluster_skip::handle_cluster_setup_failure;
pub use embedded_postgres::{ProvisionedDatabase, provision_users_database};
