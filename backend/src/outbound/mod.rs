//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Only persistence exists today: PostgreSQL-backed repositories built on
//! Diesel. Adapters convert between domain types and storage representations
//! and contain no business logic.

pub mod persistence;
