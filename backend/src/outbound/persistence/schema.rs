//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the DDL in [`super::bootstrap`] exactly.

diesel::table! {
    /// User rows.
    ///
    /// `email` carries a unique index; `description` is nullable.
    users (id) {
        /// Primary key, assigned by a `SERIAL` sequence.
        id -> Int4,
        /// Display name.
        name -> Varchar,
        /// Contact email, unique.
        email -> Varchar,
        /// Optional description.
        description -> Nullable<Varchar>,
    }
}
