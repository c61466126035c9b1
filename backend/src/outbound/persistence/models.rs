//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and never
//! leave it; the repository converts them into domain types.

use diesel::prelude::*;

use crate::domain::{User, UserDraft, UserId};

use super::schema::users;

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub description: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        let UserRow {
            id,
            name,
            email,
            description,
        } = row;
        Self::new(UserId::new(id), UserDraft::new(name, email, description))
    }
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub description: Option<&'a str>,
}

/// Changeset replacing every mutable column.
///
/// `None` writes `NULL` rather than skipping the column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct UserChangeset<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub description: Option<&'a str>,
}

impl<'a> From<&'a UserDraft> for NewUserRow<'a> {
    fn from(draft: &'a UserDraft) -> Self {
        Self {
            name: draft.name.as_str(),
            email: draft.email.as_str(),
            description: draft.description.as_deref(),
        }
    }
}

impl<'a> From<&'a UserDraft> for UserChangeset<'a> {
    fn from(draft: &'a UserDraft) -> Self {
        Self {
            name: draft.name.as_str(),
            email: draft.email.as_str(),
            description: draft.description.as_deref(),
        }
    }
}
