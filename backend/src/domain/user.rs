//! User entity and the value types used to read and write it.
//!
//! The entity mirrors the `users` table: a system-assigned integer identity,
//! a required name, a required and unique email, and an optional free-text
//! description. Uniqueness of `email` is enforced by storage, not here.

use std::fmt;

/// Surrogate primary key of a user row.
///
/// Assigned by storage on insert and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// The raw integer value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The mutable fields of a user, as supplied to create and update.
///
/// Update replaces all three fields wholesale; there is no partial patching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    /// Display name.
    pub name: String,
    /// Contact email, unique across all users.
    pub email: String,
    /// Free-text description or bio.
    pub description: Option<String>,
}

impl UserDraft {
    /// Build a draft from its parts.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            description,
        }
    }
}

/// A persisted user row.
///
/// # Examples
/// ```
/// use users_backend::domain::{User, UserDraft, UserId};
///
/// let user = User::new(
///     UserId::new(1),
///     UserDraft::new("Ann", "ann@x.com", Some("bio".to_owned())),
/// );
/// assert_eq!(user.id().get(), 1);
/// assert_eq!(user.email(), "ann@x.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    description: Option<String>,
}

impl User {
    /// Combine an identity with its field values.
    #[must_use]
    pub fn new(id: UserId, draft: UserDraft) -> Self {
        let UserDraft {
            name,
            email,
            description,
        } = draft;
        Self {
            id,
            name,
            email,
            description,
        }
    }

    /// Storage-assigned identity.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Unique contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Replace every mutable field, keeping the identity.
    #[must_use]
    pub fn with_draft(self, draft: UserDraft) -> Self {
        Self::new(self.id, draft)
    }
}

/// Number of rows returned by a list call when no limit is supplied.
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// Offset/limit window passed straight through to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    skip: u32,
    limit: u32,
}

impl PageRequest {
    /// Build a window skipping `skip` rows and returning at most `limit`.
    #[must_use]
    pub const fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }

    /// Rows to skip.
    #[must_use]
    pub const fn skip(self) -> u32 {
        self.skip
    }

    /// Maximum rows to return.
    #[must_use]
    pub const fn limit(self) -> u32 {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_LIMIT)
    }
}
