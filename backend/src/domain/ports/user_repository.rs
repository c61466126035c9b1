//! Port abstraction for user persistence adapters and their errors.
//!
//! This is the data access boundary: four operations over the `users` table.
//! "Not found" is a normal outcome reported as `Ok(None)`; only storage
//! failures are errors. Adapters roll back any partial write before returning
//! an error and never retry.

use async_trait::async_trait;

use crate::domain::{PageRequest, User, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established or was lost.
        Connection { message: String } => "user repository connection failed: {message}",
        /// A uniqueness constraint (such as the one on `email`) rejected the write.
        UniqueViolation { constraint: String } => "user repository unique constraint violated: {constraint}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Data access operations over persisted users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return up to `page.limit()` users after skipping `page.skip()` rows.
    async fn list(&self, page: PageRequest) -> Result<Vec<User>, UserPersistenceError>;

    /// Insert a new user and return it with its assigned identity.
    async fn create(&self, draft: &UserDraft) -> Result<User, UserPersistenceError>;

    /// Remove the user with `id`, returning its last state, or `None` when no
    /// such user exists.
    async fn delete(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Overwrite every mutable field of user `id`, returning the stored row, or
    /// `None` when no such user exists.
    async fn update(
        &self,
        id: UserId,
        draft: &UserDraft,
    ) -> Result<Option<User>, UserPersistenceError>;
}
