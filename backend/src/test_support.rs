//! Test utilities for the backend crate.
//!
//! Shared by unit tests in `src/` and integration tests in `tests/`; compiled
//! only for tests or with the `test-support` feature.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{PageRequest, User, UserDraft, UserId};

/// Name reported for email collisions, matching the database index.
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "ix_users_email";

#[derive(Default)]
struct Store {
    rows: Vec<User>,
    last_id: i32,
    failure: Option<UserPersistenceError>,
}

/// In-memory [`UserRepository`] with the same observable semantics as the
/// Diesel adapter: ids ascend from 1 and are never reused, emails are unique,
/// listing is ordered by id, and missing rows yield `Ok(None)`.
///
/// # Examples
///
/// ```rust
/// use users_backend::domain::ports::UserRepository;
/// use users_backend::domain::{PageRequest, UserDraft};
/// use users_backend::test_support::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let repository = InMemoryUserRepository::default();
/// let draft = UserDraft::new("Ann", "ann@x.com", None);
/// let created = repository.create(&draft).await.expect("insert succeeds");
///
/// let listed = repository.list(PageRequest::default()).await.expect("list succeeds");
/// assert_eq!(listed, vec![created]);
/// # });
/// ```
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: Mutex<Store>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later call fail with `error` until [`Self::recover`].
    pub fn fail_with(&self, error: UserPersistenceError) {
        self.lock().failure = Some(error);
    }

    /// Stop injecting failures.
    pub fn recover(&self) {
        self.lock().failure = None;
    }

    /// Current rows in id order.
    pub fn snapshot(&self) -> Vec<User> {
        self.lock().rows.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn checked(&self) -> Result<MutexGuard<'_, Store>, UserPersistenceError> {
        let store = self.lock();
        match &store.failure {
            Some(error) => Err(error.clone()),
            None => Ok(store),
        }
    }
}

fn email_taken(rows: &[User], email: &str, except: Option<UserId>) -> bool {
    rows.iter()
        .any(|row| row.email() == email && Some(row.id()) != except)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<User>, UserPersistenceError> {
        let store = self.checked()?;
        let skip = usize::try_from(page.skip()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        Ok(store.rows.iter().skip(skip).take(limit).cloned().collect())
    }

    async fn create(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut store = self.checked()?;
        if email_taken(&store.rows, &draft.email, None) {
            return Err(UserPersistenceError::unique_violation(
                EMAIL_UNIQUE_CONSTRAINT,
            ));
        }
        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| UserPersistenceError::query("user id sequence exhausted"))?;
        store.last_id = id;
        let user = User::new(UserId::new(id), draft.clone());
        store.rows.push(user.clone());
        Ok(user)
    }

    async fn delete(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut store = self.checked()?;
        let position = store.rows.iter().position(|row| row.id() == id);
        Ok(position.map(|index| store.rows.remove(index)))
    }

    async fn update(
        &self,
        id: UserId,
        draft: &UserDraft,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut store = self.checked()?;
        if !store.rows.iter().any(|row| row.id() == id) {
            return Ok(None);
        }
        if email_taken(&store.rows, &draft.email, Some(id)) {
            return Err(UserPersistenceError::unique_violation(
                EMAIL_UNIQUE_CONSTRAINT,
            ));
        }
        let updated = store.rows.iter_mut().find(|row| row.id() == id).map(|row| {
            *row = row.clone().with_draft(draft.clone());
            row.clone()
        });
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repository() -> InMemoryUserRepository {
        InMemoryUserRepository::new()
    }

    fn draft(name: &str, email: &str) -> UserDraft {
        UserDraft::new(name, email, Some(format!("{name} bio")))
    }

    #[rstest]
    #[tokio::test]
    async fn ids_are_not_reused_after_delete(repository: InMemoryUserRepository) {
        let first = repository.create(&draft("Ann", "ann@x.com")).await.expect("create");
        repository.delete(first.id()).await.expect("delete");

        let second = repository.create(&draft("Bo", "bo@x.com")).await.expect("create");

        assert_eq!(second.id(), UserId::new(2));
    }

    #[rstest]
    #[tokio::test]
    async fn exhausted_id_sequence_is_a_query_error(repository: InMemoryUserRepository) {
        repository.lock().last_id = i32::MAX;

        let result = repository.create(&draft("Ann", "ann@x.com")).await;

        assert_eq!(
            result,
            Err(UserPersistenceError::query("user id sequence exhausted"))
        );
        assert!(repository.snapshot().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn update_rejects_email_owned_by_another_user(repository: InMemoryUserRepository) {
        repository.create(&draft("Ann", "ann@x.com")).await.expect("create");
        let bo = repository.create(&draft("Bo", "bo@x.com")).await.expect("create");

        let result = repository.update(bo.id(), &draft("Bo", "ann@x.com")).await;

        assert_eq!(
            result,
            Err(UserPersistenceError::unique_violation(EMAIL_UNIQUE_CONSTRAINT))
        );
        assert_eq!(repository.snapshot()[1], bo);
    }

    #[rstest]
    #[tokio::test]
    async fn update_may_keep_own_email(repository: InMemoryUserRepository) {
        let ann = repository.create(&draft("Ann", "ann@x.com")).await.expect("create");

        let updated = repository
            .update(ann.id(), &draft("Ann2", "ann@x.com"))
            .await
            .expect("update")
            .expect("row exists");

        assert_eq!(updated.name(), "Ann2");
    }

    #[rstest]
    #[tokio::test]
    async fn injected_failures_apply_until_recovered(repository: InMemoryUserRepository) {
        repository.fail_with(UserPersistenceError::connection("down"));
        assert!(repository.list(PageRequest::default()).await.is_err());

        repository.recover();
        assert!(repository.list(PageRequest::default()).await.is_ok());
    }
}
