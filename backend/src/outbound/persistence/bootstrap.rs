//! Idempotent creation of the `users` table at startup.
//!
//! There is no migration history: the DDL only creates what is missing, so
//! later changes to the entity need manual coordination with the live schema.

use diesel_async::SimpleAsyncConnection;
use tracing::{debug, info};

use crate::domain::ports::UserPersistenceError;

use super::pool::DbPool;

/// DDL matching the Diesel `users` table definition.
pub const USERS_TABLE_DDL: &str = "\
CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    name VARCHAR NOT NULL,
    email VARCHAR NOT NULL,
    description VARCHAR
);
CREATE UNIQUE INDEX IF NOT EXISTS ix_users_email ON users (email);
CREATE INDEX IF NOT EXISTS ix_users_id ON users (id);
";

/// Create the `users` table and its indexes when absent.
///
/// # Errors
///
/// Returns [`UserPersistenceError::Connection`] when no connection can be
/// checked out and [`UserPersistenceError::Query`] when the DDL fails.
pub async fn ensure_users_table(pool: &DbPool) -> Result<(), UserPersistenceError> {
    let mut conn = pool
        .get()
        .await
        .map_err(|err| UserPersistenceError::connection(err.into_message()))?;

    conn.batch_execute(USERS_TABLE_DDL).await.map_err(|err| {
        debug!(error = %err, "users table bootstrap failed");
        UserPersistenceError::query(err.to_string())
    })?;

    info!("users table ready");
    Ok(())
}
