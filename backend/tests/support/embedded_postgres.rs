//! Embedded PostgreSQL provisioning for integration tests.
//!
//! Every test gets its own temporary database on a process-wide cluster, with
//! the `users` table created by the same bootstrap the service runs.

use pg_embedded_setup_unpriv::TemporaryDatabase;
use tokio::runtime::Runtime;
use users_backend::outbound::persistence::{DbPool, PoolConfig, ensure_users_table};
use uuid::Uuid;

use super::shared_cluster::shared_cluster_handle;

/// A pool connected to a fresh database holding an empty `users` table.
///
/// The temporary database is dropped together with this value.
pub struct ProvisionedDatabase {
    /// Runtime driving every async call made by the test.
    pub runtime: Runtime,
    /// Pool connected to the temporary database.
    pub pool: DbPool,
    _database: TemporaryDatabase,
}

fn new_test_database_name() -> String {
    format!("test_{}", Uuid::new_v4().simple())
}

/// Create a temporary database and bootstrap the schema.
pub fn provision_users_database() -> Result<ProvisionedDatabase, String> {
    let cluster = shared_cluster_handle()?;
    let database = cluster
        .temporary_database(new_test_database_name().as_str())
        .map_err(|err| format!("create temporary database: {err:?}"))?;

    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let config = PoolConfig::new(database.url().to_string())
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(async {
            let pool = DbPool::new(config).await.map_err(|err| err.to_string())?;
            ensure_users_table(&pool)
                .await
                .map_err(|err| err.to_string())?;
            Ok::<_, String>(pool)
        })?;

    Ok(ProvisionedDatabase {
        runtime,
        pool,
        _database: database,
    })
}
