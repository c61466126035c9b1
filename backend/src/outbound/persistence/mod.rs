//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel row structs and
//! domain types. Row structs (`models.rs`) and the table definition
//! (`schema.rs`) stay private to this module. Connections come from a `bb8`
//! pool driven through `diesel-async`.
//!
//! # Example
//!
//! ```rust,no_run
//! use users_backend::outbound::persistence::{
//!     DbPool, DieselUserRepository, PoolConfig, ensure_users_table,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/mini_project")).await?;
//! ensure_users_table(&pool).await?;
//! let repository = DieselUserRepository::new(pool.clone());
//! # let _ = repository;
//! # Ok(())
//! # }
//! ```

mod bootstrap;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;
mod settings;

pub use bootstrap::{USERS_TABLE_DDL, ensure_users_table};
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
pub use settings::{DatabaseSettings, DatabaseSettingsError, load_dotenv};
