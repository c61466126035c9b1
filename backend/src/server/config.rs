//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use users_backend::domain::ports::UserRepository;
use users_backend::outbound::persistence::{DbPool, DieselUserRepository};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) cors_origins: Vec<String>,
    pub(crate) users: Option<Arc<dyn UserRepository>>,
}

impl ServerConfig {
    /// Configuration binding `bind_addr` with no allowed origins.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            cors_origins: Vec::new(),
            users: None,
        }
    }

    /// Origins allowed to make credentialed cross-origin requests.
    #[must_use]
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }

    /// Serve users from PostgreSQL through `pool`.
    #[must_use]
    pub fn with_db_pool(self, pool: DbPool) -> Self {
        self.with_user_repository(Arc::new(DieselUserRepository::new(pool)))
    }

    /// Serve users from an arbitrary repository implementation.
    #[must_use]
    pub fn with_user_repository(mut self, users: Arc<dyn UserRepository>) -> Self {
        self.users = Some(users);
        self
    }
}
