//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the repository port and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UserRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User persistence port.
    pub users: Arc<dyn UserRepository>,
}

impl HttpState {
    /// Construct state around a repository implementation.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use users_backend::domain::ports::UserRepository;
    /// use users_backend::inbound::http::state::HttpState;
    ///
    /// fn wire(repository: Arc<dyn UserRepository>) -> HttpState {
    ///     HttpState::new(repository)
    /// }
    /// ```
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
