//! Users CRUD service library.
//!
//! Hexagonal layout: [`domain`] holds the entity, errors and the repository
//! port; [`outbound`] implements the port with Diesel on PostgreSQL;
//! [`inbound`] exposes it over Actix HTTP handlers.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
