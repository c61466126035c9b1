//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint in the inbound layer together
//! with the request and response schemas they reference. The document backs
//! Swagger UI in debug builds and is exported by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorBody, RootMessage, UserCreate, UserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        description = "CRUD operations over stored users, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::root::root,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserCreate, UserResponse, ErrorBody, RootMessage)),
    tags(
        (name = "users", description = "User records"),
        (name = "health", description = "Orchestrator probes"),
        (name = "root", description = "Smoke check")
    )
)]
pub struct ApiDoc;
