//! Users API handlers.
//!
//! ```text
//! GET    /users/?skip=0&limit=100
//! POST   /users/          {"name":"Ann","email":"ann@x.com","description":"bio"}
//! PUT    /users/{id}      {"name":"Ann2","email":"ann@x.com","description":"bio2"}
//! DELETE /users/{id}
//! ```
//!
//! The collection routes answer with and without the trailing slash.

use actix_web::{delete, get, post, put, routes, web};
use serde::Deserialize;
use tracing::{debug, error};
use utoipa::IntoParams;

use crate::domain::ports::UserPersistenceError;
use crate::domain::user::DEFAULT_PAGE_LIMIT;
use crate::domain::{Error, PageRequest, UserDraft, UserId};

use super::ApiResult;
use super::schemas::{ErrorBody, UserCreate, UserResponse};
use super::state::HttpState;
use super::validation::{json_config, path_config, query_config};

/// Message returned when an update or delete targets a missing user.
pub const USER_NOT_FOUND: &str = "User not found";

/// Offset/limit query accepted by `GET /users/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Rows to skip.
    #[param(default = 0, minimum = 0)]
    pub skip: u32,
    /// Maximum rows to return.
    #[param(default = 100, minimum = 0)]
    pub limit: u32,
}

impl Default for ListUsersQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl From<ListUsersQuery> for PageRequest {
    fn from(query: ListUsersQuery) -> Self {
        Self::new(query.skip, query.limit)
    }
}

/// Register the users routes and the extractor configuration they rely on.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_backend::inbound::http::users::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(list_users)
        .service(create_user)
        .service(update_user)
        .service(delete_user);
}

fn map_persistence_error(err: UserPersistenceError) -> Error {
    error!(error = %err, "user repository call failed");
    Error::internal(err.to_string())
}

/// List users, ordered by id, windowed by `skip` and `limit`.
#[utoipa::path(
    get,
    path = "/users/",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 422, description = "Invalid query string", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[routes]
#[get("/users")]
#[get("/users/")]
pub async fn list_users(
    state: web::Data<HttpState>,
    query: web::Query<ListUsersQuery>,
) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let page = PageRequest::from(query.into_inner());
    let users = state
        .users
        .list(page)
        .await
        .map_err(map_persistence_error)?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Create a user and return it with its assigned id.
#[utoipa::path(
    post,
    path = "/users/",
    request_body = UserCreate,
    responses(
        (status = 200, description = "Created user", body = UserResponse),
        (status = 400, description = "Body could not be read", body = ErrorBody),
        (status = 422, description = "Body failed validation", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[routes]
#[post("/users")]
#[post("/users/")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserCreate>,
) -> ApiResult<web::Json<UserResponse>> {
    let draft = UserDraft::from(payload.into_inner());
    let user = state
        .users
        .create(&draft)
        .await
        .map_err(map_persistence_error)?;
    debug!(user_id = %user.id(), "user created");
    Ok(web::Json(UserResponse::from(user)))
}

/// Replace every field of an existing user.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    request_body = UserCreate,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "Body could not be read", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 422, description = "Id or body failed validation", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
    payload: web::Json<UserCreate>,
) -> ApiResult<web::Json<UserResponse>> {
    let id = UserId::new(id.into_inner());
    let draft = UserDraft::from(payload.into_inner());
    let user = state
        .users
        .update(id, &draft)
        .await
        .map_err(map_persistence_error)?
        .ok_or_else(|| Error::not_found(USER_NOT_FOUND))?;
    debug!(user_id = %id, "user updated");
    Ok(web::Json(UserResponse::from(user)))
}

/// Delete a user and return its last state.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Deleted user", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 422, description = "Id failed validation", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
) -> ApiResult<web::Json<UserResponse>> {
    let id = UserId::new(id.into_inner());
    let user = state
        .users
        .delete(id)
        .await
        .map_err(map_persistence_error)?
        .ok_or_else(|| Error::not_found(USER_NOT_FOUND))?;
    debug!(user_id = %id, "user deleted");
    Ok(web::Json(UserResponse::from(user)))
}
