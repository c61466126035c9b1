//! Extractor configuration turning rejected requests into domain errors.
//!
//! Any request whose shape is wrong fails validation (422): bodies that are
//! not JSON, that are empty or truncated, or that miss a field, and path or
//! query parameters of the wrong type. Only transport-level body failures,
//! such as an oversized or interrupted payload, are malformed requests (400).

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use serde_json::error::Category;
use tracing::debug;

use crate::domain::Error;

/// JSON extractor configuration used by every handler taking a body.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_backend::inbound::http::validation::json_config;
///
/// let _app = App::new().app_data(json_config());
/// ```
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        debug!(error = %err, "rejected request body");
        classify_json_error(&err).into()
    })
}

/// Query-string extractor configuration.
#[must_use]
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        debug!(error = %err, "rejected query string");
        query_error(&err).into()
    })
}

/// Path-parameter extractor configuration.
#[must_use]
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req: &HttpRequest| {
        debug!(error = %err, "rejected path parameter");
        path_error(&err).into()
    })
}

pub(crate) fn classify_json_error(err: &JsonPayloadError) -> Error {
    match err {
        JsonPayloadError::Deserialize(inner) => match inner.classify() {
            Category::Eof => Error::validation_failed(format!("incomplete JSON body: {inner}")),
            Category::Syntax => Error::validation_failed(format!("invalid JSON body: {inner}")),
            Category::Data | Category::Io => Error::validation_failed(inner.to_string()),
        },
        JsonPayloadError::ContentType => {
            Error::validation_failed("request body must be JSON (Content-Type: application/json)")
        }
        other => Error::invalid_request(other.to_string()),
    }
}

fn query_error(err: &QueryPayloadError) -> Error {
    Error::validation_failed(format!("invalid query string: {err}"))
}

fn path_error(err: &PathError) -> Error {
    Error::validation_failed(format!("invalid path parameter: {err}"))
}
