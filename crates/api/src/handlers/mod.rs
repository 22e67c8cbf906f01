pub mod dns;
pub mod health;
pub mod rcon;

pub use dns::lookup_domain;
pub use health::health_check;
pub use rcon::execute_rcon_command;

use crate::dto::{ApiError, ErrorResponse};
use axum::{extract::rejection::JsonRejection, http::StatusCode};
use tracing::debug;

/// Bodies that are not valid JSON for the endpoint are client errors.
pub(crate) fn malformed_body(rejection: JsonRejection) -> ApiError {
    debug!(error = %rejection, "Rejected request body");
    ErrorResponse::with_status(StatusCode::BAD_REQUEST, rejection.body_text())
}
