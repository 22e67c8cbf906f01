use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use ferrous_console_domain::{DomainError, RconCommand};
use tracing::{error, instrument};

use super::malformed_body;
use crate::{
    dto::{ApiError, ErrorResponse, RconRequest, RconResponse},
    state::AppState,
};

const FALLBACK_MESSAGE: &str = "Failed to execute command";

#[instrument(skip_all, name = "api_rcon_command")]
pub async fn execute_rcon_command(
    State(state): State<AppState>,
    payload: Result<Json<RconRequest>, JsonRejection>,
) -> Result<Json<RconResponse>, ApiError> {
    let Json(req) = payload.map_err(malformed_body)?;

    let request = RconCommand::new(
        req.host.as_deref(),
        req.port.as_ref(),
        req.password.as_deref(),
        req.command.as_deref(),
    )
    .map_err(|e| {
        if e.is_validation() {
            ErrorResponse::with_status(StatusCode::BAD_REQUEST, e.to_string())
        } else {
            error!(error = %e, "RCON error");
            command_failed(&e)
        }
    })?;

    match state.execute_rcon.execute(&request).await {
        Ok(result) => Ok(Json(RconResponse {
            output: result.output,
        })),
        Err(e) => {
            error!(server = %request.target, error = %e, "RCON error");
            Err(command_failed(&e))
        }
    }
}

fn command_failed(err: &DomainError) -> ApiError {
    let message = err.to_string();
    let message = if message.is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        message
    };
    ErrorResponse::with_status(StatusCode::INTERNAL_SERVER_ERROR, message)
}
