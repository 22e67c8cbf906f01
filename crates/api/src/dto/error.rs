use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// Body of every non-2xx response: `{"error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

impl ErrorResponse {
    pub fn with_status(status: StatusCode, message: impl Into<String>) -> ApiError {
        (
            status,
            Json(Self {
                error: message.into(),
            }),
        )
    }
}
