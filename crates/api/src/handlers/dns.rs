use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use ferrous_console_domain::DnsLookupRequest;
use tracing::{error, instrument};

use crate::{
    dto::{ApiError, DomainField, ErrorResponse, LookupRequest, LookupResponse},
    state::AppState,
};

const NOT_FOUND_MESSAGE: &str = "Domain not found or DNS error";
const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

#[instrument(skip_all, name = "api_dns_lookup")]
pub async fn lookup_domain(
    State(state): State<AppState>,
    payload: Result<Json<LookupRequest>, JsonRejection>,
) -> Result<Json<LookupResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        error!(error = %rejection, "DNS lookup failed");
        internal_error()
    })?;

    let domain = match req.domain_field() {
        DomainField::Missing => None,
        DomainField::Name(name) => Some(name),
        DomainField::Unsupported => {
            error!(domain = ?req.domain, "DNS lookup failed: domain is not a string");
            return Err(internal_error());
        }
    };

    let request = DnsLookupRequest::new(domain)
        .map_err(|e| ErrorResponse::with_status(StatusCode::BAD_REQUEST, e.to_string()))?;

    match state.lookup_domain.execute(&request).await {
        Ok(result) => Ok(Json(LookupResponse::from(result))),
        Err(e) if e.is_dns_not_found() => {
            error!(domain = %request.domain, error = %e, "DNS lookup failed");
            Err(ErrorResponse::with_status(
                StatusCode::NOT_FOUND,
                NOT_FOUND_MESSAGE,
            ))
        }
        Err(e) => {
            error!(domain = %request.domain, error = %e, "DNS lookup failed");
            Err(internal_error())
        }
    }
}

fn internal_error() -> ApiError {
    ErrorResponse::with_status(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
}
