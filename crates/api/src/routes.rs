use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/dns", post(handlers::lookup_domain))
        .route("/rcon", post(handlers::execute_rcon_command))
        .with_state(state)
}

/// API routes mounted under `/api`
pub fn create_app(state: AppState) -> Router {
    Router::new().nest("/api", create_api_routes(state))
}
