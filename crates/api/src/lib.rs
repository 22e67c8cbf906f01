pub mod dto;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::{create_api_routes, create_app};
pub use state::AppState;
