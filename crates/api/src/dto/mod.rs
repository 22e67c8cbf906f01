pub mod dns;
pub mod error;
pub mod rcon;

pub use dns::{DomainField, LookupRequest, LookupResponse};
pub use error::{ApiError, ErrorResponse};
pub use rcon::{RconRequest, RconResponse};
