use ferrous_console_domain::rcon::PortInput;
use serde::{Deserialize, Serialize};

/// Request DTO for `POST /api/rcon`. Fields stay optional so that absence
/// is reported as "Missing required fields" rather than a parse error.
#[derive(Clone, Deserialize)]
pub struct RconRequest {
    pub host: Option<String>,
    pub port: Option<PortInput>,
    pub password: Option<String>,
    pub command: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RconResponse {
    pub output: String,
}
