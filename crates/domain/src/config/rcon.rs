use serde::{Deserialize, Serialize};
use std::time::Duration;

/// RCON client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RconConfig {
    /// Bound on connect+authenticate, and separately on the command round trip
    #[serde(default = "default_rcon_timeout")]
    pub timeout_ms: u64,

    /// Minecraft servers need the client's quirk mode for command framing
    #[serde(default)]
    pub minecraft_quirks: bool,
}

impl Default for RconConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_rcon_timeout(),
            minecraft_quirks: false,
        }
    }
}

impl RconConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_rcon_timeout() -> u64 {
    5000
}
