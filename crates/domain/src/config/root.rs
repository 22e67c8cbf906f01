use super::{ConfigError, DnsConfig, LoggingConfig, RconConfig, ServerConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "ferrous-console.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub rcon: RconConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line win over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads configuration from `path`, or from [`DEFAULT_CONFIG_FILE`] when it
    /// exists, or falls back to defaults. CLI overrides are applied last.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(path, &content)
    }

    pub fn from_toml(origin: &str, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation(
                "server.web_port cannot be 0".to_string(),
            ));
        }
        if self.server.bind_address.trim().is_empty() {
            return Err(ConfigError::Validation(
                "server.bind_address cannot be empty".to_string(),
            ));
        }
        if self.dns.resolver_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "dns.resolver_timeout_ms must be greater than 0".to_string(),
            ));
        }
        if self.dns.resolver_attempts == 0 {
            return Err(ConfigError::Validation(
                "dns.resolver_attempts must be greater than 0".to_string(),
            ));
        }
        if self.dns.lookup_timeout_ms == Some(0) {
            return Err(ConfigError::Validation(
                "dns.lookup_timeout_ms must be greater than 0".to_string(),
            ));
        }
        self.dns
            .nameserver_addrs()
            .map_err(ConfigError::Validation)?;
        if self.rcon.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "rcon.timeout_ms must be greater than 0".to_string(),
            ));
        }
        if !LoggingConfig::is_valid_level(&self.logging.level) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level: {}",
                self.logging.level
            )));
        }
        Ok(())
    }
}
