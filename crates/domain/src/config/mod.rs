//! Configuration module for Ferrous Console
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: Web server binding and CORS
//! - `dns`: Resolver settings for the lookup endpoint
//! - `rcon`: RCON client settings
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod dns;
pub mod errors;
pub mod logging;
pub mod rcon;
pub mod root;
pub mod server;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use rcon::RconConfig;
pub use root::{CliOverrides, Config, DEFAULT_CONFIG_FILE};
pub use server::ServerConfig;
