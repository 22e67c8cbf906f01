//! Ferrous Console Domain Layer
pub mod config;
pub mod dns_lookup;
pub mod errors;
pub mod rcon;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_lookup::{DnsLookupRequest, DnsLookupResult, A_RECORD_TYPE};
pub use errors::DomainError;
pub use rcon::{PortInput, RconCommand, RconCommandResult, RconPassword, RconTarget};
