mod dns_resolver;
mod rcon_client;

pub use dns_resolver::DnsResolver;
pub use rcon_client::{RconConnector, RconSession};
