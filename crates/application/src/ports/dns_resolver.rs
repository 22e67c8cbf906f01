use async_trait::async_trait;
use ferrous_console_domain::{DnsLookupRequest, DomainError};
use std::net::Ipv4Addr;

/// Forward IPv4 resolution.
///
/// Implementations must distinguish a missing name
/// (`DomainError::DomainNotFound`) and an authoritative server failure
/// (`DomainError::DnsServerFailure`) from every other failure. A name that
/// exists but has no A records resolves to an empty list.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve_ipv4(&self, request: &DnsLookupRequest) -> Result<Vec<Ipv4Addr>, DomainError>;
}
