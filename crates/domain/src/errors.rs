use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Domain is required")]
    DomainRequired,

    #[error("Missing required fields")]
    MissingRconFields,

    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Domain not found: {0}")]
    DomainNotFound(String),

    #[error("DNS server failure for {0}")]
    DnsServerFailure(String),

    #[error("DNS lookup failed: {0}")]
    DnsLookupFailed(String),

    #[error("Query timeout")]
    QueryTimeout,

    /// Carries the underlying client message verbatim.
    #[error("{0}")]
    RconFailure(String),
}

impl DomainError {
    /// Missing-field errors are rejected before any network I/O.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::DomainRequired | Self::MissingRconFields)
    }

    /// NXDOMAIN and SERVFAIL are reported to clients as "not found".
    pub fn is_dns_not_found(&self) -> bool {
        matches!(self, Self::DomainNotFound(_) | Self::DnsServerFailure(_))
    }
}
