use crate::validators::is_present;
use crate::DomainError;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Record type tag reported with every lookup result.
pub const A_RECORD_TYPE: &str = "A";

/// Validated forward-lookup request. Construction fails on an absent or
/// empty domain, so holding one means the lookup may proceed.
#[derive(Debug, Clone)]
pub struct DnsLookupRequest {
    pub domain: Arc<str>,
}

impl DnsLookupRequest {
    pub fn new(domain: Option<&str>) -> Result<Self, DomainError> {
        match domain {
            Some(d) if is_present(d) => Ok(Self {
                domain: Arc::from(d),
            }),
            _ => Err(DomainError::DomainRequired),
        }
    }

    /// Fully-qualified form of the domain, so resolver search lists never apply.
    pub fn fqdn(&self) -> String {
        if self.domain.ends_with('.') {
            self.domain.to_string()
        } else {
            format!("{}.", self.domain)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsLookupResult {
    pub domain: Arc<str>,
    pub records: Vec<Ipv4Addr>,
}

impl DnsLookupResult {
    pub fn new(domain: Arc<str>, records: Vec<Ipv4Addr>) -> Self {
        Self { domain, records }
    }

    pub fn record_type(&self) -> &'static str {
        A_RECORD_TYPE
    }
}
