use ferrous_console_domain::{DnsLookupRequest, DnsLookupResult, DomainError};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::ports::DnsResolver;

pub struct LookupDomainUseCase {
    resolver: Arc<dyn DnsResolver>,
    timeout: Option<Duration>,
}

impl LookupDomainUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self {
            resolver,
            timeout: None,
        }
    }

    /// Bounds the whole lookup. Without it only the resolver's own
    /// per-query timeouts apply.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[instrument(skip(self, request), fields(domain = %request.domain))]
    pub async fn execute(&self, request: &DnsLookupRequest) -> Result<DnsLookupResult, DomainError> {
        let lookup = self.resolver.resolve_ipv4(request);

        let records = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, lookup)
                .await
                .map_err(|_| DomainError::QueryTimeout)??,
            None => lookup.await?,
        };

        debug!(count = records.len(), "A records resolved");

        Ok(DnsLookupResult::new(Arc::clone(&request.domain), records))
    }
}
