use async_trait::async_trait;
use ferrous_console_application::ports::{DnsResolver, RconConnector, RconSession};
use ferrous_console_domain::{DnsLookupRequest, DomainError, RconPassword, RconTarget};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Answers every domain with the same records, sleeping first for the
/// domains given a delay.
pub struct DelayedDnsResolver {
    records: Vec<Ipv4Addr>,
    delays: HashMap<String, Duration>,
    calls: AtomicUsize,
}

impl DelayedDnsResolver {
    pub fn new(records: &[Ipv4Addr]) -> Self {
        Self {
            records: records.to_vec(),
            delays: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, domain: &str, delay: Duration) -> Self {
        self.delays.insert(domain.to_string(), delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsResolver for DelayedDnsResolver {
    async fn resolve_ipv4(&self, request: &DnsLookupRequest) -> Result<Vec<Ipv4Addr>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(request.domain.as_ref()) {
            tokio::time::sleep(*delay).await;
        }
        if request.domain.ends_with(".invalid") {
            return Err(DomainError::DomainNotFound(request.domain.to_string()));
        }
        Ok(self.records.clone())
    }
}

/// Every session answers with the same output.
pub struct StaticRconConnector {
    output: String,
    ends: Arc<AtomicUsize>,
}

impl StaticRconConnector {
    pub fn new(output: &str) -> Self {
        Self {
            output: output.to_string(),
            ends: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn ends(&self) -> usize {
        self.ends.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RconConnector for StaticRconConnector {
    async fn connect(
        &self,
        _target: &RconTarget,
        _password: &RconPassword,
        _timeout: Duration,
    ) -> Result<Box<dyn RconSession>, DomainError> {
        Ok(Box::new(StaticSession {
            output: self.output.clone(),
            ends: Arc::clone(&self.ends),
        }))
    }
}

struct StaticSession {
    output: String,
    ends: Arc<AtomicUsize>,
}

#[async_trait]
impl RconSession for StaticSession {
    async fn send(&mut self, _command: &str) -> Result<String, DomainError> {
        Ok(self.output.clone())
    }

    async fn end(self: Box<Self>) -> Result<(), DomainError> {
        self.ends.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
