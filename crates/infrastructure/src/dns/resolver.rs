use async_trait::async_trait;
use ferrous_console_application::ports::DnsResolver;
use ferrous_console_domain::config::DnsConfig;
use ferrous_console_domain::{DnsLookupRequest, DomainError};
use hickory_resolver::config::{NameServerConfig, Protocol, ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::TokioAsyncResolver;
use std::net::{Ipv4Addr, SocketAddr};
use tracing::{debug, info, warn};

/// A-record resolver backed by hickory.
///
/// A fresh resolver with caching disabled is built for every lookup, so
/// neither connections nor answers outlive a request.
pub struct HickoryDnsResolver {
    config: ResolverConfig,
    opts: ResolverOpts,
}

impl HickoryDnsResolver {
    pub fn new(config: ResolverConfig, mut opts: ResolverOpts) -> Self {
        opts.cache_size = 0;
        opts.use_hosts_file = false;
        Self { config, opts }
    }

    /// Picks nameservers from the host when allowed and readable, then from
    /// the configured list, then falls back to hickory's defaults.
    pub fn from_config(cfg: &DnsConfig) -> Result<Self, DomainError> {
        let nameservers = cfg
            .nameserver_addrs()
            .map_err(DomainError::DnsLookupFailed)?;

        let (config, mut opts) = match Self::system_config(cfg.use_system_config) {
            Some(system) => {
                info!("DNS resolver using system configuration");
                system
            }
            None if !nameservers.is_empty() => {
                info!(nameservers = ?nameservers, "DNS resolver using configured nameservers");
                (Self::explicit_config(&nameservers), ResolverOpts::default())
            }
            None => {
                info!("DNS resolver using default public nameservers");
                (ResolverConfig::default(), ResolverOpts::default())
            }
        };

        opts.timeout = cfg.resolver_timeout();
        opts.attempts = cfg.resolver_attempts;

        Ok(Self::new(config, opts))
    }

    fn system_config(enabled: bool) -> Option<(ResolverConfig, ResolverOpts)> {
        if !enabled {
            return None;
        }
        match hickory_resolver::system_conf::read_system_conf() {
            Ok(system) => Some(system),
            Err(e) => {
                warn!(error = %e, "Failed to read system DNS configuration");
                None
            }
        }
    }

    fn explicit_config(nameservers: &[SocketAddr]) -> ResolverConfig {
        let mut config = ResolverConfig::new();
        for addr in nameservers {
            config.add_name_server(NameServerConfig::new(*addr, Protocol::Udp));
            config.add_name_server(NameServerConfig::new(*addr, Protocol::Tcp));
        }
        config
    }
}

#[async_trait]
impl DnsResolver for HickoryDnsResolver {
    async fn resolve_ipv4(&self, request: &DnsLookupRequest) -> Result<Vec<Ipv4Addr>, DomainError> {
        let resolver = TokioAsyncResolver::tokio(self.config.clone(), self.opts.clone());
        let fqdn = request.fqdn();

        match resolver.ipv4_lookup(fqdn.as_str()).await {
            Ok(lookup) => {
                let records: Vec<Ipv4Addr> = lookup.iter().map(|a| a.0).collect();
                debug!(domain = %request.domain, count = records.len(), "A lookup answered");
                Ok(records)
            }
            Err(e) => classify_error(&request.domain, &e),
        }
    }
}

fn classify_error(domain: &str, err: &ResolveError) -> Result<Vec<Ipv4Addr>, DomainError> {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            classify_response_code(domain, *response_code)
        }
        ResolveErrorKind::Timeout => Err(DomainError::QueryTimeout),
        _ => Err(DomainError::DnsLookupFailed(format!("{domain}: {err}"))),
    }
}

/// NOERROR without answers is an empty result rather than a failure.
fn classify_response_code(
    domain: &str,
    code: ResponseCode,
) -> Result<Vec<Ipv4Addr>, DomainError> {
    match code {
        ResponseCode::NoError => Ok(Vec::new()),
        ResponseCode::NXDomain => Err(DomainError::DomainNotFound(domain.to_string())),
        ResponseCode::ServFail => Err(DomainError::DnsServerFailure(domain.to_string())),
        other => Err(DomainError::DnsLookupFailed(format!(
            "{domain}: server answered {other:?}"
        ))),
    }
}
