use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// DNS lookup configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Read nameservers from the host (`/etc/resolv.conf`) when possible
    #[serde(default = "default_true")]
    pub use_system_config: bool,

    /// Explicit nameservers ("ip:port"), used when the system config is
    /// disabled or unreadable. Empty means the resolver's built-in defaults.
    #[serde(default)]
    pub nameservers: Vec<String>,

    /// Per-query timeout inside the resolver
    #[serde(default = "default_resolver_timeout")]
    pub resolver_timeout_ms: u64,

    #[serde(default = "default_resolver_attempts")]
    pub resolver_attempts: usize,

    /// Optional bound on the whole lookup, enforced by the use case
    #[serde(default)]
    pub lookup_timeout_ms: Option<u64>,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            use_system_config: true,
            nameservers: Vec::new(),
            resolver_timeout_ms: default_resolver_timeout(),
            resolver_attempts: default_resolver_attempts(),
            lookup_timeout_ms: None,
        }
    }
}

impl DnsConfig {
    pub fn resolver_timeout(&self) -> Duration {
        Duration::from_millis(self.resolver_timeout_ms)
    }

    pub fn lookup_timeout(&self) -> Option<Duration> {
        self.lookup_timeout_ms.map(Duration::from_millis)
    }

    /// Parses `nameservers`, reporting the first entry that is not `ip:port`.
    pub fn nameserver_addrs(&self) -> Result<Vec<SocketAddr>, String> {
        self.nameservers
            .iter()
            .map(|s| {
                s.parse::<SocketAddr>()
                    .map_err(|_| format!("Invalid nameserver address: {s}"))
            })
            .collect()
    }
}

fn default_true() -> bool {
    true
}

fn default_resolver_timeout() -> u64 {
    5000
}

fn default_resolver_attempts() -> usize {
    2
}
