use ferrous_console_api::AppState;
use ferrous_console_application::use_cases::{ExecuteRconCommandUseCase, LookupDomainUseCase};
use ferrous_console_domain::Config;
use ferrous_console_infrastructure::{dns::HickoryDnsResolver, rcon::TcpRconConnector};
use std::sync::Arc;
use tracing::info;

/// Network adapters behind the application ports.
pub struct Adapters {
    pub dns_resolver: Arc<HickoryDnsResolver>,
    pub rcon_connector: Arc<TcpRconConnector>,
}

impl Adapters {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let dns_resolver = Arc::new(HickoryDnsResolver::from_config(&config.dns)?);
        let rcon_connector =
            Arc::new(TcpRconConnector::new().with_minecraft_quirks(config.rcon.minecraft_quirks));

        info!(
            rcon_timeout_ms = config.rcon.timeout_ms,
            minecraft_quirks = config.rcon.minecraft_quirks,
            "Network adapters ready"
        );

        Ok(Self {
            dns_resolver,
            rcon_connector,
        })
    }
}

pub struct UseCases {
    pub lookup_domain: Arc<LookupDomainUseCase>,
    pub execute_rcon: Arc<ExecuteRconCommandUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, adapters: &Adapters) -> Self {
        Self {
            lookup_domain: Arc::new(
                LookupDomainUseCase::new(adapters.dns_resolver.clone())
                    .with_timeout(config.dns.lookup_timeout()),
            ),
            execute_rcon: Arc::new(
                ExecuteRconCommandUseCase::new(adapters.rcon_connector.clone())
                    .with_timeout(config.rcon.timeout()),
            ),
        }
    }

    pub fn into_state(self) -> AppState {
        AppState {
            lookup_domain: self.lookup_domain,
            execute_rcon: self.execute_rcon,
        }
    }
}
