//! # Ferrous Console
//!
//! Web gateway for DNS A-record lookups and one-shot RCON commands

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use ferrous_console_domain::CliOverrides;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "ferrous-console")]
#[command(version)]
#[command(about = "🦀 DNS lookup and RCON command gateway")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            web_port: self.web_port,
            bind_address: self.bind.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);

    info!("🦀 Ferrous Console Starting...");
    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        "Configuration loaded"
    );

    let adapters = di::Adapters::new(&config)?;
    let state = di::UseCases::new(&config, &adapters).into_state();

    let shutdown = CancellationToken::new();
    bootstrap::spawn_signal_listener(shutdown.clone());

    server::start_web_server(&config.server, state, shutdown).await
}
