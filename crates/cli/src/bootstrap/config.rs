use ferrous_console_domain::{CliOverrides, Config};

/// Loads and validates configuration. Runs before logging is initialised,
/// so the summary is logged by the caller.
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
