use dnspect_domain::{CliOverrides, Config};

pub fn load_config(cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    Config::load(cli_overrides).map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}
