use zonecheck_domain::{CliOverrides, Config};

pub fn load_config(cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(cli_overrides)?;
    config.validate()?;
    Ok(config)
}
