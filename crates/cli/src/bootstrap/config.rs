use std::path::PathBuf;
use wsrelay_domain::config::station::{ENV_STATION_ID, ENV_STATION_PASSWORD, ENV_STATION_SOFTWARE};
use wsrelay_domain::{CliOverrides, Config};

/// Loads `.env` into the process environment unless the relay credentials
/// are already set. Returns the file used, if any.
pub fn load_env_file() -> Option<PathBuf> {
    let credentials_set = [ENV_STATION_ID, ENV_STATION_PASSWORD, ENV_STATION_SOFTWARE]
        .iter()
        .all(|name| std::env::var(name).is_ok_and(|value| !value.is_empty()));

    if credentials_set {
        return None;
    }

    dotenvy::dotenv().ok()
}

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
