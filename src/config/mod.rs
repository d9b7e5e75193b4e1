mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::path::Path;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `CONFIG_PATH` (or `config.yaml`), then applies
/// `INFERENCE_BASE_URL` and `INFERENCE_MODEL` overrides.
pub async fn load() -> Result<Config> {
    let mut config = match env::var("CONFIG_PATH") {
        Ok(path) => load_from(&path).await?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_from(DEFAULT_CONFIG_PATH).await?
        }
        Err(_) => {
            debug!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
            Config::default()
        }
    };

    if let Ok(base_url) = env::var("INFERENCE_BASE_URL") {
        config.inference.base_url = base_url;
    }
    if let Ok(model) = env::var("INFERENCE_MODEL") {
        config.inference.model = model;
    }

    validate(&config)?;
    Ok(config)
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.inference.base_url.trim().is_empty() {
        return Err(Error::config("inference.base_url must not be empty"));
    }
    if config.inference.model.trim().is_empty() {
        return Err(Error::config("inference.model must not be empty"));
    }
    if config.inference.timeout_secs == 0 {
        return Err(Error::config("inference.timeout_secs must be greater than zero"));
    }
    Ok(())
}
