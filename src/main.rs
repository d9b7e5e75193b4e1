use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};
use viva_backend::{config, server};

/// Installs the JSON subscriber. `RUST_LOG` wins over `server.logs.level`.
fn init_logging(configured_level: &str) -> Result<String> {
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| configured_level.to_string());

    level.parse::<LevelFilter>().map_err(|_| {
        anyhow::anyhow!(
            "Invalid log level '{}', expected one of: error, warn, info, debug, trace",
            level
        )
    })?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));
    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    Ok(level)
}

async fn start() -> Result<()> {
    let config = config::load()
        .await
        .context("Failed to load configuration")?;
    let level = init_logging(&config.server.logs.level)?;

    info!("viva backend starting, log level {}", level);
    server::run(config).await?;

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = start().await {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
