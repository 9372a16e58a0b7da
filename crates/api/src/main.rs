//! Titanic Survival Dashboard - Main Entry Point

use anyhow::Context;
use api::config::AppConfig;
use api::{init_logging, run_server};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load dashboard configuration")?;
    init_logging(&config.logging).context("failed to initialize logging")?;

    info!("=== Titanic Survival Dashboard v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Loading passenger data from {}", config.dataset.path.display());

    run_server(config).await.context("dashboard server failed")?;

    Ok(())
}
