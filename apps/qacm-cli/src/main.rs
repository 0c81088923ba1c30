//! # QACM
//!
//! Command-line client for the blog backend: list, show, create, update and
//! delete posts and comments. Runs against in-memory demo data when no
//! backend is configured.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod state;
mod telemetry;

use cli::Cli;
use config::AppConfig;
use state::AppState;
use telemetry::{TelemetryConfig, init_telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env()?.with_overrides(cli.api_url.clone(), cli.page_size);
    tracing::debug!(
        backend = config.api_url.as_deref().unwrap_or("in-memory"),
        page_size = config.page_size,
        "Configuration loaded"
    );

    let state = AppState::new(&config)?;
    commands::run(cli.command, &state, config.page_size).await
}
