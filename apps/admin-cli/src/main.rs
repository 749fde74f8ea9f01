//! # Quill Admin CLI
//!
//! Staff-facing command line for the Quill CMS backend: session management
//! and post/category/tag editing over the REST API.

use clap::Parser;

mod commands;
mod config;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;

#[derive(Debug, Parser)]
#[command(name = "quill-admin", version, about = "Administer a Quill CMS backend")]
struct Cli {
    #[command(subcommand)]
    command: commands::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init(&telemetry::TelemetryConfig::from_env());

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    tracing::debug!(api_url = %config.api_url, "configuration loaded");

    let state = AppState::new(&config).await?;

    commands::run(cli.command, &state).await
}
