//! Meetline - meeting document insight pipeline
//!
//! Main entry point for the `meetline` command line tool.

use clap::Parser;
use meetline_app::utils::logging::init_tracing;
use meetline_app::Cli;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging FIRST so we can see .env loading
    init_tracing(cli.log_json);

    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(err) => debug!(error = %err, "No .env file loaded"),
    }

    meetline_app::run(cli).await
}
