//! Crewdeck CLI
//!
//! Command-line operator console for submitting crew jobs and following them
//! through the backend's update feed.

mod commands;
mod config;
mod operator;
mod types;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use crewdeck_tracker::TrackerConfig;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "crewdeck")]
#[command(about = "Submit crew jobs and follow their progress", long_about = None)]
struct Cli {
    /// Backend URL
    #[arg(
        long,
        global = true,
        env = "CREWDECK_BACKEND_URL",
        default_value = "http://localhost:8000"
    )]
    backend_url: String,

    /// Seconds between the end of one feed fetch and the start of the next
    #[arg(long, global = true, env = "CREWDECK_POLL_INTERVAL", default_value_t = 5)]
    poll_interval_secs: u64,

    /// Timeout in seconds for a single backend request
    #[arg(long, global = true, env = "CREWDECK_REQUEST_TIMEOUT", default_value_t = 30)]
    request_timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout is reserved for operator output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "crewdeck=info,crewdeck_tracker=info,crewdeck_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let request_timeout = Duration::from_secs(cli.request_timeout_secs);
    let config = Config {
        backend_url: cli.backend_url,
        tracker: TrackerConfig::from_env()
            .with_poll_interval(Duration::from_secs(cli.poll_interval_secs)),
        request_timeout,
    };
    config.validate()?;

    handle_command(cli.command, &config).await
}
