//! tictactoe_gate - unified CLI
//!
//! Runs the gated terminal UI, or evaluates and replays games from the
//! command line.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_gate::{AppConfig, DEFAULT_LOG_FILTER, evaluate, replay, run_tui};
use tracing::instrument;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => run_play(config).await,
        Command::Evaluate { board, json } => {
            initialize_stderr_tracing();
            println!("{}", evaluate(&board, json)?);
            Ok(())
        }
        Command::Replay { moves, json } => {
            initialize_stderr_tracing();
            println!("{}", replay(&moves, json)?);
            Ok(())
        }
    }
}

/// Run the terminal UI
async fn run_play(config_path: std::path::PathBuf) -> Result<()> {
    let config = AppConfig::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    run_tui(config).await
}

#[instrument]
fn initialize_stderr_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
