//! Strictly Timeline - unified CLI.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_timeline::{Cli, Command, ReplayPlan, TimelineConfig, run_replay, run_tui};
use tracing::{Subscriber, info};
use tracing_subscriber::{EnvFilter, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TimelineConfig::load_logged(cli.config.as_deref(), stderr_subscriber())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_file_logging(&config)?;
            run_tui(&config)
        }
        Command::Replay {
            moves,
            jump,
            then,
            json,
        } => {
            init_stderr_logging();
            info!(moves = moves.len(), ?jump, then = then.len(), "Replaying moves");
            run_replay(&config, &ReplayPlan { moves, jump, then }, json)
        }
    }
}

/// Logs to the configured file so output does not corrupt the terminal.
fn init_file_logging(config: &TimelineConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Stderr logging, `warn` unless `RUST_LOG` says otherwise.
fn stderr_subscriber() -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish()
}

fn init_stderr_logging() {
    stderr_subscriber().init();
}
