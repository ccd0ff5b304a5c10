//! Strictly Gomoku - Unified CLI
//!
//! Interactive terminal play or a one-shot replay of a move list.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_gomoku::{GomokuConfig, render_text, replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui { config } => run_interactive(&config),
        Command::Replay { moves, jump, json } => run_replay(&moves, jump, json),
    }
}

/// Run the terminal UI, logging to a file so output stays off the screen.
fn run_interactive(config_path: &Path) -> Result<()> {
    let config = GomokuConfig::load_or_default(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(config = %config_path.display(), "Configuration ready");
    run_tui(config)
}

/// Play the listed moves and print the resulting view.
fn run_replay(moves: &[usize], jump: Option<usize>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let history = replay(moves, jump)?;
    let view = history.current_view();

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", render_text(&view));
    }
    Ok(())
}
