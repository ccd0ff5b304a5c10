//! Command-line interface for strictly_gomoku.

use clap::{Parser, Subcommand};

/// Strictly Gomoku - five in a row on a 30x30 board
#[derive(Parser, Debug)]
#[command(name = "strictly_gomoku")]
#[command(about = "Five-in-a-row with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Tui {
        /// Path to the TOML config file (defaults are used if missing)
        #[arg(short, long, default_value = "strictly_gomoku.toml")]
        config: std::path::PathBuf,
    },

    /// Play a list of cell indices and print the resulting board
    Replay {
        /// Cell indices (row * 30 + col), played alternately by Black and Red
        #[arg(value_delimiter = ',')]
        moves: Vec<usize>,

        /// Jump to this history snapshot after playing
        #[arg(long)]
        jump: Option<usize>,

        /// Print the view as JSON instead of a text board
        #[arg(long)]
        json: bool,
    },
}
