//! Command-line interface for strictly_games.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Games - tic-tac-toe with time-travel move history
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Terminal tic-tac-toe with a time-travel move list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (optional; defaults apply when missing)
    #[arg(short, long, default_value = "strictly_games.toml")]
    pub config: PathBuf,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Start with the move list in descending order
    #[arg(long)]
    pub descending: bool,

    /// Hide cell numbers on empty squares
    #[arg(long)]
    pub no_hints: bool,
}
