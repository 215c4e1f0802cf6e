//! Strictly Games - terminal tic-tac-toe with a time-travel move list.
//!
//! # Architecture
//!
//! - **Game logic**: [`strictly_tictactoe`] (rules, history, controller)
//! - **Settings**: TOML file plus command-line overrides ([`Settings`], [`Cli`])
//! - **TUI**: ratatui front-end mapping the game views onto widgets ([`tui`])

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod settings;
pub mod tui;

pub use cli::Cli;
pub use settings::{ConfigError, Settings};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Sends log output to the configured file so it never draws over the UI.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(log_file = %settings.log_file().display(), "Tracing initialized");
    Ok(())
}
