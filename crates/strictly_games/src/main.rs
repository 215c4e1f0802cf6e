//! Strictly Games - terminal tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use strictly_games::{Cli, Settings, init_tracing, tui};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)?.with_cli_overrides(&cli);

    init_tracing(&settings)?;
    tui::run_tui(&settings)
}
