//! Browser front-end for Strictly Games tic-tac-toe.
//!
//! Built with Yew and served with `trunk serve` from this crate's
//! directory. All rules and labels come from [`strictly_tictactoe`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod components;

pub use components::Game;

use tracing_subscriber::{filter::LevelFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Routes panics and `tracing` output to the browser console.
pub fn init_tracing() {
    console_error_panic_hook::set_once();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(LevelFilter::INFO);
    let _ = tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init(); // Don't panic if already initialized
}
