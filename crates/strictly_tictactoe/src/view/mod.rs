//! Framework-agnostic view models for the board and its cells.
//!
//! Front-ends build these on every render and map them onto their own
//! widgets. All click validation lives here, not in the widgets.

mod board;
mod cell;

pub use board::BoardView;
pub use cell::CellView;
