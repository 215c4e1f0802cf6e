//! Pure tic-tac-toe logic with a time-travel move history.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`] snapshots and [`Position`]
//! - **Rules**: win and draw detection over a snapshot ([`rules`])
//! - **History**: [`History`] of [`MoveRecord`]s with branch truncation
//! - **Views**: [`CellView`] and [`BoardView`], built fresh for each render
//! - **Controller**: [`GameController`] owns the history, the current move
//!   pointer and the move-list [`SortOrder`]
//!
//! Front-ends (browser or terminal) only map these onto widgets.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameController, Position};
//!
//! let mut game = GameController::new();
//! game.click(Position::Center);
//! assert_eq!(game.status().to_string(), "Next Player: O");
//!
//! game.jump_to(0);
//! assert_eq!(game.move_list()[1].description(), "Go to move (1, 1)");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod history;
mod position;
pub mod rules;
mod status;
mod types;
pub mod view;

pub use controller::{GameController, MoveEntry, SortOrder};
pub use history::{History, MoveRecord};
pub use position::Position;
pub use rules::{WinningLine, check_winner, winning_line};
pub use status::GameStatus;
pub use types::{Board, Player, Square};
pub use view::{BoardView, CellView};
