//! Yew components: the cell, the board grid and the game root.

mod board;
mod cell;
mod game;

pub use board::{BoardGrid, BoardGridProps};
pub use cell::{Cell, CellProps};
pub use game::{Game, GameAction, GameState, MoveItem, MoveItemProps};
