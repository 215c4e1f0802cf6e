//! The rendered 3x3 board: cells, status line and click validation.

use super::CellView;
use crate::{Board, GameStatus, Player, Position};
use tracing::{debug, instrument};

/// A board snapshot prepared for rendering.
///
/// The board is in progress until a line is completed or every square is
/// filled; after that it is terminal and ignores every click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    board: Board,
    next: Player,
    status: GameStatus,
}

impl BoardView {
    /// Builds the view for `board` with `next` to move.
    pub fn new(board: Board, next: Player) -> Self {
        let status = GameStatus::evaluate(&board, next);
        Self {
            board,
            next,
            status,
        }
    }

    /// The snapshot being rendered.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose mark the next accepted click places.
    pub fn next_player(&self) -> Player {
        self.next
    }

    /// Status of the board; its `Display` is the status line.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether clicks are ignored.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Validates a click on `position`.
    ///
    /// Returns the position to play, or `None` when the cell is occupied or
    /// the board is terminal.
    #[instrument(skip(self))]
    pub fn handle_click(&self, position: Position) -> Option<Position> {
        if !self.board.is_empty(position) || self.status.winning_line().is_some() {
            debug!(status = %self.status, "Ignoring click");
            return None;
        }
        Some(position)
    }

    /// All 9 cells in index order.
    pub fn cells(&self) -> [CellView; 9] {
        let line = self.status.winning_line();
        Position::ALL.map(|pos| {
            CellView::new(
                pos,
                self.board.get(pos),
                line.is_some_and(|line| line.contains(pos)),
            )
        })
    }

    /// The cells grouped as three rows of three.
    pub fn rows(&self) -> [[CellView; 3]; 3] {
        let cells = self.cells();
        [0, 1, 2].map(|row| [cells[row * 3], cells[row * 3 + 1], cells[row * 3 + 2]])
    }
}
