//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// The 8 winning triples: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line of three identical marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine {
    positions: [Position; 3],
    player: Player,
}

impl WinningLine {
    /// The three positions of the line, in enumeration order.
    pub fn positions(&self) -> [Position; 3] {
        self.positions
    }

    /// The player owning the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Whether `pos` is part of this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Returns the first completed line on the board, if any.
///
/// Lines are checked in [`LINES`] order. Under alternating play at most
/// one line can be complete, so the order is only observable on boards
/// built by hand.
#[instrument]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    LINES.into_iter().find_map(|positions| {
        let [a, b, c] = positions;
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some(WinningLine { positions, player })
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|line| line.player())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(board: Board, positions: &[Position], player: Player) -> Board {
        positions
            .iter()
            .fold(board, |board, pos| board.with_mark(*pos, player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_line(&Board::new()), None);
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = mark(
            Board::new(),
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
            Player::X,
        );
        let line = winning_line(&board).expect("top row is complete");
        assert_eq!(
            line.positions(),
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
        assert_eq!(line.player(), Player::X);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = mark(
            Board::new(),
            &[Position::TopRight, Position::Center, Position::BottomLeft],
            Player::O,
        );
        let line = winning_line(&board).expect("diagonal is complete");
        assert_eq!(
            line.positions(),
            [Position::TopRight, Position::Center, Position::BottomLeft]
        );
        assert!(line.contains(Position::Center));
        assert!(!line.contains(Position::TopLeft));
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_mixed_marks_do_not_win() {
        let board = mark(Board::new(), &[Position::TopLeft, Position::TopCenter], Player::X);
        let board = board.with_mark(Position::TopRight, Player::O);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins_on_hand_built_board() {
        // Top row and left column both complete; rows are checked first.
        let board = mark(
            Board::new(),
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
            Player::X,
        );
        let line = winning_line(&board).expect("two lines complete");
        assert_eq!(line.positions(), LINES[0]);
    }
}
