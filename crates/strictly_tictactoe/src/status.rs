//! Game status derived from a board snapshot.

use crate::rules::{WinningLine, is_full, winning_line};
use crate::{Board, Player};
use derive_more::Display;
use tracing::instrument;

/// Current status of the displayed board.
///
/// `Display` renders the status line shown above the board.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing; `next` places the next mark.
    #[display("Next Player: {next}")]
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// A line has been completed.
    #[display("Winner: {}", _0.player())]
    Won(WinningLine),
    /// Every square is filled and no line was completed.
    #[display("Game is Draw!")]
    Draw,
}

impl GameStatus {
    /// Evaluates `board` with `next` to move.
    #[instrument]
    pub fn evaluate(board: &Board, next: Player) -> Self {
        if let Some(line) = winning_line(board) {
            GameStatus::Won(line)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress { next }
        }
    }

    /// Whether the board accepts no further moves.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// The completed line, if the game was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::Won(line) => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_in_progress_text() {
        let status = GameStatus::evaluate(&Board::new(), Player::O);
        assert_eq!(status.to_string(), "Next Player: O");
        assert!(!status.is_terminal());
    }

    #[test]
    fn test_winner_text() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::O)
            .with_mark(Position::Center, Player::O)
            .with_mark(Position::BottomRight, Player::O);
        let status = GameStatus::evaluate(&board, Player::X);
        assert_eq!(status.to_string(), "Winner: O");
        assert!(status.is_terminal());
        assert!(status.winning_line().is_some());
    }

    #[test]
    fn test_draw_text() {
        let moves = [
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
            (Position::Center, Player::O),
            (Position::MiddleLeft, Player::X),
            (Position::MiddleRight, Player::O),
            (Position::BottomCenter, Player::X),
            (Position::BottomLeft, Player::O),
            (Position::BottomRight, Player::X),
        ];
        let board = moves
            .iter()
            .fold(Board::new(), |board, (pos, player)| board.with_mark(*pos, *player));
        let status = GameStatus::evaluate(&board, Player::O);
        assert_eq!(status, GameStatus::Draw);
        assert_eq!(status.to_string(), "Game is Draw!");
    }
}
