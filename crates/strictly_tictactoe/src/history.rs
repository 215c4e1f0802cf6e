//! Linear move history with branch truncation.

use crate::{Board, Player, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A board snapshot paired with the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct MoveRecord {
    board: Board,
    position: Option<Position>,
}

impl MoveRecord {
    /// The record at the start of every game: empty board, no move.
    pub fn start() -> Self {
        Self::new(Board::new(), None)
    }

    /// Snapshot after this move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Position of the move, `None` for the starting record.
    pub fn position(&self) -> Option<Position> {
        self.position
    }
}

/// Ordered sequence of move records.
///
/// Index 0 is always the empty starting board and index `i` is the state
/// after move `i`, so the history is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    records: Vec<MoveRecord>,
}

impl History {
    /// Creates a history holding only the starting record.
    pub fn new() -> Self {
        Self {
            records: vec![MoveRecord::start()],
        }
    }

    /// Number of records, starting record included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the history has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`.
    pub fn get(&self, index: usize) -> Option<&MoveRecord> {
        self.records.get(index)
    }

    /// All records in move order.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Index of the last record.
    pub fn tail(&self) -> usize {
        self.records.len() - 1
    }

    /// Branches from `from`: drops every record after it, then appends the
    /// board with `player`'s mark at `pos`. Returns the new tail index.
    ///
    /// The caller guarantees `from` is a valid index and `pos` is empty on
    /// that record's board.
    #[instrument(skip(self), fields(len = self.records.len()))]
    pub fn branch(&mut self, from: usize, pos: Position, player: Player) -> usize {
        let discarded = self.records.len().saturating_sub(from + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future moves");
        }
        self.records.truncate(from + 1);
        let next = self.records[from].board().with_mark(pos, player);
        self.records.push(MoveRecord::new(next, Some(pos)));
        self.tail()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_has_start_record() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.tail(), 0);
        assert_eq!(history.get(0), Some(&MoveRecord::start()));
        assert_eq!(history.get(0).and_then(|r| r.position()), None);
    }

    #[test]
    fn test_branch_appends_at_tail() {
        let mut history = History::new();
        assert_eq!(history.branch(0, Position::Center, Player::X), 1);
        assert_eq!(history.branch(1, Position::TopLeft, Player::O), 2);

        let last = history.get(2).expect("record exists");
        assert_eq!(last.position(), Some(Position::TopLeft));
        assert_eq!(last.board().occupied_count(), 2);
    }

    #[test]
    fn test_branch_discards_future() {
        let mut history = History::new();
        history.branch(0, Position::Center, Player::X);
        history.branch(1, Position::TopLeft, Player::O);
        history.branch(2, Position::TopRight, Player::X);

        let tail = history.branch(1, Position::BottomRight, Player::O);

        assert_eq!(tail, 2);
        assert_eq!(history.len(), 3);
        let last = history.get(2).expect("record exists");
        assert_eq!(last.position(), Some(Position::BottomRight));
        assert!(last.board().is_empty(Position::TopLeft));
    }
}
