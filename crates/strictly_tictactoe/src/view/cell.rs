//! A single rendered board cell.

use crate::{Position, Square};
use derive_new::new;

/// One board position as rendered: its mark and whether it belongs to the
/// winning line.
///
/// A cell does no validation; clicks are forwarded as-is and the board
/// decides what to do with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct CellView {
    position: Position,
    square: Square,
    highlight: bool,
}

impl CellView {
    /// Position of this cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Square contents.
    pub fn square(&self) -> Square {
        self.square
    }

    /// Mark to display: `"X"`, `"O"` or empty.
    pub fn label(&self) -> &'static str {
        self.square.label()
    }

    /// Whether the cell is part of the winning line.
    pub fn highlight(&self) -> bool {
        self.highlight
    }

    /// Forwards a click on this cell to `on_click`.
    pub fn click<F: FnOnce(Position)>(&self, on_click: F) {
        on_click(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_click_forwards_position() {
        let cell = CellView::new(Position::BottomCenter, Square::Empty, false);
        let mut clicked = None;
        cell.click(|pos| clicked = Some(pos));
        assert_eq!(clicked, Some(Position::BottomCenter));
    }

    #[test]
    fn test_click_forwards_even_when_occupied() {
        let cell = CellView::new(Position::Center, Square::Occupied(Player::X), true);
        let mut clicks = 0;
        cell.click(|_| clicks += 1);
        assert_eq!(clicks, 1);
        assert_eq!(cell.label(), "X");
        assert!(cell.highlight());
    }
}
