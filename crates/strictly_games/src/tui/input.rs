//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use strictly_tictactoe::Position;

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.column());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_coordinates(row, col).unwrap_or(cursor)
}

/// Maps the digit keys `1`-`9` to board positions.
pub fn digit_position(c: char) -> Option<Position> {
    match c.to_digit(10) {
        Some(digit @ 1..=9) => Position::from_index(digit as usize - 1),
        _ => None,
    }
}
