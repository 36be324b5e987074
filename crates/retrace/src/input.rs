//! Keyboard helpers: cursor movement and direct cell keys.

use crossterm::event::KeyCode;
use retrace_core::Position;

/// Moves the board cursor one cell in the arrow's direction.
///
/// The cursor stops at the board's edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row() - 1, cursor.col() - 1);
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps keys `1`-`9` to cell indices 0-8, reading the board like a phone keypad.
pub fn digit_cell(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Left), Position::BottomLeft);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Down), Position::BottomLeft);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Char('x')), Position::TopRight);
    }

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(digit_cell(KeyCode::Char('1')), Some(0));
        assert_eq!(digit_cell(KeyCode::Char('9')), Some(8));
        assert_eq!(digit_cell(KeyCode::Char('0')), None);
        assert_eq!(digit_cell(KeyCode::Enter), None);
    }
}
