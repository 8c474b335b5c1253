//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use gato_tictactoe::Position;

/// Moves the board cursor one cell in the arrow's direction.
///
/// The cursor stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Left => Position::from_row_col(row, col.wrapping_sub(1)),
        KeyCode::Right => Position::from_row_col(row, col + 1),
        KeyCode::Up => Position::from_row_col(row.wrapping_sub(1), col),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        _ => None,
    };
    target.unwrap_or(cursor)
}

/// Steps a list selection up or down, wrapping at both ends.
pub fn step_selection(selected: usize, len: usize, key: KeyCode) -> usize {
    if len == 0 {
        return 0;
    }
    match key {
        KeyCode::Up if selected == 0 => len - 1,
        KeyCode::Up => selected - 1,
        KeyCode::Down => (selected + 1) % len,
        _ => selected.min(len - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Enter), Position::Center);
    }

    #[test]
    fn test_selection_wraps() {
        assert_eq!(step_selection(0, 3, KeyCode::Up), 2);
        assert_eq!(step_selection(2, 3, KeyCode::Down), 0);
        assert_eq!(step_selection(1, 3, KeyCode::Down), 2);
        assert_eq!(step_selection(5, 3, KeyCode::Enter), 2);
    }
}
