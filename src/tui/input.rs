//! Cursor movement for keyboard navigation.

use crate::games::gomoku::Position;
use crossterm::event::KeyCode;

/// Moves cursor based on arrow keys or `hjkl`, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (d_row, d_col) = match key {
        KeyCode::Up | KeyCode::Char('k') => (-1, 0),
        KeyCode::Down | KeyCode::Char('j') => (1, 0),
        KeyCode::Left | KeyCode::Char('h') => (0, -1),
        KeyCode::Right | KeyCode::Char('l') => (0, 1),
        _ => return cursor,
    };
    cursor.offset(d_row, d_col).unwrap_or(cursor)
}
