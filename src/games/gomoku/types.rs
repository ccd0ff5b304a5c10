//! Core domain types for gomoku.

use super::action::MoveError;
use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const BOARD_WIDTH: usize = 30;

/// Number of cells on the board.
pub const BOARD_LEN: usize = BOARD_WIDTH * BOARD_WIDTH;

/// Stones in a row needed to win.
pub const WIN_LENGTH: usize = 5;

/// Player in the game, identified by stone colour.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Black (moves first).
    Black,
    /// Red (moves second).
    Red,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::Red,
            Player::Red => Player::Black,
        }
    }

    /// Returns who moves from the given history snapshot.
    ///
    /// Black moves from even snapshots, Red from odd ones.
    pub fn to_move_at(snapshot: usize) -> Self {
        if snapshot % 2 == 0 {
            Player::Black
        } else {
            Player::Red
        }
    }

    /// Single-letter marker used in text boards.
    pub fn symbol(self) -> char {
        match self {
            Player::Black => 'B',
            Player::Red => 'R',
        }
    }
}

/// A cell on the gomoku board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No stone.
    #[default]
    Empty,
    /// Black stone.
    Black,
    /// Red stone.
    Red,
}

impl Cell {
    /// Checks if the cell holds no stone.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the owner of the stone in this cell.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::Red => Some(Player::Red),
        }
    }

    /// Single-letter marker used in text boards (`.` when empty).
    pub fn symbol(self) -> char {
        self.player().map_or('.', Player::symbol)
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::Red => Cell::Red,
        }
    }
}

/// A cell coordinate on the 30x30 board.
///
/// Always in bounds: the only constructors validate row and column.
/// Serializes as its row-major index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "usize", try_from = "usize")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// The middle of the board.
    pub const CENTRE: Position = Position {
        row: (BOARD_WIDTH / 2) as u8,
        col: (BOARD_WIDTH / 2) as u8,
    };

    /// Creates a position from row and column, `None` when off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_WIDTH && col < BOARD_WIDTH).then_some(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Creates a position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < BOARD_LEN).then(|| Self {
            row: (index / BOARD_WIDTH) as u8,
            col: (index % BOARD_WIDTH) as u8,
        })
    }

    /// Converts position to row-major board index (0-899).
    pub fn to_index(self) -> usize {
        self.row() * BOARD_WIDTH + self.col()
    }

    /// Row, top to bottom.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column, left to right.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Returns the position shifted by the given deltas, `None` when that
    /// leaves the board.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row().checked_add_signed(d_row)?;
        let col = self.col().checked_add_signed(d_col)?;
        Self::new(row, col)
    }

    /// All 900 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_LEN).filter_map(Self::from_index)
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.to_index()
    }
}

impl TryFrom<usize> for Position {
    type Error = MoveError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(MoveError::IndexOutOfRange { index })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_corners() {
        assert_eq!(Position::from_index(0), Position::new(0, 0));
        assert_eq!(Position::from_index(29), Position::new(0, 29));
        assert_eq!(Position::from_index(30), Position::new(1, 0));
        assert_eq!(Position::from_index(899), Position::new(29, 29));
        assert_eq!(Position::from_index(900), None);
    }

    #[test]
    fn test_new_rejects_off_board() {
        assert!(Position::new(30, 0).is_none());
        assert!(Position::new(0, 30).is_none());
    }

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Position::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, 1), Position::new(1, 1));

        let far = Position::new(29, 29).unwrap();
        assert_eq!(far.offset(0, 1), None);
        assert_eq!(far.offset(-4, -4), Position::new(25, 25));
    }

    #[test]
    fn test_try_from_reports_index() {
        let err = Position::try_from(1000).unwrap_err();
        assert_eq!(err, MoveError::IndexOutOfRange { index: 1000 });
    }

    #[test]
    fn test_to_move_alternates() {
        assert_eq!(Player::to_move_at(0), Player::Black);
        assert_eq!(Player::to_move_at(1), Player::Red);
        assert_eq!(Player::to_move_at(2), Player::Black);
    }

    #[test]
    fn test_cell_from_player() {
        assert_eq!(Cell::from(Player::Black).player(), Some(Player::Black));
        assert_eq!(Cell::from(Player::Red).symbol(), 'R');
        assert_eq!(Cell::Empty.symbol(), '.');
        assert_eq!(Position::all().count(), BOARD_LEN);
    }
}
