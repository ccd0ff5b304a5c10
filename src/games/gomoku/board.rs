//! Immutable 30x30 board snapshots.

use super::types::{BOARD_LEN, BOARD_WIDTH, Cell, Player, Position};
use serde::{Deserialize, Serialize};

/// One complete board state.
///
/// Snapshots are never mutated in place: placing a stone yields a new
/// `Board`. Cells are stored row-major (`index = row * 30 + col`) and the
/// length is always exactly 900.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Creates the all-empty starting board.
    pub fn new() -> Self {
        Self {
            cells: vec![Cell::Empty; BOARD_LEN],
        }
    }

    /// Builds a board holding the given stones.
    ///
    /// Later entries overwrite earlier ones on the same cell. Useful for
    /// arbitrary positions that no legal game reaches.
    pub fn from_stones(stones: impl IntoIterator<Item = (Position, Player)>) -> Self {
        let mut board = Self::new();
        for (pos, player) in stones {
            board.cells[pos.to_index()] = Cell::from(player);
        }
        board
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at a row-major index, `None` when off the board.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at the position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Counts stones of either colour.
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Counts one player's stones.
    pub fn count(&self, player: Player) -> usize {
        let target = Cell::from(player);
        self.cells.iter().filter(|cell| **cell == target).count()
    }

    /// Positions whose cell differs between `self` and `other`.
    pub fn changed_positions(&self, other: &Board) -> Vec<Position> {
        self.cells
            .iter()
            .zip(&other.cells)
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .filter_map(|(index, _)| Position::from_index(index))
            .collect()
    }

    /// Returns a new snapshot equal to this one plus a stone at `pos`.
    ///
    /// Does not check occupancy; `rules::apply_move` is the validated path.
    pub(crate) fn with_stone(&self, pos: Position, player: Player) -> Self {
        let mut cells = self.cells.clone();
        cells[pos.to_index()] = Cell::from(player);
        Self { cells }
    }

    /// Formats the board as a text grid, one row per line.
    ///
    /// `B` is black, `R` is red, `.` is empty.
    pub fn display(&self) -> String {
        let mut result = String::with_capacity(BOARD_LEN * 2 + BOARD_WIDTH);
        for row in self.cells.chunks(BOARD_WIDTH) {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    result.push(' ');
                }
                result.push(cell.symbol());
            }
            result.push('\n');
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

// 900 cells drown logs; list the stones instead.
impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stones: Vec<_> = self
            .cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.player().map(|player| (index, player)))
            .collect();
        f.debug_struct("Board").field("stones", &stones).finish()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

/// Error building a board from a cell list of the wrong length.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Board must have {} cells, got {}", BOARD_LEN, len)]
pub struct BoardSizeError {
    /// Length that was supplied.
    pub len: usize,
}

impl TryFrom<Vec<Cell>> for Board {
    type Error = BoardSizeError;

    fn try_from(cells: Vec<Cell>) -> Result<Self, Self::Error> {
        if cells.len() == BOARD_LEN {
            Ok(Self { cells })
        } else {
            Err(BoardSizeError { len: cells.len() })
        }
    }
}

impl From<Board> for Vec<Cell> {
    fn from(board: Board) -> Self {
        board.cells
    }
}
