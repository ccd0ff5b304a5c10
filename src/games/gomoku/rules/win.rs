//! Win detection logic for gomoku.
//!
//! A win is five same-coloured stones in a straight, contiguous run. Every
//! run that fits on the board is enumerated exactly once per orientation:
//!
//! | orientation   | step      | anchor rows | anchor cols |
//! |---------------|-----------|-------------|-------------|
//! | horizontal    | (0, +1)   | 0..30       | 0..26       |
//! | vertical      | (+1, 0)   | 0..26       | 0..30       |
//! | diagonal      | (+1, +1)  | 0..26       | 0..26       |
//! | anti-diagonal | (+1, -1)  | 0..26       | 4..30       |
//!
//! 780 + 780 + 676 + 676 = 2912 runs.
//!
//! Older gomoku boards anchored every orientation on a 26x26 grid (2704
//! runs). That grid never sees horizontal runs in rows 26-29 or vertical
//! runs in columns 26-29, so five stones at (27, 0)..(27, 4) did not win.
//! Those runs are included here.

use super::super::{Board, Cell, Player, Position};
use super::super::types::{BOARD_WIDTH, WIN_LENGTH};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Direction a run extends in from its anchor.
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
pub enum Orientation {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Orientation {
    /// Row and column step between consecutive cells of a run.
    pub fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::Diagonal => (1, 1),
            Orientation::AntiDiagonal => (1, -1),
        }
    }

    /// Every anchor whose run stays on the board, row-major.
    pub fn anchors(self) -> impl Iterator<Item = Position> {
        let (d_row, d_col) = self.step();
        let cols = anchor_span(d_col);
        anchor_span(d_row).flat_map(move |row| {
            cols.clone().filter_map(move |col| Position::new(row, col))
        })
    }
}

// Anchor coordinates along one axis for a given step on that axis.
fn anchor_span(step: isize) -> Range<usize> {
    let reach = WIN_LENGTH - 1;
    match step {
        0 => 0..BOARD_WIDTH,
        s if s > 0 => 0..BOARD_WIDTH - reach,
        _ => reach..BOARD_WIDTH,
    }
}

/// A run of five cells: an anchor and the direction it extends in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Line {
    /// Direction of the run.
    pub orientation: Orientation,
    /// First cell of the run.
    pub anchor: Position,
}

impl Line {
    /// The cells of the run, starting at the anchor.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (d_row, d_col) = self.orientation.step();
        let anchor = self.anchor;
        (0..WIN_LENGTH as isize).filter_map(move |i| anchor.offset(d_row * i, d_col * i))
    }

    /// Checks if the run covers the position.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions().any(|p| p == pos)
    }

    /// Returns the player owning all five cells, if any.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let mut cells = self.positions().map(|pos| board.get(pos));
        let owner = cells.next()?.player()?;
        let stone = Cell::from(owner);
        cells.all(|cell| cell == stone).then_some(owner)
    }
}

/// Every run of five that fits on the board, orientation by orientation.
pub fn lines() -> impl Iterator<Item = Line> {
    Orientation::iter().flat_map(|orientation| {
        orientation
            .anchors()
            .map(move |anchor| Line::new(orientation, anchor))
    })
}

/// Returns the first run owned entirely by one player.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<Line> {
    lines().find(|line| line.owner(board).is_some())
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has five in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn calculate_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|line| line.owner(board))
}
