//! First-class action types for gomoku.
//!
//! A move is a domain event: a player placing one stone. The errors here
//! are the complete set of ways the core declines an operation. Every one
//! leaves game state untouched.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in gomoku: a player placing a stone at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell receiving the stone.
    pub position: Position,
}

impl Move {
    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error returned when a move is declined.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is outside the board.
    #[display("Cell index {} is outside the board (0-899)", index)]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
    },

    /// The cell already holds a stone.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game already has a winner.
    #[display("Game is already over: {} won", _0)]
    GameOver(Player),
}

impl std::error::Error for MoveError {}

/// Error returned when a history jump is declined.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The target snapshot does not exist.
    #[display("Move #{} is out of range (history holds {} snapshots)", target, len)]
    OutOfRange {
        /// The requested snapshot.
        target: usize,
        /// Number of snapshots in history.
        len: usize,
    },
}

impl std::error::Error for JumpError {}
