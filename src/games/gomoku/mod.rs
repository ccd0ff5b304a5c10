//! Five-in-a-row on a fixed 30x30 board.
//!
//! - [`rules`]: the board engine, pure functions over snapshots.
//! - [`GameHistory`]: the history controller with time travel.
//! - [`GameView`] / [`WinWatcher`]: what a front end reads.

mod action;
mod board;
mod history;
pub mod invariants;
pub mod rules;
mod types;
mod view;

pub use action::{JumpError, Move, MoveError};
pub use board::{Board, BoardSizeError};
pub use history::{GameHistory, describe_move};
pub use types::{BOARD_LEN, BOARD_WIDTH, Cell, Player, Position, WIN_LENGTH};
pub use view::{GameView, WinWatcher};
