//! Strictly Gomoku library - five in a row with time travel
//!
//! Black and Red alternate placing stones on a fixed 30x30 board. The first
//! player with five consecutive stones in a row, column or diagonal wins.
//! Every position is kept, so play can rewind to any earlier move and branch
//! from there.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over board snapshots ([`rules::apply_move`],
//!   [`rules::calculate_winner`])
//! - **History**: [`GameHistory`] owns the snapshot sequence and the pointer
//!   to the displayed position
//! - **Views**: [`GameView`] is the read-only projection front ends render
//! - **Front ends**: a ratatui terminal UI and a non-interactive replay
//!
//! # Example
//!
//! ```
//! use strictly_gomoku::{GameHistory, Player};
//!
//! let mut history = GameHistory::new();
//! history.play(0)?;
//! history.play(30)?;
//! assert_eq!(history.to_move(), Player::Black);
//!
//! history.jump_to(1)?;
//! assert_eq!(history.to_move(), Player::Red);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod replay;
mod tui;

// Crate-level exports - Game types
pub use games::gomoku::{
    BOARD_LEN, BOARD_WIDTH, Board, BoardSizeError, Cell, GameHistory, GameView, JumpError, Move,
    MoveError, Player, Position, WIN_LENGTH, WinWatcher, describe_move, invariants, rules,
};

// Crate-level exports - Configuration
pub use config::{ConfigError, GomokuConfig};

// Crate-level exports - Replay
pub use replay::{ReplayError, render_text, replay};

// Crate-level exports - Terminal UI
pub use tui::{
    App, ScreenLayout, cell_at, draw, move_at, move_cursor, run_tui, screen_layout, window_start,
};
