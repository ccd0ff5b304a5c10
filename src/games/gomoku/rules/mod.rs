//! Game rules for gomoku.
//!
//! Pure functions over board snapshots. Rules are separated from history
//! bookkeeping so the controller and the invariants share one definition of
//! a legal move and a win.

pub mod placement;
pub mod win;

pub use placement::apply_move;
pub use win::{Line, Orientation, calculate_winner, lines, winning_line};
