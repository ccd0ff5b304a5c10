//! Read-only projections handed to the presentation layer.

use super::rules::Line;
use super::{Board, Player};
use serde::Serialize;
use std::ops::Range;
use tracing::{info, instrument};

/// What a front end needs to draw one frame.
///
/// Built by `GameHistory::current_view`; owns a copy of the displayed
/// snapshot so it stays valid after further moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    board: Board,
    to_move: Player,
    winner: Option<Player>,
    winning_line: Option<Line>,
    current_move: usize,
    move_count: usize,
}

impl GameView {
    pub(super) fn new(
        board: Board,
        to_move: Player,
        winning_line: Option<Line>,
        current_move: usize,
        move_count: usize,
    ) -> Self {
        let winner = winning_line.and_then(|line| line.owner(&board));
        Self {
            board,
            to_move,
            winner,
            winning_line,
            current_move,
            move_count,
        }
    }

    /// The displayed snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it is at the displayed snapshot.
    ///
    /// Still follows the even/odd rule once the game is won.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Winner of the displayed snapshot.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The five cells that won, for highlighting.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Index of the displayed snapshot in history.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Number of snapshots in history, the initial one included.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Every snapshot index a "jump to move" control can target.
    pub fn moves(&self) -> Range<usize> {
        0..self.move_count
    }

    /// One-line status text: the winner, or who plays next.
    pub fn status(&self) -> String {
        match self.winner {
            Some(winner) => format!("Winner: {winner}"),
            None => format!("Next player: {}", self.to_move),
        }
    }
}

/// Edge-triggered win announcer.
///
/// Front ends redraw the same winning snapshot many times but should tell
/// the user once. `observe` fires only when the observed winner changes to
/// a new `Some`; observing a position without a winner re-arms it.
#[derive(Debug, Clone, Default)]
pub struct WinWatcher {
    last: Option<Player>,
}

impl WinWatcher {
    /// Creates a watcher that has seen no winner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Observes a view, returning the winner on a win transition.
    #[instrument(skip(self, view), fields(current_move = view.current_move()))]
    pub fn observe(&mut self, view: &GameView) -> Option<Player> {
        self.observe_winner(view.winner())
    }

    /// Observes a winner directly, returning it on a win transition.
    pub fn observe_winner(&mut self, winner: Option<Player>) -> Option<Player> {
        let fired = winner.filter(|_| winner != self.last);
        self.last = winner;
        if let Some(player) = fired {
            info!(%player, "Win detected");
        }
        fired
    }
}
