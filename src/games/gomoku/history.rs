//! Move history with time travel.
//!
//! `GameHistory` owns every snapshot produced in a game and a pointer to the
//! one on display. Playing from an earlier snapshot discards everything
//! after it before appending, so there is always a single linear timeline.

use super::action::{JumpError, Move, MoveError};
use super::invariants::assert_invariants;
use super::rules::{apply_move, calculate_winner, winning_line};
use super::view::GameView;
use super::{Board, Player};
use std::ops::Range;
use tracing::{debug, info, instrument, warn};

/// Snapshot history and current-move pointer for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    pub(super) snapshots: Vec<Board>,
    pub(super) current: usize,
}

impl GameHistory {
    /// Creates a history holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// Plays the current player's stone at `index` on the displayed snapshot.
    ///
    /// On success any snapshots after the displayed one are dropped, the new
    /// snapshot is appended and becomes the displayed one.
    ///
    /// # Errors
    ///
    /// Returns the `MoveError` from `rules::apply_move`; history is unchanged.
    #[instrument(skip(self), fields(current_move = self.current, player = %self.to_move()))]
    pub fn play(&mut self, index: usize) -> Result<(), MoveError> {
        let player = self.to_move();
        let next = apply_move(self.current_board(), index, player)
            .inspect_err(|error| warn!(%error, "Move rejected"))?;

        let discarded = self.snapshots.len() - (self.current + 1);
        if discarded > 0 {
            debug!(discarded, "Truncating future history");
        }
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(next);
        self.current = self.snapshots.len() - 1;

        debug!(move_number = self.current, "Move applied");
        assert_invariants(self);
        Ok(())
    }

    /// Moves the pointer to snapshot `target` without touching history.
    ///
    /// # Errors
    ///
    /// Returns `JumpError::OutOfRange` if no such snapshot exists.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, target: usize) -> Result<(), JumpError> {
        if target >= self.snapshots.len() {
            let error = JumpError::OutOfRange {
                target,
                len: self.snapshots.len(),
            };
            warn!(%error, "Jump rejected");
            return Err(error);
        }
        self.current = target;
        debug!("Jumped");
        Ok(())
    }

    /// Jumps one snapshot back.
    ///
    /// # Errors
    ///
    /// Returns `JumpError::OutOfRange` when already at the start.
    pub fn step_back(&mut self) -> Result<(), JumpError> {
        match self.current.checked_sub(1) {
            Some(target) => self.jump_to(target),
            None => Err(JumpError::OutOfRange {
                target: 0,
                len: self.snapshots.len(),
            }),
        }
    }

    /// Jumps one snapshot forward.
    ///
    /// # Errors
    ///
    /// Returns `JumpError::OutOfRange` when already at the latest snapshot.
    pub fn step_forward(&mut self) -> Result<(), JumpError> {
        self.jump_to(self.current + 1)
    }

    /// Discards the whole game and starts over from the empty board.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn reset(&mut self) {
        info!("Starting new game");
        *self = Self::new();
    }

    /// Builds the read-only view of the displayed snapshot.
    #[instrument(skip(self))]
    pub fn current_view(&self) -> GameView {
        let board = self.current_board().clone();
        let line = winning_line(&board);
        GameView::new(
            board,
            self.to_move(),
            line,
            self.current,
            self.snapshots.len(),
        )
    }

    /// The displayed snapshot.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// Whose turn it is at the displayed snapshot.
    pub fn to_move(&self) -> Player {
        Player::to_move_at(self.current)
    }

    /// Winner of the displayed snapshot.
    pub fn winner(&self) -> Option<Player> {
        calculate_winner(self.current_board())
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Number of snapshots, the initial one included.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`: history starts with the empty board.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Checks if the displayed snapshot is the newest one.
    pub fn is_at_latest(&self) -> bool {
        self.current + 1 == self.snapshots.len()
    }

    /// Every valid `jump_to` target.
    pub fn moves(&self) -> Range<usize> {
        0..self.snapshots.len()
    }

    /// Returns snapshot `k`, if stored.
    pub fn snapshot(&self, k: usize) -> Option<&Board> {
        self.snapshots.get(k)
    }

    /// All stored snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// The stone that turned snapshot `k - 1` into snapshot `k`.
    ///
    /// `None` for the initial snapshot and for indices past the end.
    pub fn placed_stone(&self, k: usize) -> Option<Move> {
        let before = self.snapshots.get(k.checked_sub(1)?)?;
        let after = self.snapshots.get(k)?;
        match after.changed_positions(before).as_slice() {
            [pos] => after.get(*pos).player().map(|player| Move::new(player, *pos)),
            _ => None,
        }
    }

    /// Labels for a move-list control, one per snapshot.
    pub fn move_descriptions(&self) -> Vec<String> {
        self.moves().map(describe_move).collect()
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Label for the "jump to snapshot k" control.
pub fn describe_move(k: usize) -> String {
    if k > 0 {
        format!("Go to move #{k}")
    } else {
        "Go to game start".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gomoku::{Cell, Position};

    #[test]
    fn test_new_history() {
        let history = GameHistory::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_move(), 0);
        assert!(history.is_at_latest());
        assert!(!history.is_empty());
        assert_eq!(history.to_move(), Player::Black);
    }

    #[test]
    fn test_play_appends_and_advances() {
        let mut history = GameHistory::new();
        history.play(0).unwrap();
        history.play(1).unwrap();

        assert_eq!(history.len(), 3);
        assert_eq!(history.current_move(), 2);
        assert_eq!(history.current_board().cell(0), Some(Cell::Black));
        assert_eq!(history.current_board().cell(1), Some(Cell::Red));
    }

    #[test]
    fn test_rejected_move_leaves_state() {
        let mut history = GameHistory::new();
        history.play(5).unwrap();
        let before = history.clone();

        assert!(history.play(5).is_err());
        assert!(history.play(900).is_err());
        assert_eq!(history, before);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut history = GameHistory::new();
        assert_eq!(
            history.jump_to(1),
            Err(JumpError::OutOfRange { target: 1, len: 1 })
        );
        assert_eq!(history.current_move(), 0);
    }

    #[test]
    fn test_step_back_and_forward() {
        let mut history = GameHistory::new();
        history.play(0).unwrap();

        assert!(history.step_forward().is_err());
        history.step_back().unwrap();
        assert_eq!(history.current_move(), 0);
        assert!(history.step_back().is_err());
        history.step_forward().unwrap();
        assert_eq!(history.current_move(), 1);
    }

    #[test]
    fn test_placed_stone() {
        let mut history = GameHistory::new();
        history.play(42).unwrap();
        history.play(43).unwrap();

        assert_eq!(history.placed_stone(0), None);
        assert_eq!(
            history.placed_stone(2),
            Some(Move::new(Player::Red, Position::from_index(43).unwrap()))
        );
        assert_eq!(history.placed_stone(3), None);
    }

    #[test]
    fn test_move_descriptions() {
        let mut history = GameHistory::new();
        history.play(0).unwrap();
        assert_eq!(
            history.move_descriptions(),
            vec!["Go to game start".to_string(), "Go to move #1".to_string()]
        );
    }

    #[test]
    fn test_reset() {
        let mut history = GameHistory::new();
        history.play(0).unwrap();
        history.reset();
        assert_eq!(history, GameHistory::new());
    }
}
