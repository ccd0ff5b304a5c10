//! Pointer invariant: the pointer names a stored snapshot and the game
//! starts from the empty board.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: `current < len` and snapshot 0 is empty.
pub struct PointerInBoundsInvariant;

impl Invariant<GameHistory> for PointerInBoundsInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.current < history.snapshots.len()
            && history
                .snapshots
                .first()
                .is_some_and(|board| board.stone_count() == 0)
    }

    fn description() -> &'static str {
        "Pointer names a stored snapshot and history starts empty"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gomoku::{Board, Player, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(PointerInBoundsInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_pointer_past_end_violates() {
        let mut history = GameHistory::new();
        history.current = 1;
        assert!(!PointerInBoundsInvariant::holds(&history));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let mut history = GameHistory::new();
        history.snapshots[0] = Board::from_stones([(Position::new(3, 3).unwrap(), Player::Black)]);
        assert!(!PointerInBoundsInvariant::holds(&history));
    }
}
