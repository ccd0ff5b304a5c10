//! Alternating colour invariant: Black, Red, Black, Red, ...

use super::super::{GameHistory, Player};
use super::{Invariant, Transition};

/// Invariant: the stone added at snapshot `k` is Black for odd `k` and Red
/// for even `k`.
pub struct AlternatingColoursInvariant;

impl<'a> Invariant<Transition<'a>> for AlternatingColoursInvariant {
    fn holds(transition: &Transition<'a>) -> bool {
        let expected = Player::to_move_at(transition.number - 1);
        transition.after.count(expected) == transition.before.count(expected) + 1
    }

    fn description() -> &'static str {
        "Players alternate stones (Black, Red, Black, ...)"
    }
}

impl Invariant<GameHistory> for AlternatingColoursInvariant {
    fn holds(history: &GameHistory) -> bool {
        Transition::all(history).all(|t| <Self as Invariant<Transition<'_>>>::holds(&t))
    }

    fn description() -> &'static str {
        <Self as Invariant<Transition<'_>>>::description()
    }
}
