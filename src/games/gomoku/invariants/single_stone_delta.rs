//! Single stone delta invariant: each snapshot adds exactly one stone.

use super::super::GameHistory;
use super::{Invariant, Transition};

/// Invariant: snapshot `k` differs from `k - 1` in exactly one cell, which
/// went from empty to a stone.
///
/// Stones are never removed or recoloured.
pub struct SingleStoneDeltaInvariant;

impl<'a> Invariant<Transition<'a>> for SingleStoneDeltaInvariant {
    fn holds(transition: &Transition<'a>) -> bool {
        match transition.after.changed_positions(transition.before).as_slice() {
            [pos] => transition.before.is_empty(*pos) && !transition.after.is_empty(*pos),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one stone to an empty cell"
    }
}

impl Invariant<GameHistory> for SingleStoneDeltaInvariant {
    fn holds(history: &GameHistory) -> bool {
        Transition::all(history).all(|t| <Self as Invariant<Transition<'_>>>::holds(&t))
    }

    fn description() -> &'static str {
        <Self as Invariant<Transition<'_>>>::description()
    }
}
