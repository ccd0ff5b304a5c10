//! Post-win lock invariant: nothing is played after five in a row.

use super::super::GameHistory;
use super::super::rules::calculate_winner;
use super::{Invariant, Transition};

/// Invariant: only the last snapshot may contain a winning run, so no
/// transition starts from a won board.
pub struct NoMoveAfterWinInvariant;

impl<'a> Invariant<Transition<'a>> for NoMoveAfterWinInvariant {
    fn holds(transition: &Transition<'a>) -> bool {
        calculate_winner(transition.before).is_none()
    }

    fn description() -> &'static str {
        "No snapshot follows a won position"
    }
}

impl Invariant<GameHistory> for NoMoveAfterWinInvariant {
    fn holds(history: &GameHistory) -> bool {
        Transition::all(history).all(|t| <Self as Invariant<Transition<'_>>>::holds(&t))
    }

    fn description() -> &'static str {
        <Self as Invariant<Transition<'_>>>::description()
    }
}
