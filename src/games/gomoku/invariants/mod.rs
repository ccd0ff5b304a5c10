//! First-class invariants for gomoku history.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are testable independently. Per-move invariants are stated over a
//! single [`Transition`] and lifted to whole histories; debug builds check
//! only the newest transition after every accepted move, since earlier
//! snapshots never change.

use super::{Board, GameHistory};
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// One accepted move: snapshot `number - 1` becoming snapshot `number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<'a> {
    /// Index of the snapshot the move produced.
    pub number: usize,
    /// Snapshot before the move.
    pub before: &'a Board,
    /// Snapshot after the move.
    pub after: &'a Board,
}

impl<'a> Transition<'a> {
    /// Every transition in `history`, oldest first.
    pub fn all(history: &'a GameHistory) -> impl Iterator<Item = Transition<'a>> {
        history
            .snapshots
            .windows(2)
            .enumerate()
            .map(|(i, pair)| Transition {
                number: i + 1,
                before: &pair[0],
                after: &pair[1],
            })
    }

    /// The newest transition, `None` before the first move.
    pub fn latest(history: &'a GameHistory) -> Option<Transition<'a>> {
        let number = history.snapshots.len().checked_sub(1).filter(|&n| n > 0)?;
        Some(Transition {
            number,
            before: &history.snapshots[number - 1],
            after: &history.snapshots[number],
        })
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_colours;
pub mod no_move_after_win;
pub mod pointer_in_bounds;
pub mod single_stone_delta;

pub use alternating_colours::AlternatingColoursInvariant;
pub use no_move_after_win::NoMoveAfterWinInvariant;
pub use pointer_in_bounds::PointerInBoundsInvariant;
pub use single_stone_delta::SingleStoneDeltaInvariant;

/// All gomoku history invariants as a composable set.
pub type GomokuInvariants = (
    PointerInBoundsInvariant,
    SingleStoneDeltaInvariant,
    AlternatingColoursInvariant,
    NoMoveAfterWinInvariant,
);

/// Invariants checked on each accepted move.
pub type TransitionInvariants = (
    SingleStoneDeltaInvariant,
    AlternatingColoursInvariant,
    NoMoveAfterWinInvariant,
);

/// Checks the pointer and the newest transition in debug builds, logging
/// and panicking on failure.
///
/// Work is bounded by the board size, not the history length.
#[instrument(skip(history), fields(len = history.len()))]
pub fn assert_invariants(history: &GameHistory) {
    if !cfg!(debug_assertions) {
        return;
    }

    let mut violations = Vec::new();
    if !PointerInBoundsInvariant::holds(history) {
        violations.push(InvariantViolation::new(PointerInBoundsInvariant::description()));
    }
    if let Some(transition) = Transition::latest(history)
        && let Err(found) = TransitionInvariants::check_all(&transition)
    {
        violations.extend(found);
    }

    if !violations.is_empty() {
        for violation in &violations {
            warn!(%violation, "History invariant violated");
        }
        panic!("History invariants violated: {violations:?}");
    }
}
