//! Non-interactive front end: play a move list and report the result.

use crate::games::gomoku::{GameHistory, GameView, JumpError, MoveError};
use derive_more::Display;
use tracing::{info, instrument};

/// Why a replay stopped early.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ReplayError {
    /// A listed move was declined.
    #[display("Move {} (cell {}) rejected", number, index)]
    Move {
        /// 1-based position in the move list.
        number: usize,
        /// The rejected cell index.
        index: usize,
        /// Why it was rejected.
        source: MoveError,
    },

    /// The requested jump target does not exist.
    #[display("History jump rejected")]
    Jump(JumpError),
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplayError::Move { source, .. } => Some(source),
            ReplayError::Jump(err) => Some(err),
        }
    }
}

impl From<JumpError> for ReplayError {
    fn from(err: JumpError) -> Self {
        ReplayError::Jump(err)
    }
}

/// Plays `moves` in order from an empty board, then optionally jumps.
///
/// # Errors
///
/// Stops at the first declined move or jump.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay(moves: &[usize], jump: Option<usize>) -> Result<GameHistory, ReplayError> {
    let mut history = GameHistory::new();
    for (i, &index) in moves.iter().enumerate() {
        history.play(index).map_err(|source| ReplayError::Move {
            number: i + 1,
            index,
            source,
        })?;
    }
    if let Some(target) = jump {
        history.jump_to(target)?;
    }
    info!(len = history.len(), current_move = history.current_move(), "Replay finished");
    Ok(history)
}

/// Text report: status line, then the board grid.
pub fn render_text(view: &GameView) -> String {
    format!(
        "{}\nMove {} of {}\n\n{}",
        view.status(),
        view.current_move(),
        view.move_count() - 1,
        view.board().display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gomoku::Player;

    #[test]
    fn test_replay_reports_failing_move() {
        let err = replay(&[0, 0], None).unwrap_err();
        assert!(matches!(err, ReplayError::Move { number: 2, index: 0, .. }));
        assert_eq!(err.to_string(), "Move 2 (cell 0) rejected");
    }

    #[test]
    fn test_replay_error_names_cause_once() {
        let err = anyhow::Error::new(replay(&[0, 0], None).unwrap_err());
        let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
        assert_eq!(
            chain,
            vec!["Move 2 (cell 0) rejected", "Cell (0, 0) is already occupied"]
        );
    }

    #[test]
    fn test_replay_with_jump() {
        let history = replay(&[0, 30, 1], Some(1)).unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(history.current_move(), 1);
        assert_eq!(history.to_move(), Player::Red);
    }

    #[test]
    fn test_replay_bad_jump() {
        let err = replay(&[0], Some(5)).unwrap_err();
        assert_eq!(err, ReplayError::Jump(JumpError::OutOfRange { target: 5, len: 2 }));

        let chain: Vec<String> = anyhow::Error::new(err).chain().map(|e| e.to_string()).collect();
        assert_eq!(
            chain,
            vec![
                "History jump rejected",
                "Move #5 is out of range (history holds 2 snapshots)"
            ]
        );
    }

    #[test]
    fn test_render_text() {
        let history = replay(&[0], None).unwrap();
        let text = render_text(&history.current_view());
        assert!(text.starts_with("Next player: Red\nMove 1 of 1"));
        assert!(text.contains("B . ."));
    }
}
