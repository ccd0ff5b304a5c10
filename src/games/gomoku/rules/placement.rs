//! Move application for gomoku.

use super::super::action::MoveError;
use super::super::{Board, Player, Position};
use super::win::calculate_winner;
use tracing::instrument;

/// Places `player`'s stone at `index`, returning the resulting snapshot.
///
/// Checks run in order: index in range, game not yet won, cell empty. A
/// won board therefore reports `GameOver` even for occupied cells. The
/// input board is never modified.
///
/// # Errors
///
/// - `MoveError::IndexOutOfRange` if `index >= 900`.
/// - `MoveError::GameOver` if the board already has a winner.
/// - `MoveError::CellOccupied` if the cell holds a stone.
#[instrument(skip(board), fields(stones = board.stone_count()))]
pub fn apply_move(board: &Board, index: usize, player: Player) -> Result<Board, MoveError> {
    let pos = Position::try_from(index)?;

    if let Some(winner) = calculate_winner(board) {
        return Err(MoveError::GameOver(winner));
    }

    if !board.is_empty(pos) {
        return Err(MoveError::CellOccupied(pos));
    }

    Ok(board.with_stone(pos, player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gomoku::Cell;

    #[test]
    fn test_apply_move_places_stone() {
        let board = Board::new();
        let next = apply_move(&board, 31, Player::Black).unwrap();

        assert_eq!(next.cell(31), Some(Cell::Black));
        assert_eq!(next.stone_count(), 1);
        assert_eq!(board.stone_count(), 0);
    }

    #[test]
    fn test_apply_move_rejects_out_of_range() {
        let err = apply_move(&Board::new(), 900, Player::Black).unwrap_err();
        assert_eq!(err, MoveError::IndexOutOfRange { index: 900 });
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let board = apply_move(&Board::new(), 0, Player::Black).unwrap();
        let err = apply_move(&board, 0, Player::Red).unwrap_err();
        assert_eq!(err, MoveError::CellOccupied(Position::new(0, 0).unwrap()));
    }

    #[test]
    fn test_game_over_takes_precedence() {
        let won = Board::from_stones((0..5).filter_map(|c| Position::new(0, c)).map(|p| (p, Player::Red)));

        assert_eq!(
            apply_move(&won, 0, Player::Black),
            Err(MoveError::GameOver(Player::Red))
        );
        assert_eq!(
            apply_move(&won, 100, Player::Black),
            Err(MoveError::GameOver(Player::Red))
        );
    }
}
