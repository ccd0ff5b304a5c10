//! Tests for gomoku history and time travel.

use std::time::{Duration, Instant};
use strictly_gomoku::invariants::{GomokuInvariants, InvariantSet};
use strictly_gomoku::{
    Cell, GameHistory, JumpError, MoveError, Player, Position, WinWatcher, describe_move,
};

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).unwrap()
}

fn index(row: usize, col: usize) -> usize {
    pos(row, col).to_index()
}

/// Black takes row 0 columns 0-4, Red answers on row 1.
fn play_black_win(history: &mut GameHistory) {
    for col in 0..5 {
        history.play(index(0, col)).unwrap();
        if col < 4 {
            history.play(index(1, col)).unwrap();
        }
    }
}

#[test]
fn test_initial_state() {
    let history = GameHistory::new();
    let view = history.current_view();

    assert_eq!(history.len(), 1);
    assert_eq!(view.current_move(), 0);
    assert_eq!(view.move_count(), 1);
    assert_eq!(view.to_move(), Player::Black);
    assert_eq!(view.winner(), None);
    assert_eq!(view.status(), "Next player: Black");
    assert_eq!(view.board().stone_count(), 0);
}

#[test]
fn test_players_alternate() {
    let mut history = GameHistory::new();
    history.play(0).unwrap();
    history.play(1).unwrap();
    history.play(2).unwrap();

    let board = history.current_board();
    assert_eq!(board.get(pos(0, 0)), Cell::Black);
    assert_eq!(board.get(pos(0, 1)), Cell::Red);
    assert_eq!(board.get(pos(0, 2)), Cell::Black);
    assert_eq!(history.to_move(), Player::Red);
    assert_eq!(history.len(), 4);
}

#[test]
fn test_rejected_move_leaves_history_unchanged() {
    let mut history = GameHistory::new();
    history.play(0).unwrap();
    let before = history.clone();

    assert_eq!(history.play(0), Err(MoveError::CellOccupied(pos(0, 0))));
    assert_eq!(history.play(900), Err(MoveError::IndexOutOfRange { index: 900 }));
    assert_eq!(history, before);
}

#[test]
fn test_branching_truncates_future() {
    let mut history = GameHistory::new();
    for i in [0, 1, 2, 3] {
        history.play(i).unwrap();
    }
    assert_eq!(history.len(), 5);

    history.jump_to(2).unwrap();
    assert_eq!(history.len(), 5);
    assert_eq!(history.to_move(), Player::Black);

    history.play(500).unwrap();
    assert_eq!(history.len(), 4);
    assert_eq!(history.current_move(), 3);
    assert!(history.is_at_latest());
    assert!(history.current_board().is_empty(pos(0, 2)));
    assert_eq!(history.current_board().get(Position::from_index(500).unwrap()), Cell::Black);
}

#[test]
fn test_jump_round_trip() {
    let mut history = GameHistory::new();
    for i in [10, 20, 30] {
        history.play(i).unwrap();
    }
    let latest = history.current_view();

    history.jump_to(0).unwrap();
    assert_eq!(history.current_view().board().stone_count(), 0);
    assert_eq!(history.len(), 4);

    history.jump_to(3).unwrap();
    assert_eq!(history.current_view(), latest);

    assert_eq!(
        history.jump_to(4),
        Err(JumpError::OutOfRange { target: 4, len: 4 })
    );
    assert_eq!(history.current_move(), 3);
}

#[test]
fn test_win_locks_game_until_rewind() {
    let mut history = GameHistory::new();
    play_black_win(&mut history);

    let view = history.current_view();
    assert_eq!(view.winner(), Some(Player::Black));
    assert_eq!(view.status(), "Winner: Black");
    assert!(view.winning_line().unwrap().contains(pos(0, 4)));

    assert_eq!(history.play(index(20, 20)), Err(MoveError::GameOver(Player::Black)));
    assert_eq!(history.len(), 10);

    // Rewinding before the winning move reopens play and drops the win.
    history.step_back().unwrap();
    assert_eq!(history.winner(), None);
    history.play(index(20, 20)).unwrap();
    assert_eq!(history.len(), 10);
    assert_eq!(history.winner(), None);
}

#[test]
fn test_placed_stones_and_descriptions() {
    let mut history = GameHistory::new();
    history.play(index(4, 5)).unwrap();
    history.play(index(6, 7)).unwrap();

    assert_eq!(history.placed_stone(0), None);
    let second = history.placed_stone(2).unwrap();
    assert_eq!(second.player(), Player::Red);
    assert_eq!(second.position(), pos(6, 7));

    assert_eq!(
        history.move_descriptions(),
        vec!["Go to game start", "Go to move #1", "Go to move #2"]
    );
    assert_eq!(describe_move(12), "Go to move #12");
}

#[test]
fn test_win_watcher_fires_once_per_win() {
    let mut history = GameHistory::new();
    let mut watcher = WinWatcher::new();
    let mut fired = Vec::new();

    for col in 0..5 {
        history.play(index(0, col)).unwrap();
        fired.extend(watcher.observe(&history.current_view()));
        if col < 4 {
            history.play(index(1, col)).unwrap();
            fired.extend(watcher.observe(&history.current_view()));
        }
    }
    // Redrawing the won position stays quiet.
    fired.extend(watcher.observe(&history.current_view()));
    assert_eq!(fired, vec![Player::Black]);

    history.jump_to(0).unwrap();
    assert_eq!(watcher.observe(&history.current_view()), None);
    history.jump_to(9).unwrap();
    assert_eq!(watcher.observe(&history.current_view()), Some(Player::Black));
}

#[test]
fn test_invariants_hold_through_a_game() {
    let mut history = GameHistory::new();
    play_black_win(&mut history);
    assert!(GomokuInvariants::check_all(&history).is_ok());

    history.jump_to(3).unwrap();
    history.play(index(29, 29)).unwrap();
    assert!(GomokuInvariants::check_all(&history).is_ok());
}

/// Cells of a full board coloured so no five in a row exists anywhere:
/// runs of at most two in every direction.
fn drawn_game_cells() -> Vec<usize> {
    let (black, red): (Vec<Position>, Vec<Position>) =
        Position::all().partition(|p| (p.col() + 2 * p.row()) % 4 < 2);
    black
        .iter()
        .zip(&red)
        .flat_map(|(b, r)| [b.to_index(), r.to_index()])
        .collect()
}

#[test]
fn test_long_game_keeps_moves_cheap() {
    let mut history = GameHistory::new();
    let cells = drawn_game_cells();
    assert_eq!(cells.len(), 900);

    let mut slowest = Duration::ZERO;
    let start = Instant::now();
    for &index in &cells[..600] {
        let before = Instant::now();
        history.play(index).unwrap();
        slowest = slowest.max(before.elapsed());
    }

    assert_eq!(history.len(), 601);
    assert_eq!(history.winner(), None);
    // Cost per move must not grow with history length.
    assert!(slowest < Duration::from_millis(250), "slowest move took {slowest:?}");
    assert!(start.elapsed() < Duration::from_secs(30));
    assert!(GomokuInvariants::check_all(&history).is_ok());
}

#[test]
fn test_view_serializes() {
    let mut history = GameHistory::new();
    history.play(31).unwrap();

    let json = serde_json::to_value(history.current_view()).unwrap();
    assert_eq!(json["to_move"], "Red");
    assert_eq!(json["current_move"], 1);
    assert_eq!(json["move_count"], 2);
    assert!(json["winner"].is_null());
}

#[test]
fn test_reset_starts_over() {
    let mut history = GameHistory::new();
    play_black_win(&mut history);
    history.reset();
    assert_eq!(history, GameHistory::new());
}
