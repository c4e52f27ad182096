//! Undo tests.

use morris_engine::board::PositionId;
use morris_engine::core::{Action, ActionError, GameStatus, PieceColor};
use morris_engine::game::GameController;

const W: PieceColor = PieceColor::White;
const B: PieceColor = PieceColor::Black;

fn p(id: u8) -> PositionId {
    PositionId::new(id)
}

/// Place then undo gives back the exact prior state.
#[test]
fn test_place_undo_round_trip() {
    let mut game = GameController::new();
    assert!(game.execute(Action::place(p(4), W)));
    let before = game.snapshot();
    let players = *game.players();

    assert!(game.execute(Action::place(p(17), B)));
    assert!(game.execute(Action::Undo));

    assert_eq!(game.snapshot(), before);
    assert_eq!(game.players(), &players);
    assert_eq!(game.current_player(), B);
}

/// Undo on a fresh game is a benign no-op.
#[test]
fn test_undo_on_empty_history() {
    let mut game = GameController::new();
    let before = game.snapshot();

    for _ in 0..3 {
        assert_eq!(game.try_execute(Action::Undo), Err(ActionError::EmptyHistory));
    }
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.status(), GameStatus::InProgress);
}

/// Undo all the way back, one turn at a time.
#[test]
fn test_undo_every_turn() {
    let mut game = GameController::new();
    let script = [
        Action::place(p(0), W),
        Action::place(p(8), B),
        Action::place(p(1), W),
        Action::place(p(9), B),
        Action::place(p(2), W),
        Action::remove(p(9), W),
        Action::place(p(9), B),
    ];
    for action in script {
        assert!(game.execute(action));
    }

    // Six turns: the removal rides on the turn that formed the mill.
    assert_eq!(game.history().len(), 6);
    let mut undone = 0;
    while game.execute(Action::Undo) {
        undone += 1;
    }
    assert_eq!(undone, 6);
    assert!(game.board().iter().all(|(_, piece)| piece.is_none()));
    assert_eq!(game.player(W).unplaced, 9);
    assert_eq!(game.player(B).unplaced, 9);
    assert_eq!(game.current_player(), W);
}

/// Undo restores the removal flag on the turn before.
#[test]
fn test_undo_back_into_removal() {
    let mut game = GameController::new();
    for action in [
        Action::place(p(0), W),
        Action::place(p(8), B),
        Action::place(p(1), W),
        Action::place(p(9), B),
        Action::place(p(2), W),
        Action::remove(p(8), W),
        Action::place(p(20), B),
    ] {
        assert!(game.execute(action));
    }

    // Undoing Black's placement lands on the state after White's whole turn.
    assert!(game.execute(Action::Undo));
    assert_eq!(game.current_player(), B);
    assert!(!game.is_removal_pending());
    assert_eq!(game.occupant(p(8)), None);

    // The next undo takes back the mill and its removal together.
    assert!(game.execute(Action::Undo));
    assert_eq!(game.current_player(), W);
    assert_eq!(game.occupant(p(8)), Some(B));
    assert_eq!(game.occupant(p(2)), None);
}

/// A clone keeps its own history.
#[test]
fn test_clone_is_independent() {
    let mut game = GameController::new();
    assert!(game.execute(Action::place(p(0), W)));

    let mut branch = game.clone();
    assert!(branch.execute(Action::place(p(1), B)));
    assert!(branch.execute(Action::Undo));
    assert!(branch.execute(Action::Undo));

    assert_eq!(game.history().len(), 1);
    assert_eq!(game.occupant(p(0)), Some(W));
    assert!(branch.history().is_empty());
}
