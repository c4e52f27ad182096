//! Property tests over random playouts.
//!
//! Each playout picks from `legal_actions()` with the occasional undo mixed
//! in, and checks the board and counter invariants after every step.

use morris_engine::board::{BoardState, PositionId, POSITION_COUNT};
use morris_engine::core::{Action, GameConfig, GameStatus, MovementGate, PieceColor};
use morris_engine::game::GameController;
use proptest::prelude::*;

/// Board and counter invariants that hold after every step.
fn check_invariants(game: &GameController) -> Result<(), TestCaseError> {
    let pieces = game.config().pieces_per_player;
    for color in PieceColor::ALL {
        let player = game.player(color);
        prop_assert_eq!(game.board().count(color), usize::from(player.on_board));
        prop_assert!(player.remaining() <= pieces);
    }
    let occupied = game.board().count(PieceColor::White) + game.board().count(PieceColor::Black);
    prop_assert!(occupied <= POSITION_COUNT);
    if game.is_removal_pending() {
        prop_assert!(!game.legal_actions().is_empty());
    }
    Ok(())
}

/// Play a random game, stopping early once the side to move has nothing legal.
fn playout(game: &mut GameController, steps: &[(u16, u8)]) -> Result<(), TestCaseError> {
    for &(pick, roll) in steps {
        if roll == 0 && !game.history().is_empty() {
            prop_assert!(game.execute(Action::Undo));
        } else {
            let legal = game.legal_actions();
            if legal.is_empty() {
                break;
            }
            let action = legal[usize::from(pick) % legal.len()];
            let before = *game.players();
            prop_assert!(game.execute(action), "legal action {} declined", action);

            for color in PieceColor::ALL {
                prop_assert!(game.player(color).remaining() <= before[color].remaining());
            }
        }
        check_invariants(game)?;
    }
    Ok(())
}

fn steps() -> impl Strategy<Value = Vec<(u16, u8)>> {
    prop::collection::vec((any::<u16>(), 0u8..8), 1..160)
}

proptest! {
    /// Invariants hold through any legal playout.
    #[test]
    fn test_random_playout_invariants(steps in steps()) {
        let mut game = GameController::new();
        playout(&mut game, &steps)?;
    }

    /// Undoing every applied turn returns to the opening position.
    #[test]
    fn test_full_undo_round_trip(steps in steps()) {
        let mut game = GameController::new();
        playout(&mut game, &steps)?;

        while game.execute(Action::Undo) {}

        let fresh = GameController::new();
        prop_assert_eq!(game.board(), &BoardState::new());
        prop_assert_eq!(game.players(), fresh.players());
        prop_assert_eq!(game.current_player(), PieceColor::White);
        prop_assert_eq!(game.status(), GameStatus::InProgress);
    }

    /// A declined action changes nothing, however often it is retried.
    #[test]
    fn test_declined_actions_change_nothing(
        steps in steps(),
        target in 0u8..30,
        source in 0u8..30,
        kind in 0u8..3,
        white in any::<bool>(),
    ) {
        let mut game = GameController::new();
        playout(&mut game, &steps)?;

        let actor = if white { PieceColor::White } else { PieceColor::Black };
        let (target, source) = (PositionId::new(target), PositionId::new(source));
        let action = match kind {
            0 => Action::place(target, actor),
            1 => Action::movement(source, target, actor),
            _ => Action::remove(target, actor),
        };

        let before = game.snapshot();
        let status = game.status();
        if game.try_execute(action).is_err() {
            for _ in 0..2 {
                prop_assert!(!game.execute(action));
                prop_assert_eq!(&game.snapshot(), &before);
                prop_assert_eq!(game.status(), status);
            }
        }
    }

    /// Random playouts under the global gate and with flying off keep the same invariants.
    #[test]
    fn test_variant_rules_invariants(steps in steps(), flying in any::<bool>()) {
        let config = GameConfig::default()
            .with_movement_gate(MovementGate::Global)
            .with_flying(flying);
        let mut game = GameController::with_config(config).unwrap();
        playout(&mut game, &steps)?;
    }
}
