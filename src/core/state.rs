//! Game state at the persistence boundary.
//!
//! `GameState` is the shape an external serializer reads and writes. It is
//! never used for play: the controller exports it with `snapshot()` and
//! rebuilds itself from it with `restore()`.
//!
//! ## Shape
//!
//! ```text
//! {
//!   "positions": [{ "id": 0, "piece": "White" }, { "id": 1, "piece": null }, ...],
//!   "actions":   [{ "kind": "Place", "destination": 0, "actor": "White" }, ...],
//!   "to_move":   "Black",                   // optional
//!   "unplaced":  { "white": 8, "black": 9 } // optional
//! }
//! ```
//!
//! The action list is an audit trail; restoring never replays it. The two
//! optional fields are resume hints. When missing they are derived from the
//! action list.

use serde::{Deserialize, Serialize};

use super::action::Action;
use super::color::{ColorMap, PieceColor};
use crate::board::{BoardState, PositionId};

/// One position's occupant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub id: PositionId,
    pub piece: Option<PieceColor>,
}

/// Exported game: board occupancy plus the applied action list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Occupancy, one entry per position. Missing ids read as empty.
    pub positions: Vec<PositionRecord>,

    /// Applied actions, oldest first.
    pub actions: Vec<Action>,

    /// Side to move.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_move: Option<PieceColor>,

    /// Pieces still in hand per side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unplaced: Option<ColorMap<u8>>,
}

impl GameState {
    /// Build from a board and an action list, without resume hints.
    #[must_use]
    pub fn from_board(board: &BoardState, actions: Vec<Action>) -> Self {
        Self {
            positions: board
                .iter()
                .map(|(id, piece)| PositionRecord { id, piece })
                .collect(),
            actions,
            to_move: None,
            unplaced: None,
        }
    }

    /// Set the side to move.
    #[must_use]
    pub fn with_to_move(mut self, color: PieceColor) -> Self {
        self.to_move = Some(color);
        self
    }

    /// Set the pieces in hand.
    #[must_use]
    pub fn with_unplaced(mut self, unplaced: ColorMap<u8>) -> Self {
        self.unplaced = Some(unplaced);
        self
    }

    /// Number of placements by `color` in the action list.
    #[must_use]
    pub fn placements_by(&self, color: PieceColor) -> usize {
        self.actions
            .iter()
            .filter(|action| matches!(action, Action::Place { actor, .. } if *actor == color))
            .count()
    }

    /// Opponent of the last side that acted, if any action names an actor.
    #[must_use]
    pub fn next_after_last_actor(&self) -> Option<PieceColor> {
        self.actions
            .iter()
            .rev()
            .find_map(Action::actor)
            .map(PieceColor::opponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_board() {
        let mut board = BoardState::new();
        board.place(PositionId(4), PieceColor::Black);

        let state = GameState::from_board(&board, Vec::new());
        assert_eq!(state.positions.len(), 24);
        assert_eq!(
            state.positions[4],
            PositionRecord {
                id: PositionId(4),
                piece: Some(PieceColor::Black)
            }
        );
        assert_eq!(state.positions[5].piece, None);
    }

    #[test]
    fn test_derived_hints() {
        let state = GameState {
            actions: vec![
                Action::place(PositionId(0), PieceColor::White),
                Action::place(PositionId(1), PieceColor::Black),
                Action::place(PositionId(2), PieceColor::White),
            ],
            ..GameState::default()
        };

        assert_eq!(state.placements_by(PieceColor::White), 2);
        assert_eq!(state.placements_by(PieceColor::Black), 1);
        assert_eq!(state.next_after_last_actor(), Some(PieceColor::Black));
        assert_eq!(GameState::default().next_after_last_actor(), None);
    }

    #[test]
    fn test_serialization_shape() {
        let state = GameState {
            positions: vec![PositionRecord {
                id: PositionId(0),
                piece: Some(PieceColor::White),
            }],
            actions: vec![Action::place(PositionId(0), PieceColor::White)],
            to_move: None,
            unplaced: None,
        };

        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"positions":[{"id":0,"piece":"White"}],"#,
                r#""actions":[{"kind":"Place","destination":0,"actor":"White"}]}"#
            )
        );

        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_deserialize_with_hints() {
        let json = r#"{
            "positions": [],
            "actions": [],
            "to_move": "Black",
            "unplaced": { "white": 3, "black": 4 }
        }"#;
        let state: GameState = serde_json::from_str(json).unwrap();

        assert_eq!(state.to_move, Some(PieceColor::Black));
        assert_eq!(state.unplaced, Some(ColorMap { white: 3, black: 4 }));
    }
}
