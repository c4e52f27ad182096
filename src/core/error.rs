//! Error types.
//!
//! `ActionError` covers rejected actions. None of them are fatal: the
//! controller checks everything before it mutates, so a rejected action leaves
//! the game exactly as it was. `GameError` covers construction-time failures
//! (bad configuration, unusable snapshot).

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use super::color::PieceColor;
use crate::board::PositionId;

/// Why an otherwise well-formed action is not allowed right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Violation {
    /// Another player is to move.
    #[display("it is not their turn")]
    NotYourTurn,
    /// The game has been won.
    #[display("the game is over")]
    GameOver,
    /// A mill was formed and a removal must come first.
    #[display("a removal is pending")]
    RemovalPending,
    /// Removal attempted without forming a mill.
    #[display("no removal is pending")]
    NoRemovalPending,
    /// Placement attempted with an empty hand.
    #[display("no pieces left to place")]
    NoPiecesInHand,
    /// Movement attempted before placement is over.
    #[display("placement is not finished")]
    PlacementUnfinished,
}

/// A declined action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error, Serialize, Deserialize)]
pub enum ActionError {
    /// Wrong phase, turn, or actor.
    #[display("{actor} cannot act: {reason}")]
    IllegalAction {
        actor: PieceColor,
        #[error(not(source))]
        reason: Violation,
    },

    /// Target position is occupied or off the board.
    #[display("cannot place at position {at}")]
    IllegalPlacement {
        #[error(not(source))]
        at: PositionId,
    },

    /// Source not owned, target occupied, or target out of reach.
    #[display("cannot move from {from} to {to}")]
    IllegalMove { from: PositionId, to: PositionId },

    /// Target is not an opponent piece, or is protected by a mill.
    #[display("cannot remove piece at position {at}")]
    IllegalRemoval {
        #[error(not(source))]
        at: PositionId,
    },

    /// Undo with nothing to undo. Benign: `execute` reports it as not applied.
    #[display("nothing to undo")]
    EmptyHistory,
}

/// Failure to build a game.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Configuration values are inconsistent.
    #[display("invalid configuration: {reason}")]
    InvalidConfig {
        #[error(not(source))]
        reason: String,
    },

    /// A snapshot cannot be restored.
    #[display("invalid snapshot: {reason}")]
    InvalidSnapshot {
        #[error(not(source))]
        reason: String,
    },
}

impl GameError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        GameError::InvalidConfig {
            reason: reason.into(),
        }
    }

    pub(crate) fn snapshot(reason: impl Into<String>) -> Self {
        GameError::InvalidSnapshot {
            reason: reason.into(),
        }
    }
}
