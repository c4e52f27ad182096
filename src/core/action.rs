//! Action representation.
//!
//! An `Action` is a single intended mutation submitted by the presentation
//! layer. The set is closed, so the controller dispatches with an exhaustive
//! `match`. Whether a `Remove` must follow a `Place`/`Move` is decided by the
//! controller from mill detection, not encoded in the action.

use serde::{Deserialize, Serialize};

use super::color::PieceColor;
use crate::board::PositionId;

/// A requested game action.
///
/// ## Example
///
/// ```
/// use morris_engine::board::PositionId;
/// use morris_engine::core::{Action, PieceColor};
///
/// let place = Action::place(PositionId::new(0), PieceColor::White);
/// assert_eq!(place.actor(), Some(PieceColor::White));
/// assert_eq!(Action::Undo.actor(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Action {
    /// Put a piece from hand onto an empty position.
    Place {
        destination: PositionId,
        actor: PieceColor,
    },

    /// Slide (or fly) an own piece to an empty position.
    Move {
        source: PositionId,
        destination: PositionId,
        actor: PieceColor,
    },

    /// Take an opponent piece off the board after forming a mill.
    Remove {
        target: PositionId,
        actor: PieceColor,
    },

    /// Reverse the most recent history entry.
    Undo,
}

impl Action {
    /// Create a placement.
    #[must_use]
    pub const fn place(destination: PositionId, actor: PieceColor) -> Self {
        Action::Place { destination, actor }
    }

    /// Create a move.
    #[must_use]
    pub const fn movement(source: PositionId, destination: PositionId, actor: PieceColor) -> Self {
        Action::Move {
            source,
            destination,
            actor,
        }
    }

    /// Create a removal.
    #[must_use]
    pub const fn remove(target: PositionId, actor: PieceColor) -> Self {
        Action::Remove { target, actor }
    }

    /// The side performing the action, if any.
    #[must_use]
    pub const fn actor(&self) -> Option<PieceColor> {
        match self {
            Action::Place { actor, .. }
            | Action::Move { actor, .. }
            | Action::Remove { actor, .. } => {
                Some(*actor)
            }
            Action::Undo => None,
        }
    }

    /// Short verb used in trace output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Action::Place { .. } => "place",
            Action::Move { .. } => "move",
            Action::Remove { .. } => "remove",
            Action::Undo => "undo",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place { destination, actor } => write!(f, "{actor} places at {destination}"),
            Action::Move {
                source,
                destination,
                actor,
            } => write!(f, "{actor} moves {source} -> {destination}"),
            Action::Remove { target, actor } => write!(f, "{actor} removes {target}"),
            Action::Undo => write!(f, "undo"),
        }
    }
}
