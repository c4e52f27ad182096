//! Phase and game status.

use serde::{Deserialize, Serialize};

use super::color::PieceColor;

/// Coarse stage of play for one side.
///
/// `Flying` is never a global stage: it is computed per player at move time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Pieces are still being put on the board.
    Placing,
    /// Pieces slide along board lines.
    Moving,
    /// A reduced side may jump to any empty position.
    Flying,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Placing => write!(f, "placing"),
            Phase::Moving => write!(f, "moving"),
            Phase::Flying => write!(f, "flying"),
        }
    }
}

/// Result of the last applied action, as seen by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Play continues with the current player.
    InProgress,
    /// The current player formed a mill and must remove an opponent piece.
    Removing,
    /// The game is over.
    Won(PieceColor),
    /// The player to move has no legal action.
    ///
    /// Reported, not enforced: the surrounding application decides whether
    /// the session ends.
    Drawn,
}

impl GameStatus {
    /// Is this a terminal win?
    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self, GameStatus::Won(_))
    }

    /// The winner, if any.
    #[must_use]
    pub const fn winner(&self) -> Option<PieceColor> {
        match self {
            GameStatus::Won(color) => Some(*color),
            _ => None,
        }
    }
}
