//! Game configuration.
//!
//! The standard game needs no configuration at all: `GameConfig::default()`
//! is Nine Men's Morris with nine pieces a side and flying at three. The
//! knobs exist for the common house-rule variants.

use serde::{Deserialize, Serialize};

use super::color::PieceColor;
use super::error::GameError;
use crate::board::POSITION_COUNT;

/// When a side may start moving pieces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementGate {
    /// A side may move as soon as its own hand is empty.
    #[default]
    PerPlayer,
    /// Nobody moves until both hands are empty.
    Global,
}

/// Rule parameters for one game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Pieces each side starts with in hand.
    pub pieces_per_player: u8,

    /// On-board count at which a side may fly.
    pub flying_threshold: u8,

    /// A side with fewer pieces than this on the board (after placement) loses.
    pub losing_threshold: u8,

    /// Whether flying is allowed at all.
    pub flying_enabled: bool,

    /// Movement gating policy.
    pub movement_gate: MovementGate,

    /// Side that places first.
    pub first_player: PieceColor,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pieces_per_player: 9,
            flying_threshold: 3,
            losing_threshold: 3,
            flying_enabled: true,
            movement_gate: MovementGate::PerPlayer,
            first_player: PieceColor::White,
        }
    }
}

impl GameConfig {
    /// Set the number of pieces per side.
    #[must_use]
    pub fn with_pieces_per_player(mut self, pieces: u8) -> Self {
        self.pieces_per_player = pieces;
        self
    }

    /// Set the flying threshold.
    #[must_use]
    pub fn with_flying_threshold(mut self, threshold: u8) -> Self {
        self.flying_threshold = threshold;
        self
    }

    /// Set the losing threshold.
    #[must_use]
    pub fn with_losing_threshold(mut self, threshold: u8) -> Self {
        self.losing_threshold = threshold;
        self
    }

    /// Enable or disable flying.
    #[must_use]
    pub fn with_flying(mut self, enabled: bool) -> Self {
        self.flying_enabled = enabled;
        self
    }

    /// Set the movement gating policy.
    #[must_use]
    pub fn with_movement_gate(mut self, gate: MovementGate) -> Self {
        self.movement_gate = gate;
        self
    }

    /// Set the side that places first.
    #[must_use]
    pub fn with_first_player(mut self, color: PieceColor) -> Self {
        self.first_player = color;
        self
    }

    /// Check the parameters are mutually consistent.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.losing_threshold == 0 {
            return Err(GameError::config("losing_threshold must be at least 1"));
        }
        if self.pieces_per_player < self.losing_threshold {
            return Err(GameError::config(format!(
                "pieces_per_player ({}) is below losing_threshold ({})",
                self.pieces_per_player, self.losing_threshold
            )));
        }
        if usize::from(self.pieces_per_player) * 2 > POSITION_COUNT {
            return Err(GameError::config(format!(
                "{} pieces per side do not fit on {} positions",
                self.pieces_per_player, POSITION_COUNT
            )));
        }
        if self.flying_enabled && self.flying_threshold < self.losing_threshold {
            return Err(GameError::config(format!(
                "flying_threshold ({}) is below losing_threshold ({})",
                self.flying_threshold, self.losing_threshold
            )));
        }
        Ok(())
    }
}
