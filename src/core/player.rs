//! Per-side piece accounting.
//!
//! A `Player` only tracks counters. Which positions its pieces occupy is the
//! board's business; the controller keeps the two in step.

use serde::{Deserialize, Serialize};

use super::color::PieceColor;

/// Piece counters for one side.
///
/// `unplaced + on_board` starts at the configured piece count and can only
/// go down (a removal takes a piece off the board for good).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// The side this player plays.
    pub color: PieceColor,

    /// Pieces still in hand.
    pub unplaced: u8,

    /// Pieces currently on the board.
    pub on_board: u8,
}

impl Player {
    /// Create a player with `pieces` in hand and none on the board.
    #[must_use]
    pub const fn new(color: PieceColor, pieces: u8) -> Self {
        Self {
            color,
            unplaced: pieces,
            on_board: 0,
        }
    }

    /// Pieces still in play (in hand or on the board).
    #[must_use]
    pub const fn remaining(&self) -> u8 {
        self.unplaced + self.on_board
    }

    /// Has this player put every piece on the board?
    #[must_use]
    pub const fn placement_done(&self) -> bool {
        self.unplaced == 0
    }

    /// Has this player lost?
    ///
    /// Only once placement is over: a player still holding pieces can rebuild.
    #[must_use]
    pub const fn has_lost(&self, losing_threshold: u8) -> bool {
        self.placement_done() && self.on_board < losing_threshold
    }

    /// Move one piece from hand to board.
    pub(crate) fn place_from_hand(&mut self) {
        debug_assert!(self.unplaced > 0, "{} has nothing left to place", self.color);
        self.unplaced -= 1;
        self.on_board += 1;
    }

    /// Take one piece off the board permanently.
    pub(crate) fn lose_piece(&mut self) {
        debug_assert!(self.on_board > 0, "{} has nothing on the board", self.color);
        self.on_board -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player() {
        let player = Player::new(PieceColor::White, 9);

        assert_eq!(player.unplaced, 9);
        assert_eq!(player.on_board, 0);
        assert_eq!(player.remaining(), 9);
        assert!(!player.placement_done());
    }

    #[test]
    fn test_place_keeps_total() {
        let mut player = Player::new(PieceColor::Black, 9);
        player.place_from_hand();
        player.place_from_hand();

        assert_eq!(player.unplaced, 7);
        assert_eq!(player.on_board, 2);
        assert_eq!(player.remaining(), 9);
    }

    #[test]
    fn test_lose_piece_reduces_total() {
        let mut player = Player::new(PieceColor::Black, 3);
        player.place_from_hand();
        player.lose_piece();

        assert_eq!(player.on_board, 0);
        assert_eq!(player.remaining(), 2);
    }

    #[test]
    fn test_has_lost_only_after_placement() {
        let mut player = Player::new(PieceColor::White, 3);
        player.place_from_hand();
        player.place_from_hand();

        // Two on board but one still in hand.
        assert!(!player.has_lost(3));

        player.place_from_hand();
        assert!(!player.has_lost(3));

        player.lose_piece();
        assert!(player.has_lost(3));
    }
}
