//! Board occupancy.
//!
//! `BoardState` is a plain occupancy map over the 24 positions. It enforces
//! nothing: legality lives in `RuleEngine`, and the controller only mutates
//! the board after the engine approves. Out-of-range ids read as empty and
//! writes to them are ignored.

use serde::{Deserialize, Serialize};

use super::graph::{PositionId, GRID_SIZE, POSITION_COUNT};
use crate::core::PieceColor;

/// Which positions hold a piece of which colour.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    cells: [Option<PieceColor>; POSITION_COUNT],
}

impl BoardState {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Colour of the piece at `id`, if any.
    #[must_use]
    pub fn occupant(&self, id: PositionId) -> Option<PieceColor> {
        self.cells.get(id.index()).copied().flatten()
    }

    /// Is `id` free?
    #[must_use]
    pub fn is_empty(&self, id: PositionId) -> bool {
        self.occupant(id).is_none()
    }

    /// Put a piece of `color` at `id`, replacing whatever was there.
    pub fn place(&mut self, id: PositionId, color: PieceColor) {
        if let Some(cell) = self.cells.get_mut(id.index()) {
            *cell = Some(color);
        }
    }

    /// Clear `id`, returning what was there.
    pub fn remove(&mut self, id: PositionId) -> Option<PieceColor> {
        self.cells.get_mut(id.index()).and_then(Option::take)
    }

    /// Relocate the piece at `from` to `to`.
    ///
    /// Returns the moved colour, or `None` (board unchanged) if `from` was empty.
    pub fn move_piece(&mut self, from: PositionId, to: PositionId) -> Option<PieceColor> {
        let color = self.remove(from)?;
        self.place(to, color);
        Some(color)
    }

    /// Number of pieces of `color` on the board.
    #[must_use]
    pub fn count(&self, color: PieceColor) -> usize {
        self.cells.iter().filter(|cell| **cell == Some(color)).count()
    }

    /// Positions holding a piece of `color`.
    pub fn positions_of(&self, color: PieceColor) -> impl Iterator<Item = PositionId> + '_ {
        PositionId::all().filter(move |id| self.occupant(*id) == Some(color))
    }

    /// Positions holding no piece.
    pub fn empty_positions(&self) -> impl Iterator<Item = PositionId> + '_ {
        PositionId::all().filter(move |id| self.is_empty(*id))
    }

    /// Iterate over (PositionId, occupant) for every position.
    pub fn iter(&self) -> impl Iterator<Item = (PositionId, Option<PieceColor>)> + '_ {
        PositionId::all().zip(self.cells.iter().copied())
    }

    /// Remove every piece.
    pub fn clear(&mut self) {
        self.cells = [None; POSITION_COUNT];
    }
}

impl std::fmt::Display for BoardState {
    /// Draws the board on the 7x7 layout grid: `W`/`B` for pieces, `.` for
    /// empty positions, blank for cells with no position.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut grid = [[' '; GRID_SIZE as usize]; GRID_SIZE as usize];
        for (id, occupant) in self.iter() {
            if let Some((col, row)) = id.grid() {
                grid[row as usize][col as usize] = occupant.map_or('.', PieceColor::symbol);
            }
        }
        for (i, row) in grid.iter().enumerate() {
            let line: String = row.iter().collect();
            if i + 1 < grid.len() {
                writeln!(f, "{}", line.trim_end())?;
            } else {
                write!(f, "{}", line.trim_end())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = BoardState::new();
        assert_eq!(board.empty_positions().count(), 24);
        assert_eq!(board.count(PieceColor::White), 0);
        assert!(board.is_empty(PositionId(5)));
    }

    #[test]
    fn test_place_and_remove() {
        let mut board = BoardState::new();
        board.place(PositionId(3), PieceColor::Black);

        assert_eq!(board.occupant(PositionId(3)), Some(PieceColor::Black));
        assert_eq!(board.count(PieceColor::Black), 1);

        assert_eq!(board.remove(PositionId(3)), Some(PieceColor::Black));
        assert_eq!(board.remove(PositionId(3)), None);
        assert!(board.is_empty(PositionId(3)));
    }

    #[test]
    fn test_move_piece() {
        let mut board = BoardState::new();
        board.place(PositionId(0), PieceColor::White);

        assert_eq!(board.move_piece(PositionId(0), PositionId(1)), Some(PieceColor::White));
        assert!(board.is_empty(PositionId(0)));
        assert_eq!(board.occupant(PositionId(1)), Some(PieceColor::White));

        // Moving from an empty position changes nothing.
        assert_eq!(board.move_piece(PositionId(0), PositionId(2)), None);
        assert!(board.is_empty(PositionId(2)));
    }

    #[test]
    fn test_out_of_range_is_inert() {
        let mut board = BoardState::new();
        board.place(PositionId(40), PieceColor::White);

        assert_eq!(board.occupant(PositionId(40)), None);
        assert_eq!(board.count(PieceColor::White), 0);
        assert_eq!(board.remove(PositionId(40)), None);
    }

    #[test]
    fn test_positions_of() {
        let mut board = BoardState::new();
        board.place(PositionId(4), PieceColor::White);
        board.place(PositionId(17), PieceColor::White);
        board.place(PositionId(9), PieceColor::Black);

        let white: Vec<_> = board.positions_of(PieceColor::White).collect();
        assert_eq!(white, vec![PositionId(4), PositionId(17)]);
        assert_eq!(board.empty_positions().count(), 21);

        board.clear();
        assert_eq!(board, BoardState::new());
    }

    #[test]
    fn test_display() {
        let mut board = BoardState::new();
        board.place(PositionId(0), PieceColor::White);
        board.place(PositionId(19), PieceColor::Black);

        let expected = "\
W  .  .
 . . .
  ...
... B..
  ...
 . . .
.  .  .";
        assert_eq!(board.to_string(), expected);
    }
}
