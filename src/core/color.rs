//! Piece colours and per-colour data storage.
//!
//! ## PieceColor
//!
//! The two sides of the game. There is no "empty" colour: an empty position
//! is `Option::<PieceColor>::None`.
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexed by `PieceColor`, used for anything the game
//! tracks per side (player counters, resume hints).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    /// Both colours, in turn order starting from White.
    pub const ALL: [PieceColor; 2] = [PieceColor::White, PieceColor::Black];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Slot index (White = 0, Black = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PieceColor::White => 0,
            PieceColor::Black => 1,
        }
    }

    /// Single-character symbol used in board diagrams.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            PieceColor::White => 'W',
            PieceColor::Black => 'B',
        }
    }
}

impl std::fmt::Display for PieceColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceColor::White => write!(f, "White"),
            PieceColor::Black => write!(f, "Black"),
        }
    }
}

/// Per-colour data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use morris_engine::core::{ColorMap, PieceColor};
///
/// let mut counts: ColorMap<u8> = ColorMap::with_value(9);
/// counts[PieceColor::Black] -= 1;
///
/// assert_eq!(counts[PieceColor::White], 9);
/// assert_eq!(counts[PieceColor::Black], 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    pub white: T,
    pub black: T,
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PieceColor) -> T) -> Self {
        Self {
            white: factory(PieceColor::White),
            black: factory(PieceColor::Black),
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            white: value.clone(),
            black: value,
        }
    }

    /// Get a reference to a colour's entry.
    #[must_use]
    pub fn get(&self, color: PieceColor) -> &T {
        match color {
            PieceColor::White => &self.white,
            PieceColor::Black => &self.black,
        }
    }

    /// Get a mutable reference to a colour's entry.
    pub fn get_mut(&mut self, color: PieceColor) -> &mut T {
        match color {
            PieceColor::White => &mut self.white,
            PieceColor::Black => &mut self.black,
        }
    }

    /// Iterate over (PieceColor, &T) pairs, White first.
    pub fn iter(&self) -> impl Iterator<Item = (PieceColor, &T)> {
        [(PieceColor::White, &self.white), (PieceColor::Black, &self.black)].into_iter()
    }
}

impl<T> Index<PieceColor> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: PieceColor) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<PieceColor> for ColorMap<T> {
    fn index_mut(&mut self, color: PieceColor) -> &mut Self::Output {
        self.get_mut(color)
    }
}
