//! Board topology and occupancy.
//!
//! ## Key Types
//!
//! - `PositionGraph`: fixed 24-position graph with adjacency and mill lines
//! - `PositionId`: position identifier in `0..24`
//! - `MillLine`: three positions forming a straight line
//! - `BoardState`: which positions hold which colour

pub mod graph;
pub mod occupancy;

pub use graph::{
    Direction, MillLine, PositionGraph, PositionId, GRID_SIZE, POSITION_COUNT, RING_COUNT,
    RING_SIZE,
};
pub use occupancy::BoardState;
