//! Static board topology.
//!
//! Three concentric squares ("rings") of eight positions each. Within a ring,
//! positions are numbered clockwise from the top-left corner, so even indices
//! are corners and odd indices are edge midpoints:
//!
//! ```text
//!  0 ----------- 1 ----------- 2
//!  |             |             |
//!  |   8 ------- 9 ------ 10   |
//!  |   |         |         |   |
//!  |   |  16 -- 17 -- 18   |   |
//!  |   |   |          |    |   |
//!  7 -15 -23         19 - 11 - 3
//!  |   |   |          |    |   |
//!  |   |  22 -- 21 -- 20   |   |
//!  |   |         |         |   |
//!  |  14 ------ 13 ------ 12   |
//!  |             |             |
//!  6 ----------- 5 ----------- 4
//! ```
//!
//! Midpoints link radially to the matching midpoint of the neighbouring ring;
//! corners do not. Radial links do not wrap from the inner ring to the outer.
//!
//! Positions live in an arena indexed by `PositionId`; adjacency is stored as
//! id lists, never as references between positions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::sync::OnceLock;

/// Number of rings.
pub const RING_COUNT: usize = 3;

/// Positions per ring.
pub const RING_SIZE: usize = 8;

/// Total number of positions.
pub const POSITION_COUNT: usize = RING_COUNT * RING_SIZE;

/// Side length of the conventional layout grid.
pub const GRID_SIZE: u8 = 7;

/// Position identifier in `0..24`.
///
/// The constructor does not range-check, because ids also arrive from
/// deserialized actions. Use `is_valid` or `PositionGraph::contains`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PositionId(pub u8);

impl PositionId {
    /// Create a position id.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Create from ring (0 = outer) and clockwise index within the ring.
    ///
    /// Expects `ring < RING_COUNT` and `index < RING_SIZE`. Other inputs are
    /// not checked, but never overflow.
    #[must_use]
    pub const fn from_ring(ring: u8, index: u8) -> Self {
        Self(ring.saturating_mul(RING_SIZE as u8).saturating_add(index))
    }

    /// Raw index into position arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Ring number (0 = outer).
    #[must_use]
    pub const fn ring(self) -> u8 {
        self.0 / RING_SIZE as u8
    }

    /// Clockwise index within the ring.
    #[must_use]
    pub const fn ring_index(self) -> u8 {
        self.0 % RING_SIZE as u8
    }

    /// Is this an edge midpoint (a position with radial links)?
    #[must_use]
    pub const fn is_midpoint(self) -> bool {
        self.ring_index() % 2 == 1
    }

    /// Is this id on the board?
    #[must_use]
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < POSITION_COUNT
    }

    /// Iterate over all 24 positions.
    pub fn all() -> impl Iterator<Item = PositionId> {
        (0..POSITION_COUNT as u8).map(PositionId)
    }

    /// Column and row on the 7x7 layout grid. `None` for ids off the board.
    ///
    /// ```
    /// use morris_engine::board::PositionId;
    ///
    /// assert_eq!(PositionId::new(0).grid(), Some((0, 0)));
    /// assert_eq!(PositionId::new(3).grid(), Some((6, 3)));
    /// assert_eq!(PositionId::new(19).grid(), Some((4, 3)));
    /// assert_eq!(PositionId::new(200).grid(), None);
    /// ```
    #[must_use]
    pub const fn grid(self) -> Option<(u8, u8)> {
        if !self.is_valid() {
            return None;
        }
        let offset = self.ring();
        let span = GRID_SIZE - 1 - 2 * offset;
        let mid = span / 2;
        let (col, row) = match self.ring_index() {
            0 => (0, 0),
            1 => (mid, 0),
            2 => (span, 0),
            3 => (span, mid),
            4 => (span, span),
            5 => (mid, span),
            6 => (0, span),
            _ => (0, mid),
        };
        Some((col + offset, row + offset))
    }

    /// Position at a layout grid cell, if any.
    #[must_use]
    pub fn from_grid(col: u8, row: u8) -> Option<Self> {
        Self::all().find(|id| id.grid() == Some((col, row)))
    }
}

impl std::fmt::Display for PositionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Link direction as seen on the layout diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards the outer ring.
    Up,
    /// Towards the inner ring.
    Down,
    /// Counter-clockwise within the ring.
    Left,
    /// Clockwise within the ring.
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Three positions in a straight line. Filled by one colour, they form a mill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MillLine(pub [PositionId; 3]);

impl MillLine {
    /// The three positions, in line order.
    #[must_use]
    pub const fn positions(&self) -> &[PositionId; 3] {
        &self.0
    }

    /// Does this line pass through `id`?
    #[must_use]
    pub fn contains(&self, id: PositionId) -> bool {
        self.0.contains(&id)
    }
}

#[derive(Clone, Debug)]
struct Node {
    links: [Option<PositionId>; 4],
    neighbors: SmallVec<[PositionId; 4]>,
    mills: SmallVec<[MillLine; 2]>,
}

/// Position arena with adjacency and mill-line membership.
///
/// Immutable after construction.
#[derive(Clone, Debug)]
pub struct PositionGraph {
    nodes: Vec<Node>,
    lines: Vec<MillLine>,
}

impl PositionGraph {
    /// Build the standard board.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes: Vec<Node> = PositionId::all()
            .map(|id| {
                let links = Direction::ALL.map(|dir| Self::link(id, dir));
                Node {
                    links,
                    neighbors: links.iter().flatten().copied().collect(),
                    mills: SmallVec::new(),
                }
            })
            .collect();

        // Ring lines run left-self-right through every midpoint; spoke lines
        // run up-self-down through the middle ring's midpoints.
        let mut lines = Vec::with_capacity(16);
        for id in PositionId::all().filter(|id| id.is_midpoint()) {
            let node = &nodes[id.index()];
            let pairs = [(Direction::Left, Direction::Right), (Direction::Up, Direction::Down)];
            for (a, b) in pairs {
                let ends = (node.links[a as usize], node.links[b as usize]);
                if let (Some(first), Some(last)) = ends {
                    lines.push(MillLine([first, id, last]));
                }
            }
        }

        for line in &lines {
            for id in line.positions() {
                nodes[id.index()].mills.push(*line);
            }
        }

        Self { nodes, lines }
    }

    /// Shared instance of the standard board, built on first use.
    pub fn standard() -> &'static PositionGraph {
        static GRAPH: OnceLock<PositionGraph> = OnceLock::new();
        GRAPH.get_or_init(PositionGraph::new)
    }

    fn link(id: PositionId, dir: Direction) -> Option<PositionId> {
        let ring = id.ring();
        let index = id.ring_index();
        let size = RING_SIZE as u8;
        match dir {
            Direction::Left => Some(PositionId::from_ring(ring, (index + size - 1) % size)),
            Direction::Right => Some(PositionId::from_ring(ring, (index + 1) % size)),
            Direction::Up if id.is_midpoint() && ring > 0 => {
                Some(PositionId::from_ring(ring - 1, index))
            }
            Direction::Down if id.is_midpoint() && usize::from(ring) + 1 < RING_COUNT => {
                Some(PositionId::from_ring(ring + 1, index))
            }
            Direction::Up | Direction::Down => None,
        }
    }

    /// Is `id` a position of this graph?
    #[must_use]
    pub fn contains(&self, id: PositionId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a built graph.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over every position id.
    pub fn positions(&self) -> impl Iterator<Item = PositionId> {
        (0..self.nodes.len() as u8).map(PositionId)
    }

    /// Adjacent positions (2 to 4). Empty for an id not on the board.
    #[must_use]
    pub fn neighbors(&self, id: PositionId) -> &[PositionId] {
        self.nodes.get(id.index()).map_or(&[], |node| node.neighbors.as_slice())
    }

    /// Neighbour in a given direction.
    #[must_use]
    pub fn neighbor(&self, id: PositionId, dir: Direction) -> Option<PositionId> {
        self.nodes.get(id.index()).and_then(|node| node.links[dir as usize])
    }

    /// Are `a` and `b` directly linked?
    #[must_use]
    pub fn are_adjacent(&self, a: PositionId, b: PositionId) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Mill lines passing through `id`.
    #[must_use]
    pub fn mill_lines_containing(&self, id: PositionId) -> &[MillLine] {
        self.nodes.get(id.index()).map_or(&[], |node| node.mills.as_slice())
    }

    /// Every mill line on the board.
    #[must_use]
    pub fn mill_lines(&self) -> &[MillLine] {
        &self.lines
    }
}

impl Default for PositionGraph {
    fn default() -> Self {
        Self::new()
    }
}
