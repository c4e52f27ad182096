//! # morris-engine
//!
//! A rules engine for Nine Men's Morris.
//!
//! ## Design Principles
//!
//! 1. **Topology as Data**: The 24 positions, their links and the 16 mill
//!    lines are a fixed graph built once. Rules only ever ask the graph.
//!
//! 2. **Validate, Then Mutate**: Every action is checked in full before any
//!    state changes. A declined action leaves the session untouched.
//!
//! 3. **One Turn, One Undo**: A mill-forming placement or move and the
//!    removal it triggers are recorded together and reversed together.
//!
//! ## Architecture
//!
//! - **Borrowed Rules View**: `RuleEngine` borrows the board, the players and
//!   the configuration. It is rebuilt on demand and never owns state.
//!
//! - **Persistent History**: Undo records live in an `im::Vector`, so cloning
//!   a session (for search or what-if analysis) stays cheap.
//!
//! ## Modules
//!
//! - `core`: Colours, players, actions, phases, status, configuration, errors
//! - `board`: Position graph, mill lines and occupancy
//! - `rules`: Legality predicates and mill detection
//! - `history`: Reversible turn records
//! - `game`: The session state machine, snapshot and restore

pub mod board;
pub mod core;
pub mod game;
pub mod history;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionError, ColorMap, GameConfig, GameError, GameState, GameStatus, MovementGate,
    Phase, PieceColor, Player, PositionRecord, Violation,
};

pub use crate::board::{BoardState, Direction, MillLine, PositionGraph, PositionId, POSITION_COUNT};

pub use crate::rules::RuleEngine;

pub use crate::history::{ActionHistory, Checkpoint, Effect, EffectRecord};

pub use crate::game::{GameController, Outcome};
