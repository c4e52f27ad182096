//! Core engine types: colours, players, actions, phases, configuration,
//! errors and the persistence shape.
//!
//! Everything here is plain data. Rules live in `rules`, the state machine in
//! `game`.

pub mod action;
pub mod color;
pub mod config;
pub mod error;
pub mod player;
pub mod state;
pub mod status;

pub use action::Action;
pub use color::{ColorMap, PieceColor};
pub use config::{GameConfig, MovementGate};
pub use error::{ActionError, GameError, Violation};
pub use player::Player;
pub use state::{GameState, PositionRecord};
pub use status::{GameStatus, Phase};
