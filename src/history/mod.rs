//! Reversible action history.
//!
//! ## Key Types
//!
//! - `EffectRecord`: one applied turn, rich enough to reverse without rules
//! - `Checkpoint`: counters, turn and status captured before a turn
//! - `ActionHistory`: the append-only log undo pops from

pub mod record;

pub use record::{ActionHistory, Checkpoint, Effect, EffectRecord};
