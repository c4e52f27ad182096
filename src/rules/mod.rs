//! Game rules.
//!
//! `RuleEngine` answers every legality question (placement, movement,
//! flying, removal, mills, blockage) without touching state. The controller
//! consults it before each mutation.

pub mod engine;

pub use engine::RuleEngine;
