//! Game session state machine.
//!
//! `GameController` accepts `Action`s, validates them through `RuleEngine`,
//! mutates the board, records history and reports the resulting status.

pub mod controller;

pub use controller::{GameController, Outcome};
