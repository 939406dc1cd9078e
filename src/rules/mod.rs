//! Turn controller: the rules engine trait.
//!
//! Games implement `RulesEngine` to define:
//! - Legal actions for each session
//! - The reducer `(session, action) -> session'`
//! - Win conditions
//!
//! The presentation layer only ever talks to a `RulesEngine`.

pub mod engine;

pub use engine::{GameResult, RulesEngine, Transition};
