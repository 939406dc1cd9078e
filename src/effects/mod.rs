//! Effect system for event choices.
//!
//! Choices are data, not callbacks:
//! - `Effect`: Atomic session mutation (resource, progress, achievement)
//! - `Outcome`: Effects plus the log line and summary the player sees
//! - `Resolution`: Decision tree over outcomes (resource gate, chance, civilization)
//! - `EffectResolver`: Walks a resolution and commits the reached outcome
//!
//! ## Design Philosophy
//!
//! No choice ever fails. A gate the player cannot afford resolves its
//! penalty branch instead of rejecting the choice, and nothing is deducted.

mod effect;
mod resolver;

pub use effect::{Effect, Outcome, OutcomeTone, Resolution, ResolvedOutcome};
pub use resolver::EffectResolver;
