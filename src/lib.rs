//! # fertile-crescent
//!
//! Rules engine for an educational role-playing game about the first
//! civilizations of the Fertile Crescent.
//!
//! ## Design Principles
//!
//! 1. **Sessions Are Values**: The whole game is a `GameSession`. The reducer
//!    takes a session and an action and returns a new session.
//!
//! 2. **Choices Are Data**: Every event choice is a `Resolution` tree of
//!    resource gates, chance rolls and civilization branches. No callbacks.
//!
//! 3. **Injected Randomness**: All draws go through a `RandomSource`, seeded
//!    ChaCha8 in play and scripted samples in tests.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) session cloning via `im-rs`, so the
//!   reducer never needs to mutate its input.
//!
//! - **Validation at the Boundary**: Illegal actions return a `GameError`
//!   before any state or randomness is touched.
//!
//! ## Modules
//!
//! - `core`: Resources, calendar, state, actions, RNG, configuration, errors
//! - `civilizations`: Civilization definitions and registry
//! - `events`: Event definitions and the event table
//! - `effects`: Effect data model and resolver
//! - `rules`: RulesEngine trait (the turn controller)
//! - `games`: Concrete content (`games::crescent`)

pub mod core;
pub mod civilizations;
pub mod events;
pub mod effects;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Cost, ResourceKind, Resources,
    Calendar, Season,
    GameRng, GameRngState, RandomSource, ScriptedRng,
    GameConfig,
    Action, ActionRecord,
    GameSession, GameState, Phase,
    GameError, Result,
};

pub use crate::civilizations::{Civilization, CivilizationId, CivilizationRegistry};

pub use crate::events::{Choice, Event, EventTable};

pub use crate::effects::{Effect, EffectResolver, Outcome, OutcomeTone, Resolution, ResolvedOutcome};

pub use crate::rules::{GameResult, RulesEngine, Transition};

pub use crate::games::crescent::CrescentGame;
