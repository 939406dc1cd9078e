//! Core engine types: resources, calendar, state, actions, RNG, configuration.
//!
//! This module contains the building blocks the rules engine is made of.
//! Content (civilizations, events) lives in `games::crescent`.

pub mod resources;
pub mod calendar;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use resources::{Cost, ResourceKind, Resources};
pub use calendar::{Calendar, Season};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng};
pub use config::GameConfig;
pub use action::{Action, ActionRecord};
pub use state::{GameSession, GameState, Phase};
pub use error::{GameError, Result};
