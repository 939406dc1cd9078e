use thiserror::Error;

use super::state::Phase;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Action {action} is not allowed during {phase:?}")]
    InvalidAction { action: String, phase: Phase },

    #[error("No civilization selected")]
    NoCivilizationSelected,

    #[error("Unknown civilization: {0}")]
    UnknownCivilization(String),

    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    #[error("Choice {index} out of range for event {event} ({available} available)")]
    ChoiceOutOfRange {
        event: String,
        index: usize,
        available: usize,
    },

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
