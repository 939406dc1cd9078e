//! Engine configuration.
//!
//! The content tables (civilizations, events) are compiled in. The few
//! numeric knobs of the turn controller live here so tests and variants
//! can override them, either in code or from a TOML string.

use serde::{Deserialize, Serialize};

use super::error::Result;

/// Progress needed to win.
pub const DEFAULT_VICTORY_THRESHOLD: u32 = 100;

/// Year a new game starts in.
pub const DEFAULT_STARTING_YEAR: i32 = -3000;

/// First log line of every new game.
pub const DEFAULT_OPENING_MESSAGE: &str = "Sua jornada como líder começou!";

/// Turn controller configuration.
///
/// ## Example
///
/// ```
/// use fertile_crescent::core::GameConfig;
///
/// let config = GameConfig::from_toml_str("victory_threshold = 50").unwrap();
/// assert_eq!(config.victory_threshold, 50);
/// assert_eq!(config.starting_year, -3000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Progress at or above which the game is won.
    pub victory_threshold: u32,

    /// Calendar year of the first turn.
    pub starting_year: i32,

    /// Log line every new game starts with.
    pub opening_message: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            victory_threshold: DEFAULT_VICTORY_THRESHOLD,
            starting_year: DEFAULT_STARTING_YEAR,
            opening_message: DEFAULT_OPENING_MESSAGE.to_string(),
        }
    }
}

impl GameConfig {
    /// Parse a configuration, filling omitted keys with defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Set the victory threshold.
    #[must_use]
    pub fn with_victory_threshold(mut self, threshold: u32) -> Self {
        self.victory_threshold = threshold;
        self
    }

    /// Set the starting year.
    #[must_use]
    pub fn with_starting_year(mut self, year: i32) -> Self {
        self.starting_year = year;
        self
    }
}
