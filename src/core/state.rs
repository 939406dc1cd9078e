//! Game state: the session value and its live driver.
//!
//! ## GameSession
//!
//! Everything the presentation layer renders:
//! - Phase, selected civilization
//! - Resources, progress, achievements
//! - Message log (most recent first)
//! - Current event, calendar, last resolved outcome
//!
//! The reducer takes a session by reference and returns a new one, so
//! the log and achievement list use `im` persistent vectors for O(1) clone.
//!
//! ## GameState
//!
//! A session plus the seeded RNG and the action history of a live game.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::calendar::Calendar;
use super::config::GameConfig;
use super::resources::Resources;
use super::rng::GameRng;
use crate::civilizations::CivilizationId;
use crate::effects::ResolvedOutcome;

/// Top-level phase of the turn controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Choosing a civilization; no game running.
    #[default]
    CivilizationSelection,
    /// A game is running.
    Playing,
    /// Progress reached the victory threshold.
    Victory,
}

/// Complete session state of one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    /// Current phase.
    pub phase: Phase,

    /// Selected (or playing) civilization.
    pub civilization: Option<CivilizationId>,

    /// Resource counters.
    pub resources: Resources,

    /// Civilization progress, 0 to 100 and beyond.
    progress: u32,

    /// Unlocked achievements in unlock order.
    achievements: Vector<String>,

    /// Message log, most recent first.
    log: Vector<String>,

    /// Absolute index of the current event in the event table.
    pub current_event: usize,

    /// Year and season.
    pub calendar: Calendar,

    /// Result of the last resolved choice, until the next event is drawn.
    pub last_outcome: Option<ResolvedOutcome>,

    /// Number of choices resolved this game.
    pub turn: u32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// A fresh session on the civilization selection screen.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    /// A fresh selection-screen session dated by `config`.
    #[must_use]
    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            phase: Phase::CivilizationSelection,
            civilization: None,
            resources: Resources::default(),
            progress: 0,
            achievements: Vector::new(),
            log: Vector::new(),
            current_event: 0,
            calendar: Calendar::new(config.starting_year),
            last_outcome: None,
            turn: 0,
        }
    }

    /// A session at the start of a game.
    ///
    /// Resets every field, seeding resources from the civilization.
    #[must_use]
    pub fn started(
        civilization: CivilizationId,
        resources: Resources,
        config: &GameConfig,
    ) -> Self {
        let mut log = Vector::new();
        log.push_front(config.opening_message.clone());

        Self {
            phase: Phase::Playing,
            civilization: Some(civilization),
            resources,
            progress: 0,
            achievements: Vector::new(),
            log,
            current_event: 0,
            calendar: Calendar::new(config.starting_year),
            last_outcome: None,
            turn: 0,
        }
    }

    /// Check if a game has been started (playing or won).
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != Phase::CivilizationSelection
    }

    /// Check if a resolved choice is waiting to be dismissed.
    ///
    /// While it is, the next event must be drawn before another choice.
    #[must_use]
    pub fn awaiting_dismissal(&self) -> bool {
        self.last_outcome.is_some()
    }

    /// Check if the game has been won.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::Victory
    }

    // === Progress ===

    /// Current progress.
    #[must_use]
    pub fn progress(&self) -> u32 {
        self.progress
    }

    /// Add progress. Progress never decreases.
    pub fn add_progress(&mut self, amount: u32) {
        self.progress = self.progress.saturating_add(amount);
    }

    /// Move to `Victory` if progress reached `threshold`.
    ///
    /// Returns true only on the transition. Repeated calls are no-ops.
    pub fn check_victory(&mut self, threshold: u32) -> bool {
        if self.phase == Phase::Playing && self.progress >= threshold {
            self.phase = Phase::Victory;
            true
        } else {
            false
        }
    }

    // === Achievements ===

    /// Unlocked achievements in unlock order.
    pub fn achievements(&self) -> impl Iterator<Item = &str> {
        self.achievements.iter().map(String::as_str)
    }

    /// Number of unlocked achievements.
    #[must_use]
    pub fn achievement_count(&self) -> usize {
        self.achievements.len()
    }

    /// Check if an achievement is unlocked.
    #[must_use]
    pub fn has_achievement(&self, name: &str) -> bool {
        self.achievements.iter().any(|a| a == name)
    }

    /// Unlock an achievement and log it.
    ///
    /// Returns false (and logs nothing) if it was already unlocked.
    pub fn add_achievement(&mut self, name: &str) -> bool {
        if self.has_achievement(name) {
            return false;
        }
        self.achievements.push_back(name.to_string());
        self.push_log(format!("🏆 Conquista desbloqueada: {name}"));
        true
    }

    // === Message Log ===

    /// Message log, most recent first.
    pub fn log(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }

    /// Most recent log line.
    #[must_use]
    pub fn latest_log(&self) -> Option<&str> {
        self.log.front().map(String::as_str)
    }

    /// Number of log lines.
    #[must_use]
    pub fn log_len(&self) -> usize {
        self.log.len()
    }

    /// Push a line onto the front of the log.
    pub fn push_log(&mut self, line: impl Into<String>) {
        self.log.push_front(line.into());
    }
}

/// A live game: session, RNG, and action history.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Current session.
    pub session: GameSession,

    /// Deterministic RNG.
    pub rng: GameRng,

    /// Accepted actions, in order.
    history: Vector<ActionRecord>,
}

impl GameState {
    /// Create a new game state on the selection screen.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            session: GameSession::new(),
            rng: GameRng::new(seed),
            history: Vector::new(),
        }
    }

    /// Seed the RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Accepted actions, in order.
    pub fn history(&self) -> impl Iterator<Item = &ActionRecord> {
        self.history.iter()
    }

    /// Number of accepted actions.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Record an accepted action.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }

    /// Next history sequence number.
    #[must_use]
    pub fn next_sequence(&self) -> usize {
        self.history.len()
    }
}
