//! Rules engine trait for the turn controller.
//!
//! Games implement `RulesEngine` to define:
//! - What actions are legal in a session
//! - How an action transforms a session (the reducer)
//! - When the game is over
//!
//! `apply_action` and `replay` are provided on top of the reducer.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::civilizations::CivilizationId;
use crate::core::{
    Action, ActionRecord, Calendar, GameConfig, GameSession, GameState, RandomSource, Result,
};
use crate::effects::ResolvedOutcome;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Civilization that won.
    pub civilization: CivilizationId,
    /// Final progress (at or above the threshold).
    pub progress: u32,
    /// Choices it took.
    pub turns: u32,
    /// Calendar at victory.
    pub calendar: Calendar,
}

/// Output of one reducer step.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// The new session.
    pub session: GameSession,
    /// Resolved choice, for `Action::Choose`.
    pub outcome: Option<ResolvedOutcome>,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `reduce`: Must not touch the input session, must validate before
///   drawing from `rng`, and must be deterministic given the samples drawn
/// - `legal_actions`: Empty only if no action can be taken
/// - `is_terminal`: Return None while the game continues
pub trait RulesEngine {
    /// Get the engine configuration.
    fn config(&self) -> &GameConfig;

    /// Enumerate the actions `reduce` accepts for this session.
    fn legal_actions(&self, session: &GameSession) -> Vec<Action>;

    /// Compute the session that follows `action`.
    ///
    /// Returns an error for actions that are not legal in the session's
    /// phase or that reference a missing civilization or choice.
    fn reduce(
        &self,
        session: &GameSession,
        action: &Action,
        rng: &mut dyn RandomSource,
    ) -> Result<Transition>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` once the session is in victory.
    fn is_terminal(&self, session: &GameSession) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Check whether `action` is legal right now.
    fn is_legal(&self, session: &GameSession, action: &Action) -> bool {
        self.legal_actions(session).contains(action)
    }

    /// Apply an action to a live game.
    ///
    /// Accepted actions replace the session and are recorded in history.
    /// Rejected actions are logged and leave the state untouched.
    fn apply_action(
        &self,
        state: &mut GameState,
        action: &Action,
    ) -> Result<Option<ResolvedOutcome>> {
        let turn = state.session.turn;

        match self.reduce(&state.session, action, &mut state.rng) {
            Ok(transition) => {
                state.session = transition.session;
                let sequence = state.next_sequence();
                state.record_action(ActionRecord::new(*action, turn, sequence));
                debug!(%action, sequence, phase = ?state.session.phase, "action applied");
                Ok(transition.outcome)
            }
            Err(err) => {
                warn!(%action, error = %err, "action rejected");
                Err(err)
            }
        }
    }

    /// Rebuild a game from its seed and accepted actions.
    fn replay<'a>(
        &self,
        seed: u64,
        actions: impl IntoIterator<Item = &'a Action>,
    ) -> Result<GameState>
    where
        Self: Sized,
    {
        let mut state = GameState::new(seed);
        for action in actions {
            self.apply_action(&mut state, action)?;
        }
        Ok(state)
    }
}
