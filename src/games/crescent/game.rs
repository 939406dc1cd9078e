//! Fertile Crescent game implementation.

use tracing::{debug, info, warn};

use crate::civilizations::CivilizationRegistry;
use crate::core::{Action, GameConfig, GameError, GameSession, Phase, RandomSource, Result};
use crate::effects::{EffectResolver, ResolvedOutcome};
use crate::events::{Event, EventTable};
use crate::rules::{GameResult, RulesEngine, Transition};

use super::civilizations::civilizations;
use super::events::events;

/// The Fertile Crescent rules: content tables plus the turn controller.
#[derive(Clone, Debug)]
pub struct CrescentGame {
    config: GameConfig,
    civilizations: CivilizationRegistry,
    events: EventTable,
}

impl Default for CrescentGame {
    fn default() -> Self {
        Self::new()
    }
}

impl CrescentGame {
    /// The game with its built-in content and default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// The built-in content under a custom configuration.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self::from_parts(config, civilizations(), events())
    }

    /// Assemble a game from arbitrary tables.
    #[must_use]
    pub fn from_parts(
        config: GameConfig,
        civilizations: CivilizationRegistry,
        events: EventTable,
    ) -> Self {
        Self {
            config,
            civilizations,
            events,
        }
    }

    /// Get the civilization registry.
    pub fn civilizations(&self) -> &CivilizationRegistry {
        &self.civilizations
    }

    /// Get the event table.
    pub fn events(&self) -> &EventTable {
        &self.events
    }

    /// The event to display for a session.
    ///
    /// Once the game is won this is always the final event.
    pub fn current_event(&self, session: &GameSession) -> Option<&Event> {
        if session.is_game_over() {
            if let Some(index) = self.events.final_index() {
                return self.events.get(index);
            }
        }
        self.events.get(session.current_event)
    }

    fn start(&self, session: &GameSession) -> Result<GameSession> {
        let id = session.civilization.ok_or(GameError::NoCivilizationSelected)?;
        let civilization = self
            .civilizations
            .get(id)
            .ok_or_else(|| GameError::UnknownCivilization(id.to_string()))?;

        info!(civilization = %id, "game started");
        Ok(GameSession::started(id, civilization.starting_resources, &self.config))
    }

    fn choose(
        &self,
        session: &mut GameSession,
        index: usize,
        rng: &mut dyn RandomSource,
    ) -> Result<ResolvedOutcome> {
        let event = self
            .events
            .get(session.current_event)
            .ok_or_else(|| GameError::UnknownEvent(format!("#{}", session.current_event)))?;
        let choice = event.choice(index).ok_or_else(|| GameError::ChoiceOutOfRange {
            event: event.id.clone(),
            index,
            available: event.choices.len(),
        })?;

        let resolved = EffectResolver::resolve(session, &choice.resolution, rng);
        session.calendar.advance();
        session.turn += 1;
        session.last_outcome = Some(resolved.clone());
        self.check_victory(session);

        Ok(resolved)
    }

    fn next_event(&self, session: &mut GameSession, rng: &mut dyn RandomSource) {
        session.last_outcome = None;
        if self.check_victory(session) {
            return;
        }

        match self.events.draw(session.civilization, rng) {
            Some(index) => {
                if let Some(event) = self.events.get(index) {
                    debug!(event = %event.id, "event drawn");
                }
                session.current_event = index;
            }
            None => warn!(civilization = ?session.civilization, "no selectable event"),
        }
    }

    fn check_victory(&self, session: &mut GameSession) -> bool {
        if !session.check_victory(self.config.victory_threshold) {
            return false;
        }
        if let Some(index) = self.events.final_index() {
            session.current_event = index;
        }
        info!(progress = session.progress(), turn = session.turn, "victory");
        true
    }
}

impl RulesEngine for CrescentGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, session: &GameSession) -> Vec<Action> {
        match session.phase {
            Phase::CivilizationSelection => {
                let mut actions: Vec<_> = self
                    .civilizations
                    .iter()
                    .map(|civ| Action::SelectCivilization(civ.id))
                    .collect();
                if session.civilization.is_some() {
                    actions.push(Action::StartGame);
                }
                actions
            }
            Phase::Playing if session.awaiting_dismissal() => {
                vec![Action::NextEvent, Action::Restart]
            }
            Phase::Playing => {
                let choices = self.current_event(session).map_or(0, |e| e.choices.len());
                let mut actions: Vec<_> = (0..choices).map(Action::Choose).collect();
                actions.push(Action::Restart);
                actions
            }
            Phase::Victory => vec![Action::Restart],
        }
    }

    fn reduce(
        &self,
        session: &GameSession,
        action: &Action,
        rng: &mut dyn RandomSource,
    ) -> Result<Transition> {
        let mut next = session.clone();
        let mut outcome = None;
        let dismissing = session.awaiting_dismissal();

        match (session.phase, *action) {
            (Phase::CivilizationSelection, Action::SelectCivilization(id)) => {
                if !self.civilizations.contains(id) {
                    return Err(GameError::UnknownCivilization(id.to_string()));
                }
                next.civilization = Some(id);
            }
            (Phase::CivilizationSelection, Action::StartGame) => {
                next = self.start(session)?;
            }
            (Phase::Playing, Action::Choose(index)) if !dismissing => {
                outcome = Some(self.choose(&mut next, index, rng)?);
            }
            (Phase::Playing, Action::NextEvent) if dismissing => {
                self.next_event(&mut next, rng);
            }
            (Phase::Playing | Phase::Victory, Action::Restart) => {
                next = GameSession::with_config(&self.config);
            }
            (phase, action) => {
                return Err(GameError::InvalidAction {
                    action: action.to_string(),
                    phase,
                });
            }
        }

        Ok(Transition { session: next, outcome })
    }

    fn is_terminal(&self, session: &GameSession) -> Option<GameResult> {
        if !session.is_game_over() {
            return None;
        }
        Some(GameResult {
            civilization: session.civilization?,
            progress: session.progress(),
            turns: session.turn,
            calendar: session.calendar,
        })
    }
}
