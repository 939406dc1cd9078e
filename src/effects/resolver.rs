//! Effect resolution - executing choices on a session.
//!
//! The `EffectResolver` walks a `Resolution` tree against the session:
//! resource gates pay their cost before the paid branch is taken, chance
//! nodes draw exactly one sample from the injected source, civilization
//! nodes branch on the session's civilization. The reached `Outcome` is
//! then committed in order: effects, achievement log lines, outcome log.

use tracing::info;

use crate::core::{GameSession, RandomSource};

use super::{Effect, Outcome, Resolution, ResolvedOutcome};

/// Resolves choices on a session.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve a choice's resolution tree and commit the reached outcome.
    pub fn resolve(
        session: &mut GameSession,
        resolution: &Resolution,
        rng: &mut dyn RandomSource,
    ) -> ResolvedOutcome {
        let outcome = Self::select(session, resolution, rng);
        Self::apply_outcome(session, outcome)
    }

    /// Walk the tree to a leaf, paying gate costs on the way.
    fn select<'r>(
        session: &mut GameSession,
        resolution: &'r Resolution,
        rng: &mut dyn RandomSource,
    ) -> &'r Outcome {
        let mut node = resolution;
        loop {
            node = match node {
                Resolution::Outcome(outcome) => return outcome,

                Resolution::Gated { cost, paid, short } => {
                    if session.resources.pay(cost) {
                        paid.as_ref()
                    } else {
                        short.as_ref()
                    }
                }

                Resolution::Chance { threshold, success, failure } => {
                    if rng.exceeds(*threshold) {
                        success.as_ref()
                    } else {
                        failure.as_ref()
                    }
                }

                Resolution::ByCivilization { cases, fallback } => cases
                    .iter()
                    .find(|(civ, _)| Some(*civ) == session.civilization)
                    .map_or(fallback.as_ref(), |(_, case)| case),
            };
        }
    }

    /// Commit an outcome: effects first, then its log line.
    pub fn apply_outcome(session: &mut GameSession, outcome: &Outcome) -> ResolvedOutcome {
        for effect in &outcome.effects {
            Self::apply_effect(session, effect);
        }
        session.push_log(outcome.log.clone());
        ResolvedOutcome::new(outcome.summary.clone())
    }

    /// Apply a single atomic effect.
    pub fn apply_effect(session: &mut GameSession, effect: &Effect) {
        match effect {
            Effect::Gain { kind, amount } => session.resources.gain(*kind, *amount),

            Effect::Lose { kind, amount } => session.resources.lose(*kind, *amount),

            Effect::Progress(amount) => session.add_progress(*amount),

            Effect::Unlock(name) => {
                if session.add_achievement(name) {
                    info!(achievement = %name, "achievement unlocked");
                }
            }

            Effect::Batch(effects) => {
                for effect in effects {
                    Self::apply_effect(session, effect);
                }
            }
        }
    }
}
