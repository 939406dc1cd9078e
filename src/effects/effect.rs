//! Effect definitions.
//!
//! Choices are bound to plain data, not closures. A `Resolution` is a
//! small decision tree (resource gate, chance roll, civilization branch)
//! whose leaves are `Outcome`s. An outcome is a list of atomic `Effect`s
//! plus the two texts the player sees: one log line and one summary.

use serde::{Deserialize, Serialize};

use crate::civilizations::CivilizationId;
use crate::core::{Cost, ResourceKind};

/// An atomic session mutation.
///
/// ## Resource Effects
///
/// - `Gain`: Add to a resource
/// - `Lose`: Subtract from a resource, clamped at its floor
///
/// ## Progress and Milestones
///
/// - `Progress`: Add civilization progress (never negative)
/// - `Unlock`: Unlock an achievement (idempotent)
///
/// ## Composite
///
/// - `Batch`: Apply several effects in order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Add `amount` of a resource.
    Gain { kind: ResourceKind, amount: u32 },

    /// Remove `amount` of a resource, clamped at the kind's floor.
    Lose { kind: ResourceKind, amount: u32 },

    /// Add progress points.
    Progress(u32),

    /// Unlock a named achievement.
    Unlock(String),

    /// Apply effects in sequence.
    Batch(Vec<Effect>),
}

impl Effect {
    /// Create a gain effect.
    pub fn gain(kind: ResourceKind, amount: u32) -> Self {
        Self::Gain { kind, amount }
    }

    /// Create a clamped loss effect.
    pub fn lose(kind: ResourceKind, amount: u32) -> Self {
        Self::Lose { kind, amount }
    }

    /// Create a progress effect.
    pub fn progress(amount: u32) -> Self {
        Self::Progress(amount)
    }

    /// Create an achievement unlock.
    pub fn unlock(name: impl Into<String>) -> Self {
        Self::Unlock(name.into())
    }

    /// Create a batch of effects.
    pub fn batch(effects: impl IntoIterator<Item = Effect>) -> Self {
        Self::Batch(effects.into_iter().collect())
    }
}

/// A terminal branch: what happens and what the player is told.
///
/// Exactly one log line and one summary are produced per resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Effects applied in order.
    pub effects: Vec<Effect>,
    /// Line pushed onto the message log.
    pub log: String,
    /// Text returned to the caller.
    pub summary: String,
}

impl Outcome {
    /// An outcome with no effects.
    pub fn new(log: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            effects: Vec::new(),
            log: log.into(),
            summary: summary.into(),
        }
    }

    /// Append an effect.
    #[must_use]
    pub fn with(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Append a resource gain.
    #[must_use]
    pub fn gain(self, kind: ResourceKind, amount: u32) -> Self {
        self.with(Effect::gain(kind, amount))
    }

    /// Append a clamped resource loss.
    #[must_use]
    pub fn lose(self, kind: ResourceKind, amount: u32) -> Self {
        self.with(Effect::lose(kind, amount))
    }

    /// Append a progress gain.
    #[must_use]
    pub fn progress(self, amount: u32) -> Self {
        self.with(Effect::progress(amount))
    }

    /// Append an achievement unlock.
    #[must_use]
    pub fn unlock(self, name: impl Into<String>) -> Self {
        self.with(Effect::unlock(name))
    }
}

/// Decision tree bound to a choice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Resolution {
    /// Apply an outcome unconditionally.
    Outcome(Outcome),

    /// Pay `cost` and continue with `paid`, or resolve `short` (nothing
    /// deducted) when the resources do not cover it.
    Gated {
        cost: Cost,
        paid: Box<Resolution>,
        short: Box<Resolution>,
    },

    /// Draw one sample; `success` if it exceeds `threshold`.
    Chance {
        threshold: f64,
        success: Box<Resolution>,
        failure: Box<Resolution>,
    },

    /// Branch on the player's civilization.
    ByCivilization {
        cases: Vec<(CivilizationId, Resolution)>,
        fallback: Box<Resolution>,
    },
}

impl Resolution {
    /// Create a resource-gated resolution.
    pub fn gated(cost: Cost, paid: impl Into<Resolution>, short: impl Into<Resolution>) -> Self {
        Self::Gated {
            cost,
            paid: Box::new(paid.into()),
            short: Box::new(short.into()),
        }
    }

    /// Create a chance resolution.
    pub fn chance(
        threshold: f64,
        success: impl Into<Resolution>,
        failure: impl Into<Resolution>,
    ) -> Self {
        debug_assert!((0.0..1.0).contains(&threshold), "threshold must be in [0, 1)");
        Self::Chance {
            threshold,
            success: Box::new(success.into()),
            failure: Box::new(failure.into()),
        }
    }

    /// Create a civilization branch with a single special case.
    pub fn for_civilization(
        civilization: CivilizationId,
        special: impl Into<Resolution>,
        fallback: impl Into<Resolution>,
    ) -> Self {
        Self::ByCivilization {
            cases: vec![(civilization, special.into())],
            fallback: Box::new(fallback.into()),
        }
    }

    /// Create a civilization branch with several cases.
    pub fn by_civilization(
        cases: impl IntoIterator<Item = (CivilizationId, Resolution)>,
        fallback: impl Into<Resolution>,
    ) -> Self {
        Self::ByCivilization {
            cases: cases.into_iter().collect(),
            fallback: Box::new(fallback.into()),
        }
    }

    /// Every outcome reachable from this tree, depth first.
    pub fn outcomes(&self) -> Vec<&Outcome> {
        let mut out = Vec::new();
        self.collect_outcomes(&mut out);
        out
    }

    fn collect_outcomes<'a>(&'a self, out: &mut Vec<&'a Outcome>) {
        match self {
            Resolution::Outcome(outcome) => out.push(outcome),
            Resolution::Gated { paid, short, .. } => {
                paid.collect_outcomes(out);
                short.collect_outcomes(out);
            }
            Resolution::Chance { success, failure, .. } => {
                success.collect_outcomes(out);
                failure.collect_outcomes(out);
            }
            Resolution::ByCivilization { cases, fallback } => {
                for (_, case) in cases {
                    case.collect_outcomes(out);
                }
                fallback.collect_outcomes(out);
            }
        }
    }
}

impl From<Outcome> for Resolution {
    fn from(outcome: Outcome) -> Self {
        Resolution::Outcome(outcome)
    }
}

/// Feedback category of a resolved summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeTone {
    /// Only gains were reported.
    Success,
    /// Only losses were reported.
    Failure,
    /// Mixed or no deltas.
    Neutral,
}

impl OutcomeTone {
    /// Classify a summary by the signs of the deltas it mentions.
    #[must_use]
    pub fn classify(summary: &str) -> Self {
        match (summary.contains('+'), summary.contains('-')) {
            (true, false) => OutcomeTone::Success,
            (false, true) => OutcomeTone::Failure,
            _ => OutcomeTone::Neutral,
        }
    }
}

/// The result of resolving a choice, as shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedOutcome {
    /// Summary text.
    pub summary: String,
    /// Feedback category of the summary.
    pub tone: OutcomeTone,
}

impl ResolvedOutcome {
    /// Wrap a summary, classifying its tone.
    pub fn new(summary: impl Into<String>) -> Self {
        let summary = summary.into();
        let tone = OutcomeTone::classify(&summary);
        Self { summary, tone }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_builder() {
        let outcome = Outcome::new("log", "summary")
            .lose(ResourceKind::Wood, 2)
            .gain(ResourceKind::Grain, 3)
            .unlock("Engenheiro Hidráulico");

        assert_eq!(outcome.effects.len(), 3);
        assert_eq!(outcome.effects[0], Effect::lose(ResourceKind::Wood, 2));
        assert_eq!(outcome.effects[2], Effect::Unlock("Engenheiro Hidráulico".to_string()));
    }

    #[test]
    fn test_batch_effect() {
        let effect = Effect::batch([Effect::progress(5), Effect::gain(ResourceKind::Gold, 1)]);
        match effect {
            Effect::Batch(effects) => assert_eq!(effects.len(), 2),
            _ => panic!("Expected Batch"),
        }
    }

    #[test]
    fn test_outcomes_walk() {
        let resolution = Resolution::gated(
            Cost::of(ResourceKind::Gold, 1),
            Resolution::chance(0.5, Outcome::new("a", "a"), Outcome::new("b", "b")),
            Outcome::new("c", "c"),
        );

        let logs: Vec<_> = resolution.outcomes().iter().map(|o| o.log.as_str()).collect();
        assert_eq!(logs, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tone_classification() {
        assert_eq!(OutcomeTone::classify("+3 grãos"), OutcomeTone::Success);
        assert_eq!(OutcomeTone::classify("-2 pessoas."), OutcomeTone::Failure);
        assert_eq!(OutcomeTone::classify("-2 madeira, +4 ouro"), OutcomeTone::Neutral);
        assert_eq!(OutcomeTone::classify("Nada mudou."), OutcomeTone::Neutral);
    }

    #[test]
    fn test_resolution_serialization() {
        let resolution = Resolution::for_civilization(
            CivilizationId::Fenicios,
            Outcome::new("x", "+4 ouro").gain(ResourceKind::Gold, 4),
            Outcome::new("y", "+3 ouro").gain(ResourceKind::Gold, 3),
        );

        let json = serde_json::to_string(&resolution).unwrap();
        let deserialized: Resolution = serde_json::from_str(&json).unwrap();
        assert_eq!(resolution, deserialized);
    }
}
