//! Event definitions - static narrative prompts.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::civilizations::CivilizationId;
use crate::effects::Resolution;

/// Most events offer three choices.
pub const MAX_CHOICES: usize = 3;

/// A selectable option on an event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Button label.
    pub text: String,
    /// What happens when chosen.
    pub resolution: Resolution,
}

impl Choice {
    /// Create a choice.
    pub fn new(text: impl Into<String>, resolution: impl Into<Resolution>) -> Self {
        Self {
            text: text.into(),
            resolution: resolution.into(),
        }
    }
}

/// Static event definition.
///
/// ## Example
///
/// ```
/// use fertile_crescent::civilizations::CivilizationId;
/// use fertile_crescent::effects::Outcome;
/// use fertile_crescent::events::{Choice, Event};
///
/// let event = Event::new("writing", "Descoberta da Escrita")
///     .with_choice(Choice::new("Ignorar a escrita", Outcome::new("Ignorada.", "Nada mudou.")))
///     .restricted_to(CivilizationId::Sumerios);
///
/// assert!(event.available_to(CivilizationId::Sumerios));
/// assert!(!event.available_to(CivilizationId::Fenicios));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier (e.g. "river_flood").
    pub id: String,

    /// Display title.
    pub title: String,

    /// Narrative description.
    pub description: String,

    /// Ordered choices, 1 to 3.
    pub choices: SmallVec<[Choice; MAX_CHOICES]>,

    /// Only drawn for this civilization, if set.
    pub civilization: Option<CivilizationId>,

    /// Terminal victory event, never drawn at random.
    pub final_event: bool,
}

impl Event {
    /// Create a new event with no choices.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            choices: SmallVec::new(),
            civilization: None,
            final_event: false,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a choice.
    #[must_use]
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Restrict the event to one civilization.
    #[must_use]
    pub fn restricted_to(mut self, civilization: CivilizationId) -> Self {
        self.civilization = Some(civilization);
        self
    }

    /// Mark as the terminal victory event.
    #[must_use]
    pub fn final_event(mut self) -> Self {
        self.final_event = true;
        self
    }

    /// Check if the event may be shown to a civilization.
    #[must_use]
    pub fn available_to(&self, civilization: CivilizationId) -> bool {
        self.civilization.map_or(true, |c| c == civilization)
    }

    /// Check if the event can be drawn at random for a civilization.
    #[must_use]
    pub fn selectable_for(&self, civilization: Option<CivilizationId>) -> bool {
        !self.final_event && self.civilization.map_or(true, |c| Some(c) == civilization)
    }

    /// Get a choice by index.
    #[must_use]
    pub fn choice(&self, index: usize) -> Option<&Choice> {
        self.choices.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Outcome;

    fn plain(text: &str) -> Choice {
        Choice::new(text, Outcome::new(text, text))
    }

    #[test]
    fn test_builder() {
        let event = Event::new("wheel", "Descoberta da Roda")
            .with_description("Um dispositivo circular.")
            .with_choice(plain("a"))
            .with_choice(plain("b"));

        assert_eq!(event.choices.len(), 2);
        assert_eq!(event.choice(1).unwrap().text, "b");
        assert!(event.choice(2).is_none());
        assert!(!event.choices.spilled());
    }

    #[test]
    fn test_unrestricted_available_to_all() {
        let event = Event::new("famine", "Fome").with_choice(plain("a"));
        for civ in CivilizationId::ALL {
            assert!(event.available_to(civ));
            assert!(event.selectable_for(Some(civ)));
        }
    }

    #[test]
    fn test_final_never_selectable() {
        let event = Event::new("victory", "Vitória!").with_choice(plain("a")).final_event();
        for civ in CivilizationId::ALL {
            assert!(!event.selectable_for(Some(civ)));
        }
    }

    #[test]
    fn test_restricted_not_selectable_without_civilization() {
        let event = Event::new("trade", "Comércio").restricted_to(CivilizationId::Fenicios);
        assert!(!event.selectable_for(None));
        assert!(event.selectable_for(Some(CivilizationId::Fenicios)));
    }
}
