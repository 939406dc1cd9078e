//! Civilization definitions - static per-people data.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::GameError;
use crate::core::Resources;

/// Identifier of a playable civilization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CivilizationId {
    /// Masters of writing and architecture.
    Sumerios,
    /// Warriors and conquerors.
    Acadios,
    /// Navigators and traders.
    Fenicios,
}

impl CivilizationId {
    /// All civilizations in selection-screen order.
    pub const ALL: [CivilizationId; 3] = [
        CivilizationId::Sumerios,
        CivilizationId::Acadios,
        CivilizationId::Fenicios,
    ];

    /// Stable lowercase key ("sumerios", ...).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            CivilizationId::Sumerios => "sumerios",
            CivilizationId::Acadios => "acadios",
            CivilizationId::Fenicios => "fenicios",
        }
    }
}

impl fmt::Display for CivilizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CivilizationId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CivilizationId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| GameError::UnknownCivilization(s.to_string()))
    }
}

/// Static civilization definition.
///
/// ## Example
///
/// ```
/// use fertile_crescent::civilizations::{Civilization, CivilizationId};
/// use fertile_crescent::core::Resources;
///
/// let civ = Civilization::new(CivilizationId::Sumerios, "Sumérios", Resources::new(4, 3, 1, 10))
///     .with_description("Mestres da escrita e arquitetura");
///
/// assert_eq!(civ.starting_resources.population, 10);
/// assert!(civ.special_ability.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Civilization {
    /// Identifier.
    pub id: CivilizationId,

    /// Display name.
    pub name: String,

    /// One-line description.
    pub description: String,

    /// Resources a new game starts with.
    pub starting_resources: Resources,

    /// Special ability text, if any.
    pub special_ability: Option<String>,
}

impl Civilization {
    /// Create a new civilization definition.
    pub fn new(id: CivilizationId, name: impl Into<String>, starting_resources: Resources) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            starting_resources,
            special_ability: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the special ability text.
    #[must_use]
    pub fn with_special_ability(mut self, ability: impl Into<String>) -> Self {
        self.special_ability = Some(ability.into());
        self
    }
}
