//! Civilization registry for definition lookup.

use rustc_hash::FxHashMap;

use super::definition::{Civilization, CivilizationId};

/// Registry of civilization definitions.
///
/// ## Example
///
/// ```
/// use fertile_crescent::civilizations::{Civilization, CivilizationId, CivilizationRegistry};
/// use fertile_crescent::core::Resources;
///
/// let mut registry = CivilizationRegistry::new();
/// let resources = Resources::new(3, 4, 2, 8);
/// registry.register(Civilization::new(CivilizationId::Fenicios, "Fenícios", resources));
///
/// let found = registry.get(CivilizationId::Fenicios).unwrap();
/// assert_eq!(found.name, "Fenícios");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CivilizationRegistry {
    civilizations: FxHashMap<CivilizationId, Civilization>,
}

impl CivilizationRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a civilization.
    ///
    /// Panics if the identifier is already registered.
    pub fn register(&mut self, civilization: Civilization) {
        if self.civilizations.contains_key(&civilization.id) {
            panic!("Civilization {} already registered", civilization.id);
        }
        self.civilizations.insert(civilization.id, civilization);
    }

    /// Get a civilization by identifier.
    #[must_use]
    pub fn get(&self, id: CivilizationId) -> Option<&Civilization> {
        self.civilizations.get(&id)
    }

    /// Check if an identifier is registered.
    #[must_use]
    pub fn contains(&self, id: CivilizationId) -> bool {
        self.civilizations.contains_key(&id)
    }

    /// Number of registered civilizations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.civilizations.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.civilizations.is_empty()
    }

    /// Iterate in selection-screen order.
    pub fn iter(&self) -> impl Iterator<Item = &Civilization> {
        CivilizationId::ALL
            .into_iter()
            .filter_map(move |id| self.civilizations.get(&id))
    }
}
