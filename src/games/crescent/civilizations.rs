//! The three playable civilizations.

use crate::civilizations::{Civilization, CivilizationId, CivilizationRegistry};
use crate::core::Resources;

/// Build the registry of Sumerians, Akkadians and Phoenicians.
#[must_use]
pub fn civilizations() -> CivilizationRegistry {
    let mut registry = CivilizationRegistry::new();

    registry.register(
        Civilization::new(CivilizationId::Sumerios, "Sumérios", Resources::new(4, 3, 1, 10))
            .with_description("Mestres da escrita e arquitetura")
            .with_special_ability("Escrita Avançada: Ganham +5% de progresso ao desenvolver tecnologias"),
    );

    registry.register(
        Civilization::new(CivilizationId::Acadios, "Acádios", Resources::new(5, 3, 1, 11))
            .with_description("Guerreiros e conquistadores")
            .with_special_ability("Império Unificado: Ganham +2 pessoas ao vencer conflitos"),
    );

    registry.register(
        Civilization::new(CivilizationId::Fenicios, "Fenícios", Resources::new(3, 4, 2, 8))
            .with_description("Grandes navegadores e comerciantes")
            .with_special_ability("Comerciantes Habilidosos: Ganham +1 ouro ao comerciar"),
    );

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_registered() {
        let registry = civilizations();
        assert_eq!(registry.len(), 3);
        for id in CivilizationId::ALL {
            let civ = registry.get(id).unwrap();
            assert!(civ.special_ability.is_some());
            assert!(!civ.description.is_empty());
        }
    }

    #[test]
    fn test_starting_resources() {
        let registry = civilizations();
        assert_eq!(
            registry.get(CivilizationId::Sumerios).unwrap().starting_resources,
            Resources::new(4, 3, 1, 10)
        );
        assert_eq!(
            registry.get(CivilizationId::Acadios).unwrap().starting_resources,
            Resources::new(5, 3, 1, 11)
        );
        assert_eq!(
            registry.get(CivilizationId::Fenicios).unwrap().starting_resources,
            Resources::new(3, 4, 2, 8)
        );
    }
}
