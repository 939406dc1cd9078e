//! Historical reference data shown next to the game.

use serde::Serialize;

/// A dated milestone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    /// Signed year; negative is before the common era.
    pub year: i32,
    pub text: &'static str,
}

impl TimelineEntry {
    /// Year formatted with a thousands dot, e.g. "10.000 a.C.".
    #[must_use]
    pub fn label(&self) -> String {
        let digits = self.year.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        let era = if self.year < 0 { "a.C." } else { "d.C." };
        format!("{grouped} {era}")
    }
}

/// A short encyclopedia note.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LoreNote {
    pub topic: &'static str,
    pub text: &'static str,
}

/// Milestones in chronological order.
pub const TIMELINE: [TimelineEntry; 7] = [
    TimelineEntry { year: -10_000, text: "Início da agricultura no Crescente Fértil" },
    TimelineEntry { year: -4_000, text: "Surgimento da civilização Suméria na Mesopotâmia" },
    TimelineEntry { year: -3_400, text: "Invenção da escrita cuneiforme pelos Sumérios" },
    TimelineEntry { year: -2_334, text: "Sargão, o Grande, funda o Império Acádio" },
    TimelineEntry { year: -2_200, text: "Queda do Império Acádio" },
    TimelineEntry {
        year: -1_500,
        text: "Surgimento da civilização Fenícia no litoral mediterrâneo",
    },
    TimelineEntry { year: -1_100, text: "Desenvolvimento do alfabeto fenício" },
];

pub const LORE: [LoreNote; 6] = [
    LoreNote {
        topic: "O que foi o Crescente Fértil?",
        text: "O Crescente Fértil foi uma região no Oriente Médio onde surgiram as primeiras civilizações humanas, graças ao solo fértil criado pelos rios Tigre, Eufrates e Nilo.",
    },
    LoreNote {
        topic: "Sumérios",
        text: "Os sumérios foram a primeira civilização conhecida, inventando a escrita cuneiforme e construindo grandes zigurates. Desenvolveram-se na Mesopotâmia por volta de 4000 a.C.",
    },
    LoreNote {
        topic: "Agricultura",
        text: "A agricultura surgiu no Crescente Fértil por volta de 10.000 a.C., permitindo que os humanos se estabelecessem em um local fixo e desenvolvessem as primeiras cidades.",
    },
    LoreNote {
        topic: "Acádios",
        text: "Os acádios foram uma civilização semita que conquistou a Suméria sob o comando de Sargão, o Grande, por volta de 2334 a.C. Criaram o primeiro império conhecido da história, unificando a Mesopotâmia.",
    },
    LoreNote {
        topic: "Fenícios",
        text: "Os fenícios foram grandes navegadores e comerciantes, inventando o primeiro alfabeto fonético que influenciou muitas línguas modernas. Estabeleceram-se na costa do Mediterrâneo por volta de 1500 a.C.",
    },
    LoreNote {
        topic: "Escrita",
        text: "A escrita cuneiforme suméria é considerada a primeira forma de escrita, surgindo por volta de 3400 a.C. para registrar transações comerciais. Os acádios adaptaram a escrita suméria para sua própria língua.",
    },
];

/// Look up a lore note by topic.
#[must_use]
pub fn lore(topic: &str) -> Option<&'static LoreNote> {
    LORE.iter().find(|note| note.topic == topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_is_chronological() {
        assert!(TIMELINE.windows(2).all(|w| w[0].year < w[1].year));
    }

    #[test]
    fn test_labels() {
        assert_eq!(TIMELINE[0].label(), "10.000 a.C.");
        assert_eq!(TIMELINE[3].label(), "2.334 a.C.");
        assert_eq!(TIMELINE[6].label(), "1.100 a.C.");
        assert_eq!(TimelineEntry { year: 476, text: "" }.label(), "476 d.C.");
    }

    #[test]
    fn test_lore_lookup() {
        assert!(lore("Fenícios").unwrap().text.contains("alfabeto"));
        assert!(lore("Egípcios").is_none());
    }
}
