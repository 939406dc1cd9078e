//! The twelve historical events and their choices.
//!
//! Table order is significant: `welcome` opens every game at index 0 and
//! `victory` is the single final event.

use crate::civilizations::CivilizationId::{Acadios, Fenicios, Sumerios};
use crate::core::Cost;
use crate::core::ResourceKind::{Gold, Grain, Population, Wood};
use crate::effects::{Outcome, Resolution};
use crate::events::{Choice, Event, EventTable};

/// Achievement names unlocked by the event table.
pub mod achievements {
    pub const HYDRAULIC_ENGINEER: &str = "Engenheiro Hidráulico";
    pub const WRITING_INVENTOR: &str = "Inventor da Escrita";
    pub const SEASONED_TRADER: &str = "Comerciante Experiente";
    pub const AKKADIAN_CONQUEROR: &str = "Conquistador Acádio";
    pub const MILITARY_LEADER: &str = "Líder Militar";
    pub const ZIGGURAT_BUILDER: &str = "Construtor de Zigurate";
    pub const PALACE_BUILDER: &str = "Construtor de Palácio";
    pub const TEMPLE_BUILDER: &str = "Construtor de Templo";
    pub const WHEEL_INVENTOR: &str = "Inventor da Roda";
}

use achievements::*;

/// Build the event table in its canonical order.
#[must_use]
pub fn events() -> EventTable {
    let mut table = EventTable::new();
    table.push(welcome());
    table.push(river_flood());
    table.push(nomad_invasion());
    table.push(famine());
    table.push(writing());
    table.push(trade_opportunity());
    table.push(military_campaign());
    table.push(monument());
    table.push(disease());
    table.push(wheel());
    table.push(harvest_festival());
    table.push(victory());
    table
}

fn welcome() -> Event {
    Event::new("welcome", "Bem-vindo ao Crescente Fértil!")
        .with_description(
            "Você acaba de se tornar líder do seu povo. Seu objetivo é guiá-los para se tornar uma grande civilização.",
        )
        .with_choice(Choice::new(
            "Começar jornada",
            Outcome::new(
                "Sua jornada como líder começou!",
                "Que sua liderança seja sábia e próspera!",
            ),
        ))
}

fn river_flood() -> Event {
    Event::new("river_flood", "Cheia do Rio")
        .with_description(
            "As águas do rio estão subindo rapidamente. Isso pode ser uma bênção para a agricultura ou uma ameaça para os assentamentos.",
        )
        .with_choice(Choice::new(
            "Construir diques (custa 2 madeira)",
            Resolution::gated(
                Cost::of(Wood, 2),
                Outcome::new(
                    "Você construiu diques e salvou suas plantações!",
                    "Seus diques protegeram as plantações. +3 grãos na próxima colheita!",
                )
                .gain(Grain, 3)
                .unlock(HYDRAULIC_ENGINEER),
                Outcome::new(
                    "Você não tinha madeira suficiente para os diques!",
                    "Você não tem madeira suficiente! As cheias destruíram parte da colheita. -1 grão.",
                )
                .lose(Grain, 1),
            ),
        ))
        .with_choice(Choice::new(
            "Fazer oferendas aos deuses do rio",
            Resolution::chance(
                0.3,
                Outcome::new(
                    "Os deuses aceitaram suas oferendas!",
                    "As cheias foram moderadas e trouxeram fertilidade. +2 grãos!",
                )
                .gain(Grain, 2),
                Outcome::new(
                    "As oferendas não foram suficientes!",
                    "As oferendas não foram suficientes. As águas destruíram parte das plantações. -2 grãos.",
                )
                .lose(Grain, 2),
            ),
        ))
        .with_choice(Choice::new(
            "Evacuar para terrenos mais altos",
            Outcome::new(
                "Seu povo se salvou, mas perdeu parte da colheita.",
                "Seu povo está seguro, mas perdeu parte da colheita. -1 grão.",
            )
            .lose(Grain, 1),
        ))
}

fn nomad_invasion() -> Event {
    Event::new("nomad_invasion", "Invasão Nômade")
        .with_description(
            "Grupos nômades estão atacando suas terras! Eles ameaçam saquear seus recursos e prejudicar seu povo.",
        )
        .with_choice(Choice::new(
            "Lutar contra os invasores",
            Resolution::chance(
                0.4,
                Resolution::for_civilization(
                    Acadios,
                    Outcome::new(
                        "Como acádios, você incorporou alguns dos nômades ao seu exército!",
                        "Vitória! Seus guerreiros derrotaram os invasores e capturaram seus tesouros. +1 ouro. Como acádios, você ganhou +2 pessoas ao incorporar os derrotados.",
                    )
                    .gain(Gold, 1)
                    .gain(Population, 2),
                    Outcome::new(
                        "Você derrotou os invasores e tomou seus recursos!",
                        "Vitória! Seus guerreiros derrotaram os invasores e capturaram seus tesouros. +1 ouro.",
                    )
                    .gain(Gold, 1),
                ),
                Outcome::new(
                    "Você perdeu a batalha contra os nômades!",
                    "Derrota! Seus guerreiros foram derrotados e alguns foram mortos. -2 pessoas.",
                )
                .lose(Population, 2),
            ),
        ))
        .with_choice(Choice::new(
            "Negociar com os invasores (custa 1 ouro)",
            Resolution::gated(
                Cost::of(Gold, 1),
                Outcome::new(
                    "Você pagou os nômades para irem embora.",
                    "Paz negociada. Os nômades aceitaram seu ouro e foram embora. -1 ouro.",
                ),
                Outcome::new(
                    "Sem ouro, você teve que oferecer grãos aos nômades.",
                    "Você não tem ouro. Os nômades aceitaram grãos como pagamento. -3 grãos.",
                )
                .lose(Grain, 3),
            ),
        ))
        .with_choice(Choice::new(
            "Oferecer aliança e integração",
            Resolution::chance(
                0.5,
                Resolution::for_civilization(
                    Acadios,
                    Outcome::new(
                        "Como acádios, você é habilidoso em integrar outros povos!",
                        "Aliança formada! Como acádios, você integrou mais nômades à sua civilização. +3 pessoas, +5% progresso.",
                    )
                    .gain(Population, 3)
                    .progress(5),
                    Outcome::new(
                        "Os nômades aceitaram sua oferta e se juntaram ao seu povo!",
                        "Aliança formada! Alguns nômades se juntaram à sua civilização. +2 pessoas, +5% progresso.",
                    )
                    .gain(Population, 2)
                    .progress(5),
                ),
                Outcome::new(
                    "Os nômades rejeitaram sua oferta e levaram alguns recursos.",
                    "Oferta rejeitada. Os nômades levaram alguns recursos antes de partir. -2 grãos.",
                )
                .lose(Grain, 2),
            ),
        ))
}

fn famine() -> Event {
    Event::new("famine", "Fome na Cidade")
        .with_description(
            "As colheitas foram ruins e o povo está com fome. A situação pode piorar se não for resolvida rapidamente.",
        )
        .with_choice(Choice::new(
            "Distribuir grãos igualmente (custa 4 grãos)",
            Resolution::gated(
                Cost::of(Grain, 4),
                Outcome::new(
                    "Seu povo está grato pela sua generosidade!",
                    "O povo está feliz com sua liderança justa. A população aumentou. -4 grãos, +1 pessoa.",
                )
                .gain(Population, 1),
                Outcome::new(
                    "Não havia grãos suficientes e algumas pessoas morreram de fome.",
                    "Não há grãos suficientes. Algumas pessoas morreram de fome. -2 pessoas.",
                )
                .lose(Population, 2),
            ),
        ))
        .with_choice(Choice::new(
            "Racionar comida (custa 2 grãos)",
            Resolution::gated(
                Cost::of(Grain, 2),
                Outcome::new(
                    "O racionamento foi suficiente para evitar mortes.",
                    "Racionamento implementado. O povo sobreviveu, mas não está feliz. -2 grãos.",
                ),
                Outcome::new(
                    "Não havia grãos suficientes nem para o racionamento.",
                    "Grãos insuficientes até para o racionamento. -1 pessoa.",
                )
                .lose(Population, 1),
            ),
        ))
        .with_choice(Choice::new(
            "Organizar expedição de caça",
            Resolution::chance(
                0.4,
                Outcome::new(
                    "A expedição de caça foi bem-sucedida!",
                    "A caça foi bem-sucedida! Seu povo conseguiu comida adicional. +1 grão.",
                )
                .gain(Grain, 1),
                Outcome::new(
                    "A expedição de caça foi perigosa e um caçador não retornou.",
                    "A caça foi perigosa. Um caçador não retornou. -1 pessoa.",
                )
                .lose(Population, 1),
            ),
        ))
}

fn writing() -> Event {
    Event::new("writing", "Descoberta da Escrita")
        .with_description(
            "Seus escribas desenvolveram um sistema para registrar informações usando símbolos em tábuas de argila.",
        )
        .with_choice(Choice::new(
            "Investir na escrita (custa 1 ouro)",
            Resolution::gated(
                Cost::of(Gold, 1),
                Resolution::for_civilization(
                    Sumerios,
                    Outcome::new(
                        "Sua civilização avançou com a escrita!",
                        "A escrita cuneiforme revoluciona sua sociedade! +25% progresso (bônus sumério).",
                    )
                    .progress(25)
                    .unlock(WRITING_INVENTOR),
                    Outcome::new(
                        "Sua civilização avançou com a escrita!",
                        "A escrita acelera seu progresso! +20% progresso civilizacional.",
                    )
                    .progress(20)
                    .unlock(WRITING_INVENTOR),
                ),
                Outcome::new(
                    "Você não tem ouro para investir na escrita.",
                    "Você não tem ouro para investir. A escrita permanece como uma curiosidade.",
                ),
            ),
        ))
        .with_choice(Choice::new(
            "Focar apenas em registros comerciais",
            Outcome::new(
                "A escrita é usada apenas para registros comerciais.",
                "Você limitou a escrita aos registros comerciais. +10% progresso.",
            )
            .progress(10),
        ))
        .with_choice(Choice::new(
            "Ignorar a escrita",
            Outcome::new(
                "Você decidiu que a escrita não é importante.",
                "Você perdeu uma oportunidade de progresso. A tradição oral continua sendo o único meio de transmitir conhecimento.",
            ),
        ))
        .restricted_to(Sumerios)
}

fn trade_opportunity() -> Event {
    Event::new("trade_opportunity", "Oportunidade Comercial")
        .with_description("Mercadores estrangeiros oferecem uma rota comercial lucrativa com terras distantes.")
        .with_choice(Choice::new(
            "Investir em comércio (custa 2 madeira)",
            Resolution::gated(
                Cost::of(Wood, 2),
                Resolution::for_civilization(
                    Fenicios,
                    Outcome::new(
                        "Seu comércio floresce!",
                        "Rotas comerciais estabelecidas! Como fenícios, vocês são mestres do comércio. -2 madeira, +4 ouro, +10% progresso.",
                    )
                    .gain(Gold, 4)
                    .progress(10)
                    .unlock(SEASONED_TRADER),
                    Outcome::new(
                        "Seu comércio floresce!",
                        "Rotas comerciais estabelecidas! -2 madeira, +3 ouro, +10% progresso.",
                    )
                    .gain(Gold, 3)
                    .progress(10)
                    .unlock(SEASONED_TRADER),
                ),
                Outcome::new(
                    "Você não tem madeira para construir barcos comerciais.",
                    "Você não tem madeira para construir barcos comerciais. A oportunidade foi perdida.",
                ),
            ),
        ))
        .with_choice(Choice::new(
            "Trocar conhecimentos (sem custo)",
            Outcome::new(
                "Você trocou conhecimentos com os mercadores.",
                "Você trocou conhecimentos com os mercadores estrangeiros. +5% progresso.",
            )
            .progress(5),
        ))
        .with_choice(Choice::new(
            "Recusar a oferta",
            Outcome::new(
                "Você recusou a oferta comercial.",
                "Você manteve seus recursos, mas perdeu a oportunidade de expandir seu comércio.",
            ),
        ))
        .restricted_to(Fenicios)
}

fn military_campaign() -> Event {
    Event::new("military_campaign", "Campanha Militar")
        .with_description(
            "Seus conselheiros sugerem uma campanha militar para expandir seu território e subjugar povos vizinhos.",
        )
        .with_choice(Choice::new(
            "Liderar uma grande campanha (custa 3 madeira, 2 grãos)",
            Resolution::gated(
                Cost::of(Wood, 3).and(Grain, 2),
                Resolution::for_civilization(
                    Acadios,
                    Outcome::new(
                        "Sua campanha militar foi um grande sucesso! Como acádios, vocês são mestres da guerra!",
                        "Vitória gloriosa! Como acádios, vocês conquistaram novos territórios e povos. -3 madeira, -2 grãos, +2 ouro, +3 pessoas, +20% progresso.",
                    )
                    .gain(Gold, 2)
                    .gain(Population, 3)
                    .progress(20)
                    .unlock(AKKADIAN_CONQUEROR),
                    Outcome::new(
                        "Sua campanha militar foi bem-sucedida!",
                        "Vitória! Você expandiu seu território. -3 madeira, -2 grãos, +2 ouro, +1 pessoa, +20% progresso.",
                    )
                    .gain(Gold, 2)
                    .gain(Population, 1)
                    .progress(20)
                    .unlock(MILITARY_LEADER),
                ),
                Outcome::new(
                    "Recursos insuficientes para a campanha militar.",
                    "Recursos insuficientes para a campanha militar. Seus guerreiros não estão preparados.",
                ),
            ),
        ))
        .with_choice(Choice::new(
            "Enviar uma pequena força (custa 1 madeira, 1 grão)",
            Resolution::gated(
                Cost::of(Wood, 1).and(Grain, 1),
                Outcome::new(
                    "Sua pequena força teve algum sucesso.",
                    "Pequena vitória. Você conquistou um pequeno território. -1 madeira, -1 grão, +1 ouro, +5% progresso.",
                )
                .gain(Gold, 1)
                .progress(5),
                Outcome::new(
                    "Recursos insuficientes até para uma pequena força.",
                    "Recursos insuficientes até para uma pequena força. A campanha foi cancelada.",
                ),
            ),
        ))
        .with_choice(Choice::new(
            "Manter a paz",
            Outcome::new(
                "Você decidiu manter a paz com seus vizinhos.",
                "Você decidiu manter a paz. Seu povo pode se concentrar no desenvolvimento interno. +2% progresso.",
            )
            .progress(2),
        ))
        .restricted_to(Acadios)
}

fn monument() -> Event {
    Event::new("monument", "Construir um Monumento")
        .with_description("Seu povo quer construir um grande monumento para mostrar seu poder e honrar os deuses.")
        .with_choice(Choice::new(
            "Construir um grande monumento (custa 3 madeira, 2 ouro)",
            Resolution::gated(
                Cost::of(Wood, 3).and(Gold, 2),
                Resolution::by_civilization(
                    [
                        (
                            Sumerios,
                            Resolution::from(Outcome::new(
                                "Seu zigurate impressiona todos!",
                                "Zigurate concluído! Este imponente templo em forma de torre demonstra seu poder. +25% progresso.",
                            )
                            .progress(25)
                            .unlock(ZIGGURAT_BUILDER)),
                        ),
                        (
                            Acadios,
                            Resolution::from(Outcome::new(
                                "Seu palácio impressiona todos!",
                                "Palácio concluído! Este monumento demonstra o poder do seu império. +25% progresso.",
                            )
                            .progress(25)
                            .unlock(PALACE_BUILDER)),
                        ),
                    ],
                    Outcome::new(
                        "Seu templo impressiona todos!",
                        "Templo concluído! Este monumento demonstra seu poder. +25% progresso.",
                    )
                    .progress(25)
                    .unlock(TEMPLE_BUILDER),
                ),
                Outcome::new(
                    "Recursos insuficientes para a construção.",
                    "Recursos insuficientes para a construção. O projeto foi adiado.",
                ),
            ),
        ))
        .with_choice(Choice::new(
            "Construir um monumento menor (custa 1 madeira, 1 ouro)",
            Resolution::gated(
                Cost::of(Wood, 1).and(Gold, 1),
                Resolution::by_civilization(
                    [
                        (
                            Sumerios,
                            Resolution::from(
                                Outcome::new(
                                    "Você construiu um pequeno zigurate.",
                                    "Pequeno zigurate concluído. +10% progresso.",
                                )
                                .progress(10),
                            ),
                        ),
                        (
                            Acadios,
                            Resolution::from(
                                Outcome::new(
                                    "Você construiu um pequeno palácio.",
                                    "Pequeno palácio concluído. +10% progresso.",
                                )
                                .progress(10),
                            ),
                        ),
                    ],
                    Outcome::new(
                        "Você construiu um pequeno templo.",
                        "Pequeno templo concluído. +10% progresso.",
                    )
                    .progress(10),
                ),
                Outcome::new(
                    "Recursos insuficientes até para o monumento menor.",
                    "Recursos insuficientes até para o monumento menor. O projeto foi cancelado.",
                ),
            ),
        ))
        .with_choice(Choice::new(
            "Recusar a construção",
            Outcome::new(
                "Você decidiu não construir um monumento.",
                "Você decidiu focar em necessidades mais práticas. O povo está um pouco desapontado.",
            ),
        ))
}

fn disease() -> Event {
    Event::new("disease", "Doença na Cidade")
        .with_description("Uma doença misteriosa está afetando seu povo. Muitos estão doentes e alguns já morreram.")
        .with_choice(Choice::new(
            "Consultar os sacerdotes (custa 1 ouro)",
            Resolution::gated(
                Cost::of(Gold, 1),
                Resolution::chance(
                    0.5,
                    Outcome::new(
                        "Os rituais dos sacerdotes funcionaram!",
                        "A doença foi contida graças aos rituais e ervas medicinais dos sacerdotes. -1 ouro.",
                    ),
                    Outcome::new(
                        "Os rituais dos sacerdotes falharam!",
                        "Os rituais falharam. A doença se espalhou. -1 ouro, -3 pessoas.",
                    )
                    .lose(Population, 3),
                ),
                Outcome::new(
                    "Sem ouro para os rituais, a doença se espalhou.",
                    "Sem ouro para os rituais, a doença se espalhou. -2 pessoas.",
                )
                .lose(Population, 2),
            ),
        ))
        .with_choice(Choice::new(
            "Isolar os doentes",
            Outcome::new(
                "O isolamento ajudou a conter a doença.",
                "Isolamento reduziu o contágio, mas alguns não sobreviveram. -1 pessoa.",
            )
            .lose(Population, 1),
        ))
        .with_choice(Choice::new(
            "Usar ervas medicinais (custa 2 grãos)",
            Resolution::gated(
                Cost::of(Grain, 2),
                Outcome::new(
                    "As ervas medicinais ajudaram a curar os doentes.",
                    "As ervas medicinais ajudaram a curar os doentes. -2 grãos.",
                ),
                Outcome::new(
                    "Sem ervas suficientes, a doença se espalhou.",
                    "Sem ervas suficientes, a doença se espalhou. -2 pessoas.",
                )
                .lose(Population, 2),
            ),
        ))
}

fn wheel() -> Event {
    Event::new("wheel", "Descoberta da Roda")
        .with_description("Seus inventores criaram um dispositivo circular que facilita o transporte e outras tarefas.")
        .with_choice(Choice::new(
            "Produzir rodas em massa (custa 2 madeira)",
            Resolution::gated(
                Cost::of(Wood, 2),
                Outcome::new(
                    "A roda revoluciona seu transporte!",
                    "A roda acelera seu progresso! Carroças e ferramentas com rodas melhoram a eficiência. +15% progresso.",
                )
                .progress(15)
                .unlock(WHEEL_INVENTOR),
                Outcome::new(
                    "Você não tem madeira suficiente para produzir rodas.",
                    "Você não tem madeira suficiente para produzir rodas em massa.",
                ),
            ),
        ))
        .with_choice(Choice::new(
            "Usar a roda apenas para olaria (custa 1 madeira)",
            Resolution::gated(
                Cost::of(Wood, 1),
                Outcome::new(
                    "A roda de oleiro melhora a produção de cerâmica.",
                    "A roda de oleiro melhora a produção de cerâmica. +8% progresso.",
                )
                .progress(8),
                Outcome::new(
                    "Você não tem madeira suficiente nem para a roda de oleiro.",
                    "Você não tem madeira suficiente nem para a roda de oleiro.",
                ),
            ),
        ))
        .with_choice(Choice::new(
            "Ignorar a invenção",
            Outcome::new(
                "Você decidiu que a roda não é importante.",
                "Você perdeu uma oportunidade de progresso tecnológico.",
            ),
        ))
}

fn harvest_festival() -> Event {
    Event::new("harvest_festival", "Festa da Colheita")
        .with_description("É tempo de celebrar as boas colheitas e agradecer aos deuses pela fertilidade da terra.")
        .with_choice(Choice::new(
            "Realizar grande festa (custa 3 grãos)",
            Resolution::gated(
                Cost::of(Grain, 3),
                Outcome::new(
                    "Seu povo está muito feliz com a festa!",
                    "Festa memorável! O povo está feliz e a população aumentou. -3 grãos, +2 pessoas.",
                )
                .gain(Population, 2),
                Outcome::new(
                    "Não há grãos suficientes para a festa.",
                    "Não há grãos suficientes para a festa. O povo está desapontado.",
                ),
            ),
        ))
        .with_choice(Choice::new(
            "Festa modesta (custa 1 grão)",
            Resolution::gated(
                Cost::of(Grain, 1),
                Outcome::new(
                    "A festa foi agradável.",
                    "Festa agradável. O povo está satisfeito. -1 grão, +1 pessoa.",
                )
                .gain(Population, 1),
                Outcome::new(
                    "Sem grãos, não houve festa este ano.",
                    "Sem festa este ano. O povo está desapontado.",
                ),
            ),
        ))
        .with_choice(Choice::new(
            "Fazer apenas rituais religiosos",
            Outcome::new(
                "Os rituais religiosos fortaleceram a fé do povo.",
                "Os rituais religiosos fortaleceram a fé do povo. +3% progresso.",
            )
            .progress(3),
        ))
}

const VICTORY_MESSAGE: &str =
    "Parabéns pela sua vitória! Você pode jogar novamente e tentar uma civilização diferente.";

fn victory() -> Event {
    Event::new("victory", "Vitória!")
        .with_description("Sua civilização alcançou grande desenvolvimento e se tornou uma potência do mundo antigo!")
        .with_choice(Choice::new(
            "Jogar novamente",
            Outcome::new(VICTORY_MESSAGE, VICTORY_MESSAGE),
        ))
        .final_event()
}
