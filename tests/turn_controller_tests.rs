//! Turn controller verification tests.
//!
//! Phase transitions, calendar advancement, rejection of illegal actions
//! and deterministic replay, exercised through the `RulesEngine` API.

use fertile_crescent::civilizations::CivilizationId;
use fertile_crescent::core::{
    Action, GameConfig, GameError, GameSession, GameState, Phase, Season,
};
use fertile_crescent::games::crescent::CrescentGame;
use fertile_crescent::rules::RulesEngine;

fn start(game: &CrescentGame, civ: CivilizationId, seed: u64) -> GameState {
    let mut state = GameState::new(seed);
    game.apply_action(&mut state, &Action::SelectCivilization(civ)).unwrap();
    game.apply_action(&mut state, &Action::StartGame).unwrap();
    state
}

/// StartGame resets every field for every civilization.
#[test]
fn test_start_resets_session() {
    let game = CrescentGame::new();

    for civ in CivilizationId::ALL {
        let state = start(&game, civ, 7);
        let session = &state.session;
        let expected = game.civilizations().get(civ).unwrap().starting_resources;

        assert_eq!(session.phase, Phase::Playing);
        assert_eq!(session.resources, expected);
        assert_eq!(session.progress(), 0);
        assert_eq!(session.achievement_count(), 0);
        assert_eq!(session.log().collect::<Vec<_>>(), vec!["Sua jornada como líder começou!"]);
        assert_eq!(session.calendar.year, -3000);
        assert_eq!(session.calendar.season, Season::Primavera);
        assert_eq!(game.current_event(session).unwrap().id, "welcome");
    }
}

/// The configured start year is honoured.
#[test]
fn test_configured_start_year() {
    let config = GameConfig::from_toml_str("starting_year = -2500").unwrap();
    let game = CrescentGame::with_config(config);
    let state = start(&game, CivilizationId::Acadios, 7);

    assert_eq!(state.session.calendar.year, -2500);
    assert_eq!(state.session.calendar.year_label(), "2500 a.C.");
}

/// Seasons cycle once per choice, the year once per cycle.
#[test]
fn test_seasons_and_years() {
    let game = CrescentGame::new();
    let mut state = start(&game, CivilizationId::Sumerios, 8);
    let expected = [
        (Season::Verao, -3000),
        (Season::Outono, -3000),
        (Season::Inverno, -3000),
        (Season::Primavera, -2999),
        (Season::Verao, -2999),
    ];

    for (season, year) in expected {
        // Welcome has a single free choice with no effects.
        game.apply_action(&mut state, &Action::Choose(0)).unwrap();
        assert_eq!(state.session.calendar.season, season);
        assert_eq!(state.session.calendar.year, year);

        game.apply_action(&mut state, &Action::NextEvent).unwrap();
        assert_eq!(state.session.calendar.season, season);
        state.session.current_event = 0;
    }
    assert_eq!(state.session.calendar.to_string(), "Verão, 2999 a.C.");
}

/// Rejected actions leave state, RNG and history untouched.
#[test]
fn test_rejected_actions_leave_state() {
    let game = CrescentGame::new();
    let mut state = start(&game, CivilizationId::Fenicios, 9);
    let session = state.session.clone();
    let rng = state.rng.state();
    let history = state.history_len();

    let rejected = [
        Action::SelectCivilization(CivilizationId::Acadios),
        Action::StartGame,
        Action::Choose(1),
        Action::NextEvent,
    ];
    for action in rejected {
        assert!(game.apply_action(&mut state, &action).is_err(), "{action}");
    }

    assert_eq!(state.session, session);
    assert_eq!(state.rng.state(), rng);
    assert_eq!(state.history_len(), history);
}

/// An event must be answered before the next one is drawn.
#[test]
fn test_next_event_before_choice_rejected() {
    let game = CrescentGame::new();
    let mut state = start(&game, CivilizationId::Acadios, 13);
    let rng = state.rng.state();

    let err = game.apply_action(&mut state, &Action::NextEvent).unwrap_err();
    assert!(matches!(err, GameError::InvalidAction { phase: Phase::Playing, .. }));
    assert_eq!(state.rng.state(), rng);
    assert_eq!(game.current_event(&state.session).unwrap().id, "welcome");
    assert!(state.session.last_outcome.is_none());
}

/// A resolved event cannot be chosen again until it is dismissed.
#[test]
fn test_second_choice_rejected_until_dismissed() {
    let game = CrescentGame::new();
    let mut state = start(&game, CivilizationId::Fenicios, 14);
    state.session.current_event = game.events().index_of("trade_opportunity").unwrap();

    game.apply_action(&mut state, &Action::Choose(1)).unwrap();
    let session = state.session.clone();
    let history = state.history_len();

    let err = game.apply_action(&mut state, &Action::Choose(1)).unwrap_err();
    assert!(matches!(err, GameError::InvalidAction { phase: Phase::Playing, .. }));
    assert_eq!(state.session, session);
    assert_eq!(state.history_len(), history);
    assert_eq!(state.session.progress(), 5);
    assert_eq!(state.session.turn, 1);

    game.apply_action(&mut state, &Action::NextEvent).unwrap();
    assert!(state.session.last_outcome.is_none());
    assert!(game.apply_action(&mut state, &Action::Choose(0)).is_ok());
}

/// Restart returns to civilization selection from any game.
#[test]
fn test_restart() {
    let game = CrescentGame::new();
    let mut state = start(&game, CivilizationId::Acadios, 10);
    game.apply_action(&mut state, &Action::Choose(0)).unwrap();

    game.apply_action(&mut state, &Action::Restart).unwrap();
    assert_eq!(state.session, GameSession::new());

    let err = game.apply_action(&mut state, &Action::Restart).unwrap_err();
    assert!(matches!(
        err,
        GameError::InvalidAction { phase: Phase::CivilizationSelection, .. }
    ));
}

/// Restart keeps the configured start year on the selection screen.
#[test]
fn test_restart_keeps_configured_year() {
    let config = GameConfig::from_toml_str("starting_year = -2500").unwrap();
    let game = CrescentGame::with_config(config);
    let mut state = start(&game, CivilizationId::Sumerios, 15);
    game.apply_action(&mut state, &Action::Choose(0)).unwrap();

    game.apply_action(&mut state, &Action::Restart).unwrap();
    assert_eq!(state.session.phase, Phase::CivilizationSelection);
    assert_eq!(state.session.calendar.year, -2500);
    assert_eq!(state.session.calendar.year_label(), "2500 a.C.");
}

/// History records are numbered in the order they were applied.
#[test]
fn test_history_sequence_numbers() {
    let game = CrescentGame::new();
    let mut state = start(&game, CivilizationId::Acadios, 16);
    for _ in 0..3 {
        game.apply_action(&mut state, &Action::Choose(0)).unwrap();
        game.apply_action(&mut state, &Action::NextEvent).unwrap();
    }

    let sequences: Vec<usize> = state.history().map(|record| record.sequence).collect();
    assert_eq!(sequences, (0..state.history_len()).collect::<Vec<_>>());
    assert_eq!(state.history_len(), 8);
}

/// Legal actions are accepted and nothing else is.
#[test]
fn test_legal_actions_are_exhaustive() {
    let game = CrescentGame::new();
    let mut state = start(&game, CivilizationId::Sumerios, 11);
    let candidates = [
        Action::SelectCivilization(CivilizationId::Sumerios),
        Action::StartGame,
        Action::Choose(0),
        Action::Choose(1),
        Action::NextEvent,
        Action::Restart,
    ];

    let check = |state: &GameState| {
        let legal = game.legal_actions(&state.session);
        for action in &candidates {
            let mut trial = state.clone();
            let accepted = game.apply_action(&mut trial, action).is_ok();
            assert_eq!(accepted, legal.contains(action), "{action}");
        }
    };

    check(&state);
    game.apply_action(&mut state, &Action::Choose(0)).unwrap();
    check(&state);
}

/// Replaying the recorded actions from the seed reproduces the session.
#[test]
fn test_replay_determinism() {
    let game = CrescentGame::new();
    let mut state = start(&game, CivilizationId::Fenicios, 12);

    for step in 0..40 {
        let choices = game.current_event(&state.session).unwrap().choices.len();
        game.apply_action(&mut state, &Action::Choose(step % choices)).unwrap();
        if game.is_terminal(&state.session).is_some() {
            break;
        }
        game.apply_action(&mut state, &Action::NextEvent).unwrap();
    }

    let actions: Vec<Action> = state.history().map(|record| record.action).collect();
    let replayed = game.replay(state.seed(), &actions).unwrap();

    assert_eq!(replayed.session, state.session);
    assert_eq!(replayed.history_len(), state.history_len());
}

/// Different seeds draw different event sequences.
#[test]
fn test_seeds_diverge() {
    let game = CrescentGame::new();
    let draws = |seed| {
        let mut state = start(&game, CivilizationId::Acadios, seed);
        let welcomed = game.apply_action(&mut state, &Action::Choose(0)).unwrap();
        (0..20)
            .map(|_| {
                state.session.last_outcome = welcomed.clone();
                game.apply_action(&mut state, &Action::NextEvent).unwrap();
                state.session.current_event
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(draws(1), draws(1));
    assert_ne!(draws(1), draws(2));
}
