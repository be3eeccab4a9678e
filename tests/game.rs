//! Game integration tests.

#![allow(clippy::float_cmp)]

mod common;

use common::{Scripted, active_name, in_finale, quiet_options, scripted_game, started};
use giftwheel::content::{FINALE_CARD, ROUND_1_CARDS, ROUND_2_CARDS, WELCOME_CARD, WHEEL_SEGMENTS};
use giftwheel::{
    Command, Effect, EffectType, Game, GameError, GameOptions, GamePhase, SetupError, TimerError,
    TransitionError, TurnError, TurnOutcome, WheelError,
};

#[test]
fn new_game_waits_in_setup_with_blank_slots() {
    let game = Game::new(GameOptions::default(), 1);

    assert_eq!(game.phase(), GamePhase::Setup);
    assert_eq!(game.slots(), vec![String::new(); 5]);
    assert!(game.players().is_empty());
    assert!(game.active_player().is_none());
    assert!(game.current_card().is_none());
}

#[test]
fn start_game_needs_two_valid_names() {
    let game = Game::new(GameOptions::default(), 1);

    assert_eq!(
        game.start_game(&["  ", "Ann", ""]).unwrap_err(),
        SetupError::TooFewPlayers
    );
    assert_eq!(game.phase(), GamePhase::Setup);
    assert!(game.players().is_empty());
    assert_eq!(
        game.start_game::<&str>(&[]).unwrap_err(),
        SetupError::TooFewPlayers
    );
}

#[test]
fn start_game_trims_names_and_shows_welcome() {
    let game = Game::new(GameOptions::default(), 1);
    game.start_game(&["  Ann ", "", "Bas", "\t"]).unwrap();

    let names: Vec<_> = game
        .players()
        .iter()
        .map(|p| p.name().to_string())
        .collect();
    assert_eq!(names, ["Ann", "Bas"]);
    assert_eq!(game.phase(), GamePhase::Round1);
    assert_eq!(game.turn().active_player, 0);
    assert_eq!(game.turn().turn_counter, 0);
    assert_eq!(game.current_card(), Some(WELCOME_CARD));
    assert_eq!(game.current_card().unwrap().effect, EffectType::Info);

    assert_eq!(
        game.start_game(&["Cor", "Dirk"]).unwrap_err(),
        SetupError::InvalidState
    );
}

#[test]
fn player_slots_are_editable_during_setup() {
    let game = Game::new(GameOptions::default().with_player_slots(3), 1);

    game.set_player_name(0, "Ann").unwrap();
    game.set_player_name(2, " Cor ").unwrap();
    assert_eq!(
        game.set_player_name(3, "Dirk").unwrap_err(),
        SetupError::SlotNotFound
    );
    assert_eq!(game.add_player_slot().unwrap(), 3);
    game.set_player_name(3, "Dirk").unwrap();

    game.remove_player_slot(1).unwrap();
    assert_eq!(game.slots(), ["Ann", " Cor ", "Dirk"]);
    assert_eq!(
        game.remove_player_slot(9).unwrap_err(),
        SetupError::SlotNotFound
    );

    game.remove_player_slot(2).unwrap();
    assert_eq!(
        game.remove_player_slot(0).unwrap_err(),
        SetupError::TooFewSlots
    );

    game.start_game_from_slots().unwrap();
    assert_eq!(game.slots(), ["Ann", "Cor"]);
    assert_eq!(
        game.set_player_name(0, "Eva").unwrap_err(),
        SetupError::InvalidState
    );
    assert_eq!(game.add_player_slot().unwrap_err(), SetupError::InvalidState);
}

#[test]
fn advance_phase_rejects_skips_and_reversals() {
    let game = Game::new(GameOptions::default(), 1);

    assert_eq!(
        game.advance_phase(GamePhase::Round2).unwrap_err(),
        GameError::Transition(TransitionError::InvalidTransition {
            from: GamePhase::Setup,
            to: GamePhase::Round2,
        })
    );
    assert!(game.advance_phase(GamePhase::Setup).is_err());
    assert_eq!(game.phase(), GamePhase::Setup);

    game.start_game(&["A", "B"]).unwrap();
    assert!(game.advance_phase(GamePhase::Setup).is_err());
    assert!(game.advance_phase(GamePhase::Finished).is_err());
    assert_eq!(
        game.start_round2().unwrap_err(),
        TransitionError::InvalidTransition {
            from: GamePhase::Round1,
            to: GamePhase::Round2,
        }
    );
    assert_eq!(game.phase(), GamePhase::Round1);
}

#[test]
fn advance_phase_walks_the_whole_session() {
    let game = Game::new(GameOptions::default().with_player_slots(2), 1);

    assert_eq!(
        game.advance_phase(GamePhase::Round1).unwrap_err(),
        GameError::Setup(SetupError::TooFewPlayers)
    );

    game.set_player_name(0, "Ann").unwrap();
    game.set_player_name(1, "Bas").unwrap();
    for phase in [
        GamePhase::Round1,
        GamePhase::Intermission,
        GamePhase::Round2,
        GamePhase::Finished,
    ] {
        game.advance_phase(phase).unwrap();
        assert_eq!(game.phase(), phase);
    }

    assert!(!game.timer().is_running());
    assert!(game.advance_phase(GamePhase::Setup).is_err());
}

#[test]
fn turns_rotate_through_players_without_wheel() {
    let options = quiet_options().with_wheel_interval(0);
    let game = started(options, Scripted::new());

    for turn in 1..=7 {
        match game.advance_turn().unwrap() {
            TurnOutcome::Drew { card, reveal } => {
                assert!(ROUND_1_CARDS.contains(&card));
                assert!(reveal.is_none());
                assert_eq!(game.current_card(), Some(card));
            }
            TurnOutcome::WheelTriggered => panic!("wheel opened on turn {turn}"),
        }
        assert_eq!(game.turn().turn_counter, turn);
        assert_eq!(game.turn().active_player, turn as usize % 3);
    }
}

#[test]
fn card_draw_uses_injected_randomness() {
    let game = started(quiet_options(), Scripted::new().with_indices(&[3, 6]));

    let TurnOutcome::Drew { card, .. } = game.advance_turn().unwrap() else {
        panic!("expected a card");
    };
    assert_eq!(card, ROUND_1_CARDS[3]);

    let TurnOutcome::Drew { card, .. } = game.advance_turn().unwrap() else {
        panic!("expected a card");
    };
    assert_eq!(card, ROUND_1_CARDS[6]);
}

#[test]
fn every_fifth_turn_opens_the_wheel() {
    let game = started(quiet_options(), Scripted::new());

    for _ in 0..4 {
        assert!(matches!(
            game.advance_turn().unwrap(),
            TurnOutcome::Drew { .. }
        ));
    }
    let before = game.turn().active_player;
    let card_before = game.current_card();

    assert_eq!(game.advance_turn().unwrap(), TurnOutcome::WheelTriggered);
    assert_eq!(game.turn().turn_counter, 5);
    assert_eq!(game.turn().active_player, before);
    assert_eq!(game.current_card(), card_before);
    assert!(game.wheel().is_visible());
    assert!(game.wheel().result().is_none());

    assert_eq!(game.advance_turn().unwrap_err(), TurnError::WheelOpen);
    assert_eq!(game.turn().turn_counter, 5);
}

#[test]
fn surprise_wheel_fires_below_the_chance() {
    let options = GameOptions::default().with_wheel_chance(0.05);
    let game = started(options, Scripted::new().with_units(&[0.5, 0.04]));

    assert!(matches!(
        game.advance_turn().unwrap(),
        TurnOutcome::Drew { .. }
    ));
    assert_eq!(game.advance_turn().unwrap(), TurnOutcome::WheelTriggered);
    assert_eq!(game.turn().turn_counter, 2);
}

#[test]
fn turns_are_rejected_outside_rounds() {
    let game = scripted_game(quiet_options(), Scripted::new());
    assert_eq!(game.advance_turn().unwrap_err(), TurnError::InvalidState);

    game.start_game(&["A", "B"]).unwrap();
    game.proceed_to_intermission().unwrap();
    assert_eq!(game.advance_turn().unwrap_err(), TurnError::InvalidState);
}

#[test]
fn finale_draws_from_its_own_deck_and_restarts_the_count() {
    let game = started(quiet_options(), Scripted::new().with_indices(&[0, 0, 4]));
    game.advance_turn().unwrap();
    game.advance_turn().unwrap();
    let active = game.turn().active_player;

    game.proceed_to_intermission().unwrap();
    game.start_round2().unwrap();
    assert_eq!(game.turn().turn_counter, 0);
    assert_eq!(game.turn().active_player, active);
    assert_eq!(game.current_card(), Some(FINALE_CARD));

    let TurnOutcome::Drew { card, .. } = game.advance_turn().unwrap() else {
        panic!("expected a card");
    };
    assert_eq!(card, ROUND_2_CARDS[4]);
    assert_eq!(game.turn().turn_counter, 1);
}

#[test]
fn meta_card_blanks_the_timer_until_revealed() {
    let meta = ROUND_2_CARDS
        .iter()
        .position(|card| card.effect == EffectType::Meta)
        .unwrap();
    let game = in_finale(quiet_options(), Scripted::new().with_indices(&[meta, meta]));

    let TurnOutcome::Drew { reveal, .. } = game.advance_turn().unwrap() else {
        panic!("expected a card");
    };
    let first = reveal.unwrap();
    assert!(game.timer().is_hidden());
    assert!(game.timer().is_running());
    assert_eq!(game.snapshot().timer.display, "??:??");

    let TurnOutcome::Drew { reveal, .. } = game.advance_turn().unwrap() else {
        panic!("expected a card");
    };
    let second = reveal.unwrap();

    assert!(game.reveal_timer(first).is_err());
    assert!(game.timer().is_hidden());
    game.reveal_timer(second).unwrap();
    assert!(!game.timer().is_hidden());
    assert_eq!(game.snapshot().timer.display, "45:00");
}

#[test]
fn meta_card_leaves_timer_alone_when_blackout_is_off() {
    let meta = ROUND_2_CARDS
        .iter()
        .position(|card| card.effect == EffectType::Meta)
        .unwrap();
    let options = quiet_options().with_timer_blackout(false);
    let game = in_finale(options, Scripted::new().with_indices(&[meta]));

    let TurnOutcome::Drew { card, reveal } = game.advance_turn().unwrap() else {
        panic!("expected a card");
    };
    assert_eq!(card.effect, EffectType::Meta);
    assert!(reveal.is_none());
    assert!(!game.timer().is_hidden());
}

#[test]
fn finishing_ends_a_blackout() {
    let meta = ROUND_2_CARDS
        .iter()
        .position(|card| card.effect == EffectType::Meta)
        .unwrap();
    let options = quiet_options().with_round2_secs(2);
    let game = in_finale(options, Scripted::new().with_indices(&[meta, meta]));

    let TurnOutcome::Drew { reveal, .. } = game.advance_turn().unwrap() else {
        panic!("expected a card");
    };
    let ticket = reveal.unwrap();
    game.tick().unwrap();
    game.tick().unwrap();

    let view = game.snapshot();
    assert_eq!(view.phase, GamePhase::Finished);
    assert!(!view.timer.hidden);
    assert_eq!(view.timer.display, "0:00");
    assert_eq!(game.reveal_timer(ticket).unwrap_err(), TimerError::StaleReveal);

    let game = in_finale(quiet_options(), Scripted::new().with_indices(&[meta]));
    let TurnOutcome::Drew { reveal, .. } = game.advance_turn().unwrap() else {
        panic!("expected a card");
    };
    game.finish().unwrap();
    assert!(!game.timer().is_hidden());
    assert_eq!(game.snapshot().timer.display, "45:00");
    assert!(game.reveal_timer(reveal.unwrap()).is_err());
}

#[test]
fn three_player_session_with_a_wheel_interruption() {
    let game = started(quiet_options(), Scripted::new().with_indices(&[0, 0, 0, 0, 5]));
    assert_eq!(game.phase(), GamePhase::Round1);
    assert_eq!(active_name(&game), "A");

    let TurnOutcome::Drew { card, .. } = game.advance_turn().unwrap() else {
        panic!("expected a card");
    };
    assert!(ROUND_1_CARDS.contains(&card));
    assert_eq!(active_name(&game), "B");
    assert_eq!(game.turn().turn_counter, 1);

    for _ in 0..3 {
        game.advance_turn().unwrap();
    }
    assert_eq!(active_name(&game), "B");

    assert_eq!(game.advance_turn().unwrap(), TurnOutcome::WheelTriggered);
    assert_eq!(game.turn().turn_counter, 5);
    assert_eq!(active_name(&game), "B");

    let ticket = game.spin().unwrap();
    assert!(game.wheel().result().is_none());
    let outcome = game.settle_spin(ticket).unwrap();
    assert_eq!(outcome, 5);
    assert_eq!(game.wheel().result(), Some(5));

    let card = game.close_wheel().unwrap();
    assert_eq!(active_name(&game), "C");
    assert_eq!(game.turn().turn_counter, 5);
    assert_eq!(card.effect, EffectType::Chaos);
    assert!(card.text().contains(&*WHEEL_SEGMENTS[5].text));
    assert_eq!(game.current_card(), Some(card));
    assert!(!game.wheel().is_visible());
}

#[test]
fn restart_discards_the_session_from_any_phase() {
    let game = in_finale(quiet_options(), Scripted::new());
    game.force_open_wheel().unwrap();
    let ticket = game.spin().unwrap();

    game.restart();
    assert_eq!(game.phase(), GamePhase::Setup);
    assert_eq!(game.slots().len(), 5);
    assert!(game.players().is_empty());
    assert_eq!(game.turn().turn_counter, 0);
    assert!(game.current_card().is_none());
    assert!(!game.timer().is_running());
    assert!(!game.wheel().is_visible());
    assert_eq!(game.wheel().rotation(), 0.0);

    // A spin scheduled before the restart must not land in the new session.
    game.start_game(&["A", "B"]).unwrap();
    game.force_open_wheel().unwrap();
    assert_eq!(game.settle_spin(ticket).unwrap_err(), WheelError::StaleSpin);
    assert!(game.wheel().result().is_none());

    game.restart();
    assert_eq!(game.phase(), GamePhase::Setup);
}

#[test]
fn commands_report_follow_up_work() {
    let options = quiet_options().with_round2_secs(1);
    let game = scripted_game(options, Scripted::new());

    assert_eq!(
        game.apply(Command::SetPlayerName {
            index: 0,
            name: "Ann".to_string(),
        }),
        Ok(Effect::None)
    );
    assert_eq!(
        game.apply(Command::StartFromSlots),
        Err(GameError::Setup(SetupError::TooFewPlayers))
    );
    game.apply(Command::SetPlayerName {
        index: 1,
        name: "Bas".to_string(),
    })
    .unwrap();
    assert_eq!(game.apply(Command::StartFromSlots), Ok(Effect::None));

    assert_eq!(game.apply(Command::ForceOpenWheel), Ok(Effect::WheelOpened));
    let Ok(Effect::ScheduleSettle(ticket)) = game.apply(Command::Spin) else {
        panic!("expected a settle to schedule");
    };
    assert_eq!(
        game.apply(Command::Spin),
        Err(GameError::Wheel(WheelError::AlreadySpinning))
    );
    assert_eq!(game.apply(Command::SettleSpin(ticket)), Ok(Effect::None));
    assert_eq!(game.apply(Command::CloseWheel), Ok(Effect::None));

    assert_eq!(game.apply(Command::ProceedToIntermission), Ok(Effect::None));
    assert_eq!(game.apply(Command::AdjustTimer(-600)), Ok(Effect::None));
    assert_eq!(game.timer().remaining_secs(), 60);
    game.apply(Command::Restart).unwrap();
    assert_eq!(game.phase(), GamePhase::Setup);

    game.apply(Command::StartGame(vec!["A".into(), "B".into()]))
        .unwrap();
    game.apply(Command::AdvancePhase(GamePhase::Intermission))
        .unwrap();
    game.apply(Command::StartRound2).unwrap();
    assert_eq!(game.apply(Command::Tick), Ok(Effect::Expired));
    assert_eq!(game.phase(), GamePhase::Finished);
}

#[test]
fn snapshot_reflects_the_session() {
    let game = started(quiet_options(), Scripted::new());
    game.advance_turn().unwrap();

    let view = game.snapshot();
    assert_eq!(view.phase, GamePhase::Round1);
    assert_eq!(view.players, ["A", "B", "C"]);
    assert_eq!(view.active_name(), Some("B"));
    assert_eq!(view.turn_counter, 1);
    assert_eq!(view.card, Some(ROUND_1_CARDS[0].clone()));
    assert!(!view.timer.running);
    assert!(!view.wheel.visible);
    assert!(view.wheel.segment.is_none());
}
