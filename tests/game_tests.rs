//! Full game flow tests.
//!
//! Games are built with small, uniform catalogs so the outcome of each round
//! does not depend on the shuffle.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use cosmic_trials::{
    DialogueBook, EventLog, Game, GameBuilder, GameConfig, ObservedEvent, PhaseId, PlayerId,
    SpecialEvent, VictoryReason,
};

fn game_with(rooms_damage: i32, heroes: usize) -> (Game, Rc<RefCell<EventLog>>) {
    common::init_logging();
    let catalog = common::with_rooms(
        common::with_science_heroes(common::science_vs_dramatic(), heroes, 3),
        20,
        rooms_damage,
    );
    let mut game = GameBuilder::new().catalog(catalog).build(8).unwrap();
    let log = Rc::new(RefCell::new(EventLog::new()));
    game.set_observer(Box::new(Rc::clone(&log)));
    (game, log)
}

fn both_pass(game: &mut Game) {
    assert!(game.pass(PlayerId::FIRST));
    assert!(game.pass(PlayerId::SECOND));
}

/// Test a full round with no installations: both heroes go to the science
/// lair and walk out.
#[test]
fn test_round_with_empty_lairs() {
    let (mut game, log) = game_with(5, 8);

    game.advance_phase();
    assert_eq!(game.phase(), PhaseId::Construction);
    assert_eq!(game.state().hero_pool.len(), 2);

    both_pass(&mut game);
    assert_eq!(game.phase(), PhaseId::Attraction);

    game.advance_phase();

    let state = game.state();
    assert_eq!(state.phase, PhaseId::Construction);
    assert_eq!(state.turn_number, 2);
    assert_eq!(state.players[PlayerId::FIRST].trials_failed, 2);
    assert_eq!(state.players[PlayerId::SECOND].trials_failed, 0);
    assert!(state.passed_players().is_empty());
    assert!(state.active_trials.is_empty());
    assert_eq!(state.active_player, PlayerId::FIRST);

    let log = log.borrow();
    let results: Vec<_> = log.trial_results().collect();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.player == PlayerId::FIRST && !r.defeated));

    let total_failure = DialogueBook::standard().event_pool(SpecialEvent::TotalFailure).to_vec();
    assert!(log.commentary().any(|line| total_failure.iter().any(|l| l == line)));
}

/// Test a round where the science lair has one deadly room.
#[test]
fn test_round_with_deadly_room() {
    let (mut game, log) = game_with(5, 8);
    game.advance_phase();

    assert!(game.build_action(PlayerId::FIRST, 0));
    both_pass_from_second(&mut game);
    game.advance_phase();

    let state = game.state();
    assert_eq!(state.players[PlayerId::FIRST].trials_won, 2);
    assert_eq!(state.players[PlayerId::FIRST].trials_failed, 0);
    assert_eq!(state.players[PlayerId::FIRST].face_down_count(), 0);

    let perfect = DialogueBook::standard().event_pool(SpecialEvent::PerfectTurn).to_vec();
    assert!(log.borrow().commentary().any(|line| perfect.iter().any(|l| l == line)));
}

fn both_pass_from_second(game: &mut Game) {
    assert!(game.pass(PlayerId::SECOND));
    assert!(game.pass(PlayerId::FIRST));
}

/// Test that failures end the game and freeze it in the trial phase.
#[test]
fn test_game_over_by_failures() {
    let (mut game, log) = game_with(5, 8);

    for _ in 0..3 {
        game.advance_phase();
        if game.is_over() {
            break;
        }
        both_pass(&mut game);
    }
    game.advance_phase();

    assert!(game.is_over());
    assert_eq!(game.phase(), PhaseId::Trial);
    assert_eq!(game.state().turn_number, 3);
    assert_eq!(game.state().winner, Some(PlayerId::SECOND));
    assert_eq!(
        game.verdict().unwrap().reason,
        VictoryReason::FailuresReached { loser: PlayerId::FIRST }
    );

    let last = log.borrow().commentary().last().map(str::to_string).unwrap();
    assert!(last.contains("Player Two"));

    // Nothing moves once the game is decided.
    let events = log.borrow().events.len();
    assert_eq!(game.advance_phase(), 0);
    assert!(!game.step());
    assert!(!game.pass(PlayerId::FIRST));
    assert_eq!(log.borrow().events.len(), events);
}

/// Test that custom thresholds end the game early.
#[test]
fn test_game_over_by_trials() {
    common::init_logging();
    let catalog = common::with_rooms(
        common::with_science_heroes(common::science_vs_dramatic(), 4, 3),
        20,
        5,
    );
    let mut game = GameBuilder::new()
        .catalog(catalog)
        .config(GameConfig::default().with_thresholds(2, 5))
        .build(1)
        .unwrap();

    game.advance_phase();
    game.build_action(PlayerId::FIRST, 0);
    game.pass(PlayerId::SECOND);
    game.pass(PlayerId::FIRST);
    game.advance_phase();

    assert!(game.is_over());
    assert_eq!(game.state().winner, Some(PlayerId::FIRST));
    assert_eq!(game.verdict().unwrap().reason, VictoryReason::TrialsWon);
}

/// Test that commentary precedes each automatic transition and construction
/// is narrated as it closes.
#[test]
fn test_event_order() {
    let (mut game, log) = game_with(5, 8);

    game.advance_phase();
    both_pass(&mut game);

    let log = log.borrow();
    let kinds: Vec<&str> = log
        .events
        .iter()
        .map(|e| match e {
            ObservedEvent::Commentary(_) => "say",
            ObservedEvent::PhaseChanged(PhaseId::Emergence) => "emergence",
            ObservedEvent::PhaseChanged(PhaseId::Construction) => "construction",
            ObservedEvent::PhaseChanged(PhaseId::Attraction) => "attraction",
            ObservedEvent::PhaseChanged(_) => "other",
            ObservedEvent::TrialResolved(_) => "trial",
        })
        .collect();

    assert_eq!(
        kinds,
        vec!["say", "emergence", "say", "construction", "construction", "say", "attraction"]
    );
}

/// Test that heroes nobody can attract wait in the pool.
#[test]
fn test_unclaimed_heroes_accumulate() {
    common::init_logging();
    let catalog = common::with_rooms(
        common::with_science_heroes(
            cosmic_trials::CardCatalog::new()
                .with_boss(cosmic_trials::BossCard::new("A", 1, cosmic_trials::Treasure::none()))
                .with_boss(cosmic_trials::BossCard::new("B", 2, cosmic_trials::Treasure::none())),
            6,
            3,
        ),
        10,
        1,
    );
    let mut game = GameBuilder::new().catalog(catalog).build(4).unwrap();

    game.advance_phase();
    both_pass(&mut game);
    game.advance_phase();

    assert_eq!(game.state().turn_number, 2);
    assert_eq!(game.state().hero_pool.len(), 4);
    assert_eq!(game.state().players[PlayerId::FIRST].trials_failed, 0);
}

/// Test that the same seed replays the same game.
#[test]
fn test_seeded_replay() {
    common::init_logging();
    let play = |seed| {
        let mut game = GameBuilder::new().build(seed).unwrap();
        let log = Rc::new(RefCell::new(EventLog::new()));
        game.set_observer(Box::new(Rc::clone(&log)));
        for _ in 0..4 {
            game.advance_phase();
            if game.is_over() {
                break;
            }
            game.build_action(PlayerId::FIRST, 0);
            game.build_action(PlayerId::SECOND, 0);
            game.pass(PlayerId::FIRST);
            game.pass(PlayerId::SECOND);
        }
        let events = log.borrow().events.clone();
        (game.snapshot(), events)
    };

    assert_eq!(play(31), play(31));
}
