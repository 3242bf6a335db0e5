//! Commentary tests.
//!
//! Line selection never repeats within the history window, context pools
//! fall back to neutral lines, and the window is shared across phases.

mod common;

use cosmic_trials::commentary::{select_line, MISSING_PHASE_LINE};
use cosmic_trials::{
    Commentary, DialogueBook, EvaluationContext, GameRng, GameState, LineHistory, Mood, PhaseId,
    PlayerId, SpecialEvent,
};
use proptest::prelude::*;

fn numbered_pool(size: usize) -> Vec<String> {
    (0..size).map(|i| format!("line {i}")).collect()
}

/// Test that a six-line pool cycles without repeating inside the window.
#[test]
fn test_no_repeat_within_window() {
    common::init_logging();
    let pool = numbered_pool(6);
    let mut history = LineHistory::new(5);
    let mut rng = GameRng::new(21);

    let picks: Vec<String> = (0..30)
        .map(|_| select_line(&pool, &mut history, &mut rng).unwrap())
        .collect();

    for window in picks.windows(6) {
        let mut unique = window.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 6, "repeat inside {window:?}");
    }
}

/// Test that a context with no lines of its own speaks neutral lines.
#[test]
fn test_context_fallback_to_neutral() {
    common::init_logging();
    let book = DialogueBook::standard();
    let neutral = book
        .phase_pool(PhaseId::Initialization, EvaluationContext::Neutral)
        .to_vec();
    let mut commentary = Commentary::new(book, 5, GameRng::new(2));
    let mut state = GameState::new(2);
    state.turn_number = 9;

    let line = commentary.phase_commentary(PhaseId::Initialization, &state);

    assert!(neutral.contains(&line));
    assert_eq!(commentary.context(), EvaluationContext::CosmicTension);
    assert_eq!(commentary.mood(), Mood::Anticipating);
}

/// Test that a dominant lead selects the dominance pool.
#[test]
fn test_dominant_context_pool() {
    common::init_logging();
    let dominant = DialogueBook::standard()
        .phase_pool(PhaseId::Trial, EvaluationContext::DominantAntagonist)
        .to_vec();
    let mut commentary = Commentary::standard(GameRng::new(5));
    let mut state = GameState::new(5);
    state.turn_number = 4;
    state.players[PlayerId::SECOND].trials_won = 3;

    let line = commentary.phase_commentary(PhaseId::Trial, &state);

    assert!(dominant.contains(&line));
    assert_eq!(commentary.mood(), Mood::Impressed);
}

/// Test that phase and event lines share one history window.
#[test]
fn test_history_shared_across_kinds() {
    common::init_logging();
    let mut commentary = Commentary::standard(GameRng::new(8));
    let state = GameState::new(8);

    commentary.phase_commentary(PhaseId::Emergence, &state);
    commentary.event_commentary(SpecialEvent::PerfectTurn);
    commentary.phase_commentary(PhaseId::Evaluation, &state);

    assert_eq!(commentary.history().len(), 3);
}

/// Test the line for a phase the book does not cover.
#[test]
fn test_missing_phase() {
    common::init_logging();
    let mut commentary = Commentary::new(DialogueBook::empty(), 5, GameRng::new(1));
    let line = commentary.phase_commentary(PhaseId::Attraction, &GameState::new(1));
    assert_eq!(line, MISSING_PHASE_LINE);
}

proptest! {
    /// With a pool larger than the window, no line recurs inside the window.
    #[test]
    fn prop_window_never_repeats(
        pool_size in 6usize..20,
        limit in 1usize..6,
        picks in 1usize..60,
        seed in any::<u64>(),
    ) {
        let pool = numbered_pool(pool_size);
        let mut history = LineHistory::new(limit);
        let mut rng = GameRng::new(seed);
        let mut spoken: Vec<String> = Vec::new();

        for _ in 0..picks {
            let line = select_line(&pool, &mut history, &mut rng).unwrap();
            let recent = &spoken[spoken.len().saturating_sub(limit)..];
            prop_assert!(!recent.contains(&line));
            spoken.push(line);
        }
        prop_assert!(history.len() <= limit);
    }
}
