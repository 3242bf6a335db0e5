//! Reading the table: which dialogue bucket, mood and balance apply.

use serde::{Deserialize, Serialize};

use crate::core::GameState;

/// Turn at which every phase switches to end-game lines.
pub const TENSION_TURN: u32 = 8;

/// Score differential at which one player counts as dominant.
pub const DOMINANCE_MARGIN: u32 = 3;

/// Last turn that counts as the opening.
pub const EARLY_GAME_LAST_TURN: u32 = 2;

/// Dialogue bucket for the current state of play.
///
/// `Neutral` is never produced by classification. It names the fallback pool
/// of each phase and is the commentator's context before the first reading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvaluationContext {
    #[default]
    Neutral,
    EarlyGame,
    BalancedEvaluation,
    DominantAntagonist,
    CosmicTension,
}

impl EvaluationContext {
    /// Classify from raw numbers. The first matching rule wins.
    #[must_use]
    pub fn from_scores(turn_number: u32, score_differential: u32) -> Self {
        if turn_number >= TENSION_TURN {
            EvaluationContext::CosmicTension
        } else if score_differential >= DOMINANCE_MARGIN {
            EvaluationContext::DominantAntagonist
        } else if turn_number <= EARLY_GAME_LAST_TURN {
            EvaluationContext::EarlyGame
        } else {
            EvaluationContext::BalancedEvaluation
        }
    }

    #[must_use]
    pub fn mood(self) -> Mood {
        match self {
            EvaluationContext::Neutral => Mood::Evaluating,
            EvaluationContext::BalancedEvaluation => Mood::Observing,
            EvaluationContext::DominantAntagonist => Mood::Impressed,
            EvaluationContext::CosmicTension => Mood::Anticipating,
            EvaluationContext::EarlyGame => Mood::Monitoring,
        }
    }
}

/// Classify the current state. Always computed fresh.
#[must_use]
pub fn classify_context(state: &GameState) -> EvaluationContext {
    EvaluationContext::from_scores(state.turn_number, state.score_differential())
}

/// The commentator's disposition, for display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    #[default]
    Evaluating,
    Observing,
    Impressed,
    Anticipating,
    Monitoring,
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Mood::Evaluating => "EVALUATING",
            Mood::Observing => "OBSERVING",
            Mood::Impressed => "IMPRESSED",
            Mood::Anticipating => "ANTICIPATING",
            Mood::Monitoring => "MONITORING",
        };
        f.write_str(word)
    }
}

/// How evenly matched the players are.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CosmicBalance {
    PerfectBalance,
    Stable,
    Shifting,
    Imbalanced,
}

impl CosmicBalance {
    #[must_use]
    pub fn from_differential(score_differential: u32) -> Self {
        match score_differential {
            0 => CosmicBalance::PerfectBalance,
            1 => CosmicBalance::Stable,
            2..=3 => CosmicBalance::Shifting,
            _ => CosmicBalance::Imbalanced,
        }
    }

    #[must_use]
    pub fn of(state: &GameState) -> Self {
        Self::from_differential(state.score_differential())
    }
}
