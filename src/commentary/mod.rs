//! The commentator.
//!
//! `Commentary` reads the table, picks a line for the phase being left (or a
//! verdict, or a special event) and remembers what it said so the same line
//! is not repeated within a short window. The window is shared by every kind
//! of line.
//!
//! ## Fallbacks
//!
//! | Situation                             | Line                              |
//! |---------------------------------------|-----------------------------------|
//! | phase has no pools                    | `MISSING_PHASE_LINE`              |
//! | phase pools exist but are all empty   | `DEFAULT_PHASE_LINE`              |
//! | winner has no verdicts                | generated approval line           |
//! | event has no lines                    | nothing                           |

pub mod context;
pub mod dialogue;
pub mod selector;

pub use context::{classify_context, CosmicBalance, EvaluationContext, Mood};
pub use dialogue::DialogueBook;
pub use selector::{select_line, LineHistory};

use tracing::debug;

use crate::core::{GameRng, GameState, PhaseId, PlayerId};
use crate::rules::SpecialEvent;

/// Spoken for a phase the book does not know.
pub const MISSING_PHASE_LINE: &str = "Cosmic evaluation continues...";

/// Spoken when a known phase has nothing to say.
pub const DEFAULT_PHASE_LINE: &str = "The cosmic evaluation proceeds.";

/// Default window of suppressed lines.
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// Commentary engine with its own line history and RNG stream.
#[derive(Clone, Debug)]
pub struct Commentary {
    book: DialogueBook,
    history: LineHistory,
    rng: GameRng,
    context: EvaluationContext,
}

impl Commentary {
    #[must_use]
    pub fn new(book: DialogueBook, history_limit: usize, rng: GameRng) -> Self {
        Self {
            book,
            history: LineHistory::new(history_limit),
            rng,
            context: EvaluationContext::Neutral,
        }
    }

    /// Standard dialogue, default window.
    #[must_use]
    pub fn standard(rng: GameRng) -> Self {
        Self::new(DialogueBook::standard(), DEFAULT_HISTORY_LIMIT, rng)
    }

    /// Classify the state and remember the result for `mood`.
    pub fn evaluate(&mut self, state: &GameState) -> EvaluationContext {
        self.context = classify_context(state);
        self.context
    }

    /// A line for the given phase in the current context.
    pub fn phase_commentary(&mut self, phase: PhaseId, state: &GameState) -> String {
        let context = self.evaluate(state);

        if !self.book.has_phase(phase) {
            return MISSING_PHASE_LINE.to_string();
        }

        let pool = self.book.phase_pool(phase, context);
        let line = select_line(pool, &mut self.history, &mut self.rng)
            .unwrap_or_else(|| DEFAULT_PHASE_LINE.to_string());
        debug!(%phase, ?context, "phase commentary selected");
        line
    }

    /// The closing verdict for a winner. Does not touch the history.
    pub fn final_verdict(&mut self, winner: PlayerId) -> String {
        self.rng
            .choose(self.book.verdict_pool(winner))
            .cloned()
            .unwrap_or_else(|| format!("Cosmic review complete. {winner} achieves victory. Status: Approved."))
    }

    /// A line for a special event, if the book has any.
    pub fn event_commentary(&mut self, event: SpecialEvent) -> Option<String> {
        select_line(self.book.event_pool(event), &mut self.history, &mut self.rng)
    }

    /// The context found by the last evaluation.
    #[must_use]
    pub fn context(&self) -> EvaluationContext {
        self.context
    }

    #[must_use]
    pub fn mood(&self) -> Mood {
        self.context.mood()
    }

    #[must_use]
    pub fn cosmic_balance(&self, state: &GameState) -> CosmicBalance {
        CosmicBalance::of(state)
    }

    /// Recent lines, oldest first.
    #[must_use]
    pub fn history(&self) -> &LineHistory {
        &self.history
    }
}
