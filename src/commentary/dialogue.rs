//! Dialogue tables.
//!
//! Lines are keyed by `(phase, context)`. Every phase in the standard book
//! has a `Neutral` pool; context pools are sparse and fall back to it.

use rustc_hash::FxHashMap;

use super::context::EvaluationContext;
use crate::core::{PhaseId, PlayerId};
use crate::rules::SpecialEvent;

/// Every line the commentator can speak.
#[derive(Clone, Debug, Default)]
pub struct DialogueBook {
    phases: FxHashMap<(PhaseId, EvaluationContext), Vec<String>>,
    verdicts: FxHashMap<PlayerId, Vec<String>>,
    events: FxHashMap<SpecialEvent, Vec<String>>,
}

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|s| (*s).to_string()).collect()
}

impl DialogueBook {
    /// A book with no lines at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a pool for one phase and context.
    #[must_use]
    pub fn with_phase_lines(mut self, phase: PhaseId, context: EvaluationContext, text: &[&str]) -> Self {
        self.phases.insert((phase, context), lines(text));
        self
    }

    /// Add the final verdicts for one winner.
    #[must_use]
    pub fn with_verdicts(mut self, winner: PlayerId, text: &[&str]) -> Self {
        self.verdicts.insert(winner, lines(text));
        self
    }

    /// Add the lines for a special event.
    #[must_use]
    pub fn with_event_lines(mut self, event: SpecialEvent, text: &[&str]) -> Self {
        self.events.insert(event, lines(text));
        self
    }

    /// Whether the book has any pool for this phase.
    #[must_use]
    pub fn has_phase(&self, phase: PhaseId) -> bool {
        self.phases.keys().any(|&(p, _)| p == phase)
    }

    /// The pool for a phase in a context, falling back to the phase's neutral
    /// pool. Empty when neither exists.
    #[must_use]
    pub fn phase_pool(&self, phase: PhaseId, context: EvaluationContext) -> &[String] {
        self.phases
            .get(&(phase, context))
            .filter(|pool| !pool.is_empty())
            .or_else(|| self.phases.get(&(phase, EvaluationContext::Neutral)))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn verdict_pool(&self, winner: PlayerId) -> &[String] {
        self.verdicts.get(&winner).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn event_pool(&self, event: SpecialEvent) -> &[String] {
        self.events.get(&event).map(Vec::as_slice).unwrap_or_default()
    }

    /// The standard commentary.
    #[must_use]
    pub fn standard() -> Self {
        use EvaluationContext::*;

        Self::empty()
            .with_phase_lines(PhaseId::Initialization, Neutral, &[
                "Cosmic evaluation protocols... initializing. Guild antagonists, prepare for assessment.",
                "The cosmic balance requires evaluation. Present your antagonist credentials.",
                "Galactic oversight commencing. Your schemes shall be... measured.",
                "Let the cosmic review begin. All protagonists and antagonists will be judged.",
            ])
            .with_phase_lines(PhaseId::Emergence, Neutral, &[
                "Protagonists emerge seeking glory. Standard cosmic testing procedures engaged.",
                "Test subjects materializing. Antagonist effectiveness trials... beginning.",
                "The universe provides challengers. Your installations await evaluation.",
                "New cosmic trials approach. Your antagonist prowess will be tested.",
            ])
            .with_phase_lines(PhaseId::Emergence, EarlyGame, &[
                "The cosmic dance begins. Protagonists and antagonists align.",
                "First trials emerging. Let us observe your tactical acumen.",
                "Heroes step forth. Show me your Guild credentials.",
            ])
            .with_phase_lines(PhaseId::Construction, Neutral, &[
                "Present your antagonist installations for cosmic review. Concealment protocols... acceptable.",
                "Construction phase under galactic observation. Your schemes will be... assessed.",
                "Installation secrecy maintained. The cosmic eye sees all... eventually.",
                "Build your defenses, antagonists. The universe watches with interest.",
            ])
            .with_phase_lines(PhaseId::Construction, DominantAntagonist, &[
                "One player demonstrates superior cosmic planning. Impressive... for now.",
                "A clear leader emerges in installation quality. Balance shall be restored.",
                "Galactic dominance noted. But cosmic evaluation is far from complete.",
            ])
            .with_phase_lines(PhaseId::Construction, CosmicTension, &[
                "Tensions rise as cosmic judgment approaches. Your installations must prove worthy.",
                "Time grows short. Installations must demonstrate maximum efficiency.",
                "The final evaluations near. Choose your constructions wisely.",
            ])
            .with_phase_lines(PhaseId::Attraction, Neutral, &[
                "Observing protagonist selection patterns. Cosmic magnetism principles... engaging.",
                "The universe aligns. Protagonists drawn to their designated trials.",
                "Cosmic forces guide the unwary. Your installations' allure... measured.",
                "Attraction protocols complete. Let the trials commence.",
            ])
            .with_phase_lines(PhaseId::Attraction, BalancedEvaluation, &[
                "Cosmic balance maintained. Both antagonists attract equal attention.",
                "The universe remains neutral. Both sides show equal promise.",
            ])
            .with_phase_lines(PhaseId::Attraction, DominantAntagonist, &[
                "One antagonist proves exceptionally... attractive to cosmic tests. Curious.",
                "Significant protagonist concentration detected. This shall prove interesting.",
            ])
            .with_phase_lines(PhaseId::Trial, Neutral, &[
                "Executing cosmic trials. Measuring antagonist effectiveness against protagonist resolve.",
                "The moment of truth arrives. Your schemes face ultimate evaluation.",
                "Cosmic judgment flows. Success and failure dance in the balance.",
                "Trials proceed. The universe observes all outcomes.",
            ])
            .with_phase_lines(PhaseId::Trial, BalancedEvaluation, &[
                "Both antagonists perform adequately. Cosmic balance maintained.",
                "Equal prowess demonstrated. The universe remains undecided.",
            ])
            .with_phase_lines(PhaseId::Trial, DominantAntagonist, &[
                "One player achieves superior cosmic trial results. Dominance acknowledged.",
                "Exceptional performance noted. But can it be sustained?",
            ])
            .with_phase_lines(PhaseId::Trial, CosmicTension, &[
                "Critical trials execute. Cosmic standing hangs in the balance.",
                "The decisive moment. All antagonist reputations are at stake.",
            ])
            .with_phase_lines(PhaseId::Evaluation, Neutral, &[
                "Tallying cosmic performance metrics. The universe keeps score.",
                "Evaluation cycle complete. Antagonist rankings... updated.",
                "Another cycle measured. The cosmic ledger reflects all.",
                "Results recorded. Cosmic standing adjusted accordingly.",
            ])
            .with_phase_lines(PhaseId::Evaluation, EarlyGame, &[
                "Initial evaluation complete. Much cosmic testing remains.",
                "First scores recorded. The true evaluation has only begun.",
            ])
            .with_phase_lines(PhaseId::Evaluation, BalancedEvaluation, &[
                "Cosmic equilibrium maintained. Both antagonists show equal merit.",
                "The universe remains balanced. Neither side gains advantage.",
            ])
            .with_phase_lines(PhaseId::Evaluation, DominantAntagonist, &[
                "One antagonist pulls ahead. Cosmic superiority... emerging.",
                "Significant score differential noted. Balance must be restored.",
                "Leadership established. But cosmic evaluation is never complete.",
            ])
            .with_phase_lines(PhaseId::Evaluation, CosmicTension, &[
                "The end approaches. Cosmic judgment nearly complete.",
                "Final evaluations imminent. Who shall prove worthy?",
                "Victory draws near for one. The universe watches closely.",
            ])
            .with_verdicts(PlayerId::FIRST, &[
                "Cosmic review complete. Player One demonstrates superior antagonist-protagonist relationship management. Status: Approved for continued operations.",
                "Assessment concluded. Player One achieves optimal cosmic balance. Authorization granted for expanded schemes.",
                "Final judgment rendered. Player One displays exemplary Guild protocols. Cosmic approval: GRANTED.",
                "Evaluation finished. Player One proves cosmic superiority. May your schemes continue to maintain balance.",
            ])
            .with_verdicts(PlayerId::SECOND, &[
                "Cosmic review complete. Player Two demonstrates superior antagonist-protagonist relationship management. Status: Approved for continued operations.",
                "Assessment concluded. Player Two achieves optimal cosmic balance. Authorization granted for expanded schemes.",
                "Final judgment rendered. Player Two displays exemplary Guild protocols. Cosmic approval: GRANTED.",
                "Evaluation finished. Player Two proves cosmic superiority. May your schemes continue to maintain balance.",
            ])
            .with_event_lines(SpecialEvent::EpicHeroDefeated, &[
                "Impressive. Epic protagonist neutralized. Cosmic credentials... validated.",
                "Significant cosmic victory. Epic trial overcome. Most satisfactory.",
                "An epic falls. Your antagonist prowess is... noteworthy.",
            ])
            .with_event_lines(SpecialEvent::EpicHeroSurvived, &[
                "Concerning. Epic protagonist persists. Cosmic standing... diminished.",
                "Epic trial failed. This reflects poorly on your antagonist credentials.",
                "The epic endures. Your installations prove... inadequate.",
            ])
            .with_event_lines(SpecialEvent::PerfectTurn, &[
                "Flawless execution. All protagonists neutralized. Cosmic excellence achieved.",
                "Remarkable. Complete trial success. The universe takes notice.",
            ])
            .with_event_lines(SpecialEvent::TotalFailure, &[
                "Total protagonist survival. Your cosmic standing suffers greatly.",
                "Complete installation failure. Most... disappointing.",
            ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_covers_every_phase() {
        let book = DialogueBook::standard();
        for phase in PhaseId::ALL {
            assert!(book.has_phase(phase), "{phase} has no lines");
            assert!(!book.phase_pool(phase, EvaluationContext::Neutral).is_empty());
        }
    }

    #[test]
    fn test_context_falls_back_to_neutral() {
        let book = DialogueBook::standard();

        let pool = book.phase_pool(PhaseId::Initialization, EvaluationContext::CosmicTension);
        assert_eq!(pool, book.phase_pool(PhaseId::Initialization, EvaluationContext::Neutral));

        let early = book.phase_pool(PhaseId::Emergence, EvaluationContext::EarlyGame);
        assert_eq!(early.len(), 3);
        assert!(early[0].starts_with("The cosmic dance begins"));
    }

    #[test]
    fn test_missing_pools_are_empty() {
        let book = DialogueBook::empty();

        assert!(!book.has_phase(PhaseId::Trial));
        assert!(book.phase_pool(PhaseId::Trial, EvaluationContext::Neutral).is_empty());
        assert!(book.verdict_pool(PlayerId::FIRST).is_empty());
        assert!(book.event_pool(SpecialEvent::PerfectTurn).is_empty());
    }

    #[test]
    fn test_standard_events_and_verdicts() {
        let book = DialogueBook::standard();
        for event in SpecialEvent::ALL {
            assert!(!book.event_pool(event).is_empty());
        }
        assert!(book.verdict_pool(PlayerId::SECOND)[0].contains("Player Two"));
    }
}
