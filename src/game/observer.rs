//! Notifications to the presentation layer.
//!
//! The engine never renders anything. It reports phase changes, commentary
//! and trial outcomes through a `GameObserver`, whose methods all default to
//! no-ops so an implementation only overrides what it draws.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::PhaseId;
use crate::rules::TrialResult;

pub trait GameObserver {
    /// The current phase changed, or the active player changed within it.
    fn on_phase_changed(&mut self, _phase: PhaseId) {}

    /// A commentary line was spoken.
    fn on_commentary(&mut self, _text: &str) {}

    /// A hero finished its trial.
    fn on_trial_resolved(&mut self, _result: &TrialResult) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// Shared observers, so the caller can keep a handle to what the game holds.
impl<O: GameObserver> GameObserver for Rc<RefCell<O>> {
    fn on_phase_changed(&mut self, phase: PhaseId) {
        self.borrow_mut().on_phase_changed(phase);
    }

    fn on_commentary(&mut self, text: &str) {
        self.borrow_mut().on_commentary(text);
    }

    fn on_trial_resolved(&mut self, result: &TrialResult) {
        self.borrow_mut().on_trial_resolved(result);
    }
}

/// One recorded notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObservedEvent {
    PhaseChanged(PhaseId),
    Commentary(String),
    TrialResolved(TrialResult),
}

/// Observer that records every notification in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    pub events: Vec<ObservedEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commentary lines in the order they were spoken.
    pub fn commentary(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            ObservedEvent::Commentary(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn trial_results(&self) -> impl Iterator<Item = &TrialResult> {
        self.events.iter().filter_map(|e| match e {
            ObservedEvent::TrialResolved(result) => Some(result),
            _ => None,
        })
    }

    pub fn phases(&self) -> impl Iterator<Item = PhaseId> + '_ {
        self.events.iter().filter_map(|e| match e {
            ObservedEvent::PhaseChanged(phase) => Some(*phase),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GameObserver for EventLog {
    fn on_phase_changed(&mut self, phase: PhaseId) {
        self.events.push(ObservedEvent::PhaseChanged(phase));
    }

    fn on_commentary(&mut self, text: &str) {
        self.events.push(ObservedEvent::Commentary(text.to_string()));
    }

    fn on_trial_resolved(&mut self, result: &TrialResult) {
        self.events.push(ObservedEvent::TrialResolved(result.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_shared_log_records_in_order() {
        let log = Rc::new(RefCell::new(EventLog::new()));
        let mut observer: Box<dyn GameObserver> = Box::new(Rc::clone(&log));

        observer.on_phase_changed(PhaseId::Emergence);
        observer.on_commentary("hello");
        observer.on_trial_resolved(&TrialResult {
            hero_name: "Hank".to_string(),
            player: PlayerId::FIRST,
            damage_dealt: 2,
            defeated: false,
            remaining_health: 2,
            is_epic: false,
        });

        let log = log.borrow();
        assert_eq!(log.events.len(), 3);
        assert_eq!(log.phases().collect::<Vec<_>>(), vec![PhaseId::Emergence]);
        assert_eq!(log.commentary().collect::<Vec<_>>(), vec!["hello"]);
        assert_eq!(log.trial_results().count(), 1);
    }

    #[test]
    fn test_null_observer_is_silent() {
        let mut observer = NullObserver;
        observer.on_phase_changed(PhaseId::Trial);
        observer.on_commentary("ignored");
    }
}
