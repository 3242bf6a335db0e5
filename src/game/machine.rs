//! The phase machine.
//!
//! `Game` owns the state, the commentator and the observer, and is the only
//! thing the presentation layer talks to. Every command runs to completion
//! before returning.
//!
//! ## Turn cycle
//!
//! - **Initialization**: entered once; moves straight to Emergence.
//! - **Emergence**: reveal heroes, one draw per player, first player active.
//! - **Construction**: waits for `build_action`/`pass`. Closes when both
//!   players have passed; all installations are then revealed.
//! - **Attraction**: heroes drawn to lairs.
//! - **Trial**: heroes walk their lairs, then victory is checked. A decided
//!   game stays here for good.
//! - **Evaluation**: next turn, back to Emergence.
//!
//! Before an automatic phase runs, the commentator speaks for it. Construction
//! gets its line at the moment it closes.

use std::fmt;

use tracing::{debug, info};

use super::observer::{GameObserver, NullObserver};
use crate::commentary::{Commentary, CosmicBalance, Mood};
use crate::core::{GameConfig, GameSnapshot, GameState, PhaseId, PlayerId, PlayerMap};
use crate::rules::{
    apply_verdict, evaluate_victory, resolve_attraction, resolve_trials, special_event, Verdict,
};

/// A game in progress. Built with [`super::GameBuilder`].
pub struct Game {
    state: GameState,
    config: GameConfig,
    commentary: Commentary,
    observer: Box<dyn GameObserver>,
    verdict: Option<Verdict>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("verdict", &self.verdict)
            .finish_non_exhaustive()
    }
}

impl Game {
    pub(crate) fn from_parts(state: GameState, config: GameConfig, commentary: Commentary) -> Self {
        Self {
            state,
            config,
            commentary,
            observer: Box::new(NullObserver),
            verdict: None,
        }
    }

    /// Replace the observer.
    pub fn set_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observer = observer;
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn commentary(&self) -> &Commentary {
        &self.commentary
    }

    #[must_use]
    pub fn phase(&self) -> PhaseId {
        self.state.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.game_over
    }

    /// How the game ended, once it has.
    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    // === Commands ===

    /// Run automatic phases until a player must act or the game ends.
    ///
    /// Returns the number of phases run.
    pub fn advance_phase(&mut self) -> usize {
        let mut steps = 0;
        while self.step() {
            steps += 1;
        }
        steps
    }

    /// Run exactly one automatic phase.
    ///
    /// Returns `false` without doing anything while construction is open or
    /// once the game is over.
    pub fn step(&mut self) -> bool {
        let phase = self.state.phase;
        if self.state.game_over || phase.awaits_input() {
            return false;
        }

        let line = self.commentary.phase_commentary(phase, &self.state);
        self.speak(&line);

        match phase {
            PhaseId::Initialization => self.enter(PhaseId::Emergence),
            PhaseId::Emergence => self.run_emergence(),
            PhaseId::Construction => {}
            PhaseId::Attraction => self.run_attraction(),
            PhaseId::Trial => self.run_trials(),
            PhaseId::Evaluation => self.run_evaluation(),
        }
        true
    }

    /// Build from hand, face-down. Only the active player may build, and
    /// only during construction.
    pub fn build_action(&mut self, player: PlayerId, hand_index: usize) -> bool {
        if !self.accepts_construction_command(player) {
            debug!(%player, hand_index, phase = %self.state.phase, "build rejected");
            return false;
        }

        let played = self.state.play(player, hand_index, true);
        if played {
            self.advance_construction();
        }
        played
    }

    /// Pass for the rest of this construction phase.
    ///
    /// Ignored unless `player` is the active player during construction.
    pub fn pass(&mut self, player: PlayerId) -> bool {
        if !self.accepts_construction_command(player) {
            debug!(%player, phase = %self.state.phase, "pass rejected");
            return false;
        }

        self.state.mark_passed(player);
        debug!(%player, "passed");
        self.advance_construction();
        true
    }

    // === Views ===

    /// Read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Compact status for logs and debug overlays.
    #[must_use]
    pub fn debug_summary(&self) -> DebugSummary {
        DebugSummary {
            phase: self.state.phase,
            turn: self.state.turn_number,
            active_player: self.state.active_player,
            scores: self
                .state
                .players
                .map(|_, board| Score {
                    trials_won: board.trials_won,
                    trials_failed: board.trials_failed,
                }),
            hero_pool: self.state.hero_pool.iter().map(|h| h.card.name.clone()).collect(),
            mood: self.commentary.mood(),
            balance: self.commentary.cosmic_balance(&self.state),
        }
    }

    // === Phase handlers ===

    fn run_emergence(&mut self) {
        let revealed = self.state.reveal_heroes(self.config.heroes_per_turn);
        self.state.draw_phase_cards(self.config.draws_per_turn);
        self.state.reset_passes();
        self.state.active_player = PlayerId::FIRST;
        debug!(turn = self.state.turn_number, revealed = revealed.len(), "heroes emerged");
        self.enter(PhaseId::Construction);
    }

    fn run_attraction(&mut self) {
        let attractions = resolve_attraction(&mut self.state);
        debug!(
            attracted = attractions.len(),
            unclaimed = self.state.hero_pool.len(),
            "attraction resolved"
        );
        self.enter(PhaseId::Trial);
    }

    fn run_trials(&mut self) {
        let results = resolve_trials(&mut self.state);
        for result in &results {
            self.observer.on_trial_resolved(result);
        }

        if let Some(event) = special_event(&results) {
            if let Some(line) = self.commentary.event_commentary(event) {
                debug!(?event, "special event");
                self.speak(&line);
            }
        }

        match evaluate_victory(&self.state, &self.config) {
            Some(verdict) => {
                apply_verdict(&mut self.state, &verdict);
                self.verdict = Some(verdict);
                let line = self.commentary.final_verdict(verdict.winner);
                self.speak(&line);
            }
            None => self.enter(PhaseId::Evaluation),
        }
    }

    fn run_evaluation(&mut self) {
        self.state.start_new_turn();
        info!(turn = self.state.turn_number, "turn started");
        if !self.state.game_over {
            self.enter(PhaseId::Emergence);
        }
    }

    // === Construction ===

    fn accepts_construction_command(&self, player: PlayerId) -> bool {
        !self.state.game_over
            && self.state.phase == PhaseId::Construction
            && self.state.active_player == player
    }

    fn advance_construction(&mut self) {
        if self.state.all_passed() {
            let line = self
                .commentary
                .phase_commentary(PhaseId::Construction, &self.state);
            self.speak(&line);
            self.state.reveal_all_players();
            self.enter(PhaseId::Attraction);
            return;
        }

        self.state.active_player = self.state.active_player.opponent();
        self.observer.on_phase_changed(self.state.phase);
    }

    // === Notifications ===

    fn enter(&mut self, phase: PhaseId) {
        debug!(from = %self.state.phase, to = %phase, "phase transition");
        self.state.phase = phase;
        self.observer.on_phase_changed(phase);
    }

    fn speak(&mut self, line: &str) {
        self.observer.on_commentary(line);
    }
}

/// Trials and failures for one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub trials_won: u32,
    pub trials_failed: u32,
}

/// Snapshot of the headline numbers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebugSummary {
    pub phase: PhaseId,
    pub turn: u32,
    pub active_player: PlayerId,
    pub scores: PlayerMap<Score>,
    pub hero_pool: Vec<String>,
    pub mood: Mood,
    pub balance: CosmicBalance,
}

impl fmt::Display for DebugSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Turn {} | {} | active: {}", self.turn, self.phase, self.active_player)?;
        for (player, score) in self.scores.iter() {
            writeln!(
                f,
                "  {player}: {} trials, {} failures",
                score.trials_won, score.trials_failed
            )?;
        }
        writeln!(f, "  Hero pool: [{}]", self.hero_pool.join(", "))?;
        write!(f, "  Mood: {} ({:?})", self.mood, self.balance)
    }
}
