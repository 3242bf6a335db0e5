//! Game configuration.
//!
//! `GameConfig` holds every tunable number of the ruleset. The defaults match
//! the standard game; tests and variants override individual values with the
//! `with_*` builders or load a partial JSON document (missing keys fall back
//! to the defaults).

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Heroes revealed into the pool at the start of each turn.
    pub heroes_per_turn: usize,

    /// Installation draws per player at the start of each turn.
    pub draws_per_turn: usize,

    /// Installation cards dealt to each player before the first turn.
    pub initial_hand_size: usize,

    /// Installation slots per player.
    pub max_installations: usize,

    /// Trials a player needs to win.
    pub trials_to_win: u32,

    /// Failures at which a player loses.
    pub failures_to_lose: u32,

    /// How many recent commentary lines are suppressed from reuse.
    pub commentary_history: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            heroes_per_turn: 2,
            draws_per_turn: 1,
            initial_hand_size: 5,
            max_installations: 5,
            trials_to_win: 10,
            failures_to_lose: 5,
            commentary_history: 5,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON configuration and validate it.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|source| GameError::ConfigParse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations under which the game cannot be played.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_installations == 0 {
            return Err(GameError::InvalidConfig("max_installations must be at least 1"));
        }
        if self.trials_to_win == 0 {
            return Err(GameError::InvalidConfig("trials_to_win must be at least 1"));
        }
        if self.failures_to_lose == 0 {
            return Err(GameError::InvalidConfig("failures_to_lose must be at least 1"));
        }
        Ok(())
    }

    /// Set heroes revealed per turn.
    #[must_use]
    pub fn with_heroes_per_turn(mut self, count: usize) -> Self {
        self.heroes_per_turn = count;
        self
    }

    /// Set installation draws per turn.
    #[must_use]
    pub fn with_draws_per_turn(mut self, count: usize) -> Self {
        self.draws_per_turn = count;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_initial_hand_size(mut self, size: usize) -> Self {
        self.initial_hand_size = size;
        self
    }

    /// Set installation capacity.
    #[must_use]
    pub fn with_max_installations(mut self, max: usize) -> Self {
        self.max_installations = max;
        self
    }

    /// Set victory and defeat thresholds.
    #[must_use]
    pub fn with_thresholds(mut self, trials_to_win: u32, failures_to_lose: u32) -> Self {
        self.trials_to_win = trials_to_win;
        self.failures_to_lose = failures_to_lose;
        self
    }

    /// Set the commentary repetition window.
    #[must_use]
    pub fn with_commentary_history(mut self, limit: usize) -> Self {
        self.commentary_history = limit;
        self
    }
}
