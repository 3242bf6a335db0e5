//! Victory evaluation.
//!
//! Checked once per round, after the trials resolve. Players are examined in
//! seat order and the first condition met decides the game, so a round in
//! which both players cross a threshold goes to the lower seat's outcome.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{GameConfig, GameState, PlayerId};

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VictoryReason {
    /// The winner reached the trial threshold.
    TrialsWon,
    /// The loser reached the failure threshold.
    FailuresReached { loser: PlayerId },
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub winner: PlayerId,
    pub reason: VictoryReason,
}

impl Verdict {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Check the thresholds. Returns `None` while the game continues.
#[must_use]
pub fn evaluate_victory(state: &GameState, config: &GameConfig) -> Option<Verdict> {
    for (player, board) in state.players.iter() {
        if board.trials_won >= config.trials_to_win {
            return Some(Verdict {
                winner: player,
                reason: VictoryReason::TrialsWon,
            });
        }
        if board.trials_failed >= config.failures_to_lose {
            return Some(Verdict {
                winner: player.opponent(),
                reason: VictoryReason::FailuresReached { loser: player },
            });
        }
    }
    None
}

/// Record a verdict on the state.
pub fn apply_verdict(state: &mut GameState, verdict: &Verdict) {
    state.game_over = true;
    state.winner = Some(verdict.winner);
    info!(winner = %verdict.winner, reason = ?verdict.reason, turn = state.turn_number, "game over");
}
