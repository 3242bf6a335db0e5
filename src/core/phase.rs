//! Turn phases.
//!
//! The turn cycle is closed: every phase is a variant of `PhaseId` and every
//! transition is matched exhaustively by the phase machine.
//!
//! ```text
//! Initialization -> Emergence -> Construction -> Attraction -> Trial -> Evaluation
//!                       ^                                                  |
//!                       +--------------------------------------------------+
//! ```

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseId {
    /// Entered once at game start.
    Initialization,
    /// Heroes revealed, one draw per player.
    Emergence,
    /// Players build installations or pass. Waits for input.
    Construction,
    /// Heroes drawn to the best-matching lair.
    Attraction,
    /// Heroes run the gauntlet of installations.
    Trial,
    /// Turn bookkeeping.
    Evaluation,
}

impl PhaseId {
    /// Every phase in cycle order.
    pub const ALL: [PhaseId; 6] = [
        PhaseId::Initialization,
        PhaseId::Emergence,
        PhaseId::Construction,
        PhaseId::Attraction,
        PhaseId::Trial,
        PhaseId::Evaluation,
    ];

    /// Whether the phase needs a player command before it can end.
    #[must_use]
    pub const fn awaits_input(self) -> bool {
        matches!(self, PhaseId::Construction)
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            PhaseId::Initialization => "Cosmic Initialization",
            PhaseId::Emergence => "Protagonist Emergence",
            PhaseId::Construction => "Installation Construction",
            PhaseId::Attraction => "Cosmic Attraction",
            PhaseId::Trial => "Trial Execution",
            PhaseId::Evaluation => "Cosmic Evaluation",
        }
    }
}

impl Default for PhaseId {
    fn default() -> Self {
        PhaseId::Initialization
    }
}

impl std::fmt::Display for PhaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
