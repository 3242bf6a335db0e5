//! A player's side of the table.
//!
//! Hands and installation zones use `im::Vector` so a full-state snapshot
//! costs a handful of pointer copies.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{BossCard, CardInstance, PlacedCard, ResourceKind};

/// Boss, hand, installations and score for one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBoard {
    /// The player's antagonist.
    pub boss: Option<BossCard>,

    /// Cards in hand, in draw order.
    pub hand: Vector<CardInstance>,

    /// Installation zone, in placement order.
    pub installations: Vector<PlacedCard>,

    /// Heroes defeated (epic heroes count twice).
    pub trials_won: u32,

    /// Heroes that survived (epic heroes count twice).
    pub trials_failed: u32,

    /// Attraction tie-break, taken from the boss's xp.
    pub ranking: u32,
}

impl PlayerBoard {
    /// Create a board for a boss. Ranking starts at the boss's xp.
    #[must_use]
    pub fn with_boss(boss: BossCard) -> Self {
        Self {
            ranking: boss.xp,
            boss: Some(boss),
            ..Self::default()
        }
    }

    /// Move a card from hand to the installation zone.
    ///
    /// Returns `false` and leaves the board untouched when `hand_index` is out
    /// of range or the zone already holds `capacity` cards.
    pub fn play(&mut self, hand_index: usize, face_down: bool, capacity: usize) -> bool {
        if hand_index >= self.hand.len() || self.installations.len() >= capacity {
            return false;
        }

        let instance = self.hand.remove(hand_index);
        self.installations.push_back(PlacedCard {
            instance,
            face_down,
        });
        true
    }

    /// Turn every face-down installation face-up.
    pub fn reveal_all(&mut self) {
        for placed in self.installations.iter_mut() {
            placed.face_down = false;
        }
    }

    /// Matching resources from the boss plus every installation.
    #[must_use]
    pub fn treasure_count(&self, kind: ResourceKind) -> u32 {
        let from_boss = self.boss.as_ref().map_or(0, |b| b.treasure.count(kind));
        let from_rooms: u32 = self
            .installations
            .iter()
            .map(|placed| placed.treasure_count(kind))
            .sum();
        from_boss + from_rooms
    }

    /// Treasure totals for every resource kind.
    #[must_use]
    pub fn all_treasures(&self) -> Vec<(ResourceKind, u32)> {
        ResourceKind::ALL
            .iter()
            .map(|&kind| (kind, self.treasure_count(kind)))
            .collect()
    }

    /// Trials minus failures.
    #[must_use]
    pub fn score(&self) -> i64 {
        i64::from(self.trials_won) - i64::from(self.trials_failed)
    }

    /// Number of face-down installations.
    #[must_use]
    pub fn face_down_count(&self) -> usize {
        self.installations.iter().filter(|p| p.face_down).count()
    }
}
