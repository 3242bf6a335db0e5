//! Card instances - runtime card state.
//!
//! A definition becomes an instance the moment it leaves its deck. The
//! instance id is what lets the engine pull one specific hero out of the pool
//! even when two copies of the same definition are waiting there.

use serde::{Deserialize, Serialize};

use super::definition::{Card, HeroCard, ResourceKind};
use crate::core::entity::InstanceId;

/// A drawn card (in a hand or in the installation zone).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    pub id: InstanceId,
    pub card: Card,
}

impl CardInstance {
    #[must_use]
    pub fn new(id: InstanceId, card: Card) -> Self {
        Self { id, card }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.card.name()
    }
}

/// A card sitting in a player's installation zone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCard {
    pub instance: CardInstance,
    pub face_down: bool,
}

impl PlacedCard {
    #[must_use]
    pub fn damage(&self) -> i32 {
        self.instance.card.damage()
    }

    /// Treasure counts regardless of facing.
    #[must_use]
    pub fn treasure_count(&self, kind: ResourceKind) -> u32 {
        self.instance.card.treasure_count(kind)
    }
}

/// A revealed hero waiting in the pool or on its way through a trial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroInstance {
    pub id: InstanceId,
    pub card: HeroCard,
}

impl HeroInstance {
    #[must_use]
    pub fn new(id: InstanceId, card: HeroCard) -> Self {
        Self { id, card }
    }
}
