//! Card definitions - static card data.
//!
//! A `Card` is one of four kinds. Definitions never change during a game;
//! per-game identity (instance ids, face-down state) lives in
//! [`super::instance`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One of the four resource types heroes are drawn to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Science,
    Dramatic,
    Corporate,
    Government,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Science,
        ResourceKind::Dramatic,
        ResourceKind::Corporate,
        ResourceKind::Government,
    ];
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResourceKind::Science => "science",
            ResourceKind::Dramatic => "dramatic",
            ResourceKind::Corporate => "corporate",
            ResourceKind::Government => "government",
        };
        f.write_str(name)
    }
}

/// Multiset of resources printed on a card.
///
/// Serialized as a plain list: `["science", "science"]` is two science.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Treasure(SmallVec<[ResourceKind; 2]>);

impl Treasure {
    /// No treasure.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// `count` copies of a single resource.
    #[must_use]
    pub fn of(kind: ResourceKind, count: usize) -> Self {
        Self(std::iter::repeat(kind).take(count).collect())
    }

    /// How many of `kind` this treasure holds.
    #[must_use]
    pub fn count(&self, kind: ResourceKind) -> u32 {
        self.0.iter().filter(|&&k| k == kind).count() as u32
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ResourceKind> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<ResourceKind> for Treasure {
    fn from_iter<I: IntoIterator<Item = ResourceKind>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A player's antagonist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossCard {
    pub name: String,
    pub xp: u32,
    #[serde(default)]
    pub treasure: Treasure,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_up_text: Option<String>,
}

impl BossCard {
    #[must_use]
    pub fn new(name: impl Into<String>, xp: u32, treasure: Treasure) -> Self {
        Self {
            name: name.into(),
            xp,
            treasure,
            description: None,
            level_up_text: None,
        }
    }
}

/// A contested hero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroCard {
    pub name: String,
    pub health: i32,
    pub treasure_kind: ResourceKind,
    #[serde(default)]
    pub is_epic: bool,
    /// Printed on a few heroes. The trial rules do not consult it.
    #[serde(default)]
    pub bumbling: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_ability: Option<String>,
}

impl HeroCard {
    #[must_use]
    pub fn new(name: impl Into<String>, health: i32, treasure_kind: ResourceKind) -> Self {
        Self {
            name: name.into(),
            health,
            treasure_kind,
            is_epic: false,
            bumbling: false,
            description: None,
            special_ability: None,
        }
    }

    /// Mark as epic (worth two trials or failures).
    #[must_use]
    pub fn epic(mut self) -> Self {
        self.is_epic = true;
        self
    }

    #[must_use]
    pub fn bumbling(mut self) -> Self {
        self.bumbling = true;
        self
    }

    /// Trials or failures this hero is worth.
    #[must_use]
    pub fn stakes(&self) -> u32 {
        if self.is_epic {
            2
        } else {
            1
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallationKind {
    #[default]
    Ordinary,
    Advanced,
}

/// A room built into a player's lair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallationCard {
    pub name: String,
    #[serde(default)]
    pub damage: i32,
    #[serde(default)]
    pub treasure: Treasure,
    #[serde(default)]
    pub kind: InstallationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_requirement: Option<ResourceKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_ability: Option<String>,
}

impl InstallationCard {
    #[must_use]
    pub fn new(name: impl Into<String>, damage: i32, treasure: Treasure) -> Self {
        Self {
            name: name.into(),
            damage,
            treasure,
            kind: InstallationKind::Ordinary,
            upgrade_requirement: None,
            description: None,
            special_ability: None,
        }
    }

    /// Mark as an advanced installation built on top of `requirement`.
    #[must_use]
    pub fn advanced(mut self, requirement: ResourceKind) -> Self {
        self.kind = InstallationKind::Advanced;
        self.upgrade_requirement = Some(requirement);
        self
    }
}

/// What an intervention card does when cast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum InterventionEffect {
    CancelAbility,
    AddDamage { bonus: i32 },
    ForceMove,
    DrawCard,
    AddFailure,
    StealHero,
}

/// A one-shot intervention (spell) card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterventionCard {
    pub name: String,
    #[serde(flatten)]
    pub effect: InterventionEffect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl InterventionCard {
    #[must_use]
    pub fn new(name: impl Into<String>, effect: InterventionEffect) -> Self {
        Self {
            name: name.into(),
            effect,
            description: None,
        }
    }
}

/// Any card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Card {
    Boss(BossCard),
    Hero(HeroCard),
    Installation(InstallationCard),
    Intervention(InterventionCard),
}

impl Card {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Card::Boss(c) => &c.name,
            Card::Hero(c) => &c.name,
            Card::Installation(c) => &c.name,
            Card::Intervention(c) => &c.name,
        }
    }

    /// Damage dealt to a passing hero. Only installations have any.
    #[must_use]
    pub fn damage(&self) -> i32 {
        match self {
            Card::Installation(c) => c.damage,
            _ => 0,
        }
    }

    /// Treasure contributed while sitting in the installation zone.
    #[must_use]
    pub fn treasure_count(&self, kind: ResourceKind) -> u32 {
        match self {
            Card::Installation(c) => c.treasure.count(kind),
            _ => 0,
        }
    }
}
