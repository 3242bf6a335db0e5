//! Card catalog - every definition a game is built from.
//!
//! The catalog is loaded once at startup, either the built-in standard set or
//! a JSON document of the same shape:
//!
//! ```json
//! {
//!   "bosses":        [{ "name": "The Monarch", "xp": 500, "treasure": ["dramatic"] }],
//!   "heroes":        [{ "name": "Dean Venture", "health": 3, "treasure_kind": "science" }],
//!   "installations": [{ "name": "Trap Corridor", "damage": 2, "treasure": ["government"] }],
//!   "interventions": [{ "name": "Guild Mandate", "effect": "steal_hero" }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::definition::{
    BossCard, HeroCard, InstallationCard, InterventionCard, InterventionEffect, ResourceKind,
    Treasure,
};
use crate::core::error::GameError;

use ResourceKind::{Corporate, Dramatic, Government, Science};

/// All card definitions for a game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardCatalog {
    /// Bosses in selection order.
    pub bosses: Vec<BossCard>,
    /// Protagonist deck contents (one entry per physical card).
    pub heroes: Vec<HeroCard>,
    /// Installation deck contents.
    pub installations: Vec<InstallationCard>,
    /// Intervention deck contents.
    pub interventions: Vec<InterventionCard>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        serde_json::from_str(json).map_err(|source| GameError::CatalogParse { source })
    }

    #[must_use]
    pub fn with_boss(mut self, boss: BossCard) -> Self {
        self.bosses.push(boss);
        self
    }

    #[must_use]
    pub fn with_hero(mut self, hero: HeroCard) -> Self {
        self.heroes.push(hero);
        self
    }

    #[must_use]
    pub fn with_installation(mut self, installation: InstallationCard) -> Self {
        self.installations.push(installation);
        self
    }

    #[must_use]
    pub fn with_intervention(mut self, intervention: InterventionCard) -> Self {
        self.interventions.push(intervention);
        self
    }

    /// Total number of deck cards (bosses excluded).
    #[must_use]
    pub fn deck_card_count(&self) -> usize {
        self.heroes.len() + self.installations.len() + self.interventions.len()
    }

    /// The standard card set.
    #[must_use]
    pub fn standard() -> Self {
        let boss = |name: &str, xp: u32, kind: ResourceKind, level_up: &str| BossCard {
            level_up_text: Some(level_up.to_string()),
            ..BossCard::new(name, xp, Treasure::of(kind, 1))
        };
        let room = |name: &str, damage: i32, kind: ResourceKind, count: usize| {
            InstallationCard::new(name, damage, Treasure::of(kind, count))
        };
        let spell = |name: &str, effect: InterventionEffect| InterventionCard::new(name, effect);

        let bosses = vec![
            boss("The Monarch", 500, Dramatic, "Cocoon Protocol Approved"),
            boss("Dr. Girlfriend", 600, Corporate, "Guild Leadership Validated"),
            boss("Phantom Limb", 550, Government, "Revenge Protocol Sanctioned"),
            boss("The Sovereign", 700, Dramatic, "Guild Supremacy Confirmed"),
            boss("Baron Ünderbheit", 520, Science, "Ünderland Operations Authorized"),
            boss("Dr. Venture", 400, Science, "Scientific Protocols Acknowledged"),
        ];

        let heroes = vec![
            HeroCard::new("Brock Samson", 6, Government),
            HeroCard::new("Dean Venture", 3, Science).bumbling(),
            HeroCard::new("Hank Venture", 4, Dramatic).bumbling(),
            HeroCard::new("Colonel Gentleman", 5, Government),
            HeroCard::new("The Alchemist", 4, Science),
            HeroCard::new("Shore Leave", 5, Government),
            HeroCard::new("Pete White", 3, Science),
            HeroCard::new("Billy Quizboy", 3, Science),
            HeroCard::new("Hunter Gathers", 6, Government),
            HeroCard::new("Triana Orpheus", 4, Dramatic),
            HeroCard {
                special_ability: Some("May panic and flee before full assessment".to_string()),
                ..HeroCard::new("Dr. Venture", 8, Science).epic()
            },
            HeroCard {
                special_ability: Some("+1 damage vs Team Venture".to_string()),
                ..HeroCard::new("The Monarch (Protagonist)", 10, Dramatic).epic()
            },
            HeroCard::new("Phantom Limb (Protagonist)", 9, Government).epic(),
        ];

        let mut installations = Vec::new();
        for (name, damage, kind, count) in [
            ("Death Ray Chamber", 3, Science, 1),
            ("Dramatic Reveal Room", 2, Dramatic, 1),
            ("Corporate Boardroom", 1, Corporate, 2),
            ("Secret Laboratory", 2, Science, 2),
            ("Butterfly Sanctuary", 1, Dramatic, 1),
            ("Henchmen Quarters", 1, Corporate, 1),
            ("Trap Corridor", 2, Government, 1),
        ] {
            installations.push(room(name, damage, kind, count));
            installations.push(room(name, damage, kind, count));
        }
        installations.push(room("Interrogation Chamber", 2, Government, 1));
        installations.push(room("Torture Room", 3, Dramatic, 1));
        installations.push(room("The Cocoon", 4, Dramatic, 1).advanced(Dramatic));
        installations.push(room("The Cocoon", 4, Dramatic, 1).advanced(Dramatic));
        installations.push(room("Ünderbheit's Jaw Trap", 5, Science, 1).advanced(Science));
        installations.push(InstallationCard {
            special_ability: Some("Draw extra card".to_string()),
            ..room("Guild Council Chamber", 3, Government, 1).advanced(Government)
        });
        installations.push(room("Corporate Pyramid Scheme", 2, Corporate, 2).advanced(Corporate));

        let interventions = vec![
            spell("Galactic Override!", InterventionEffect::CancelAbility),
            spell("Galactic Override!", InterventionEffect::CancelAbility),
            spell("Henchmen Deployment!", InterventionEffect::AddDamage { bonus: 2 }),
            spell("Henchmen Deployment!", InterventionEffect::AddDamage { bonus: 2 }),
            spell("Cosmic Revelation!", InterventionEffect::ForceMove),
            spell("Scientific Breakthrough!", InterventionEffect::DrawCard),
            spell("Scientific Breakthrough!", InterventionEffect::DrawCard),
            spell("Violation Recorded!", InterventionEffect::AddFailure),
            spell("Guild Mandate", InterventionEffect::StealHero),
        ];

        Self {
            bosses,
            heroes,
            installations,
            interventions,
        }
    }
}
