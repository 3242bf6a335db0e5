//! The three shared decks.
//!
//! Decks are ordered stacks: the top card is the last element, so drawing is
//! a `pop`. Each deck is shuffled once when the game is built.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardCatalog, HeroCard, InstallationCard, InterventionCard};
use crate::core::rng::GameRng;

/// Which shared deck to draw from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckKind {
    Protagonists,
    Installations,
    Interventions,
}

impl DeckKind {
    pub const ALL: [DeckKind; 3] = [
        DeckKind::Protagonists,
        DeckKind::Installations,
        DeckKind::Interventions,
    ];
}

/// Remaining cards per deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckStatus {
    pub protagonists: usize,
    pub installations: usize,
    pub interventions: usize,
}

impl DeckStatus {
    #[must_use]
    pub fn total(&self) -> usize {
        self.protagonists + self.installations + self.interventions
    }
}

/// The three shared decks.
#[derive(Clone, Debug, Default)]
pub struct Decks {
    protagonists: Vec<HeroCard>,
    installations: Vec<InstallationCard>,
    interventions: Vec<InterventionCard>,
}

impl Decks {
    /// Build unshuffled decks from a catalog.
    #[must_use]
    pub fn from_catalog(catalog: &CardCatalog) -> Self {
        Self {
            protagonists: catalog.heroes.clone(),
            installations: catalog.installations.clone(),
            interventions: catalog.interventions.clone(),
        }
    }

    /// Shuffle one deck in place.
    pub fn shuffle(&mut self, kind: DeckKind, rng: &mut GameRng) {
        match kind {
            DeckKind::Protagonists => rng.shuffle(&mut self.protagonists),
            DeckKind::Installations => rng.shuffle(&mut self.installations),
            DeckKind::Interventions => rng.shuffle(&mut self.interventions),
        }
    }

    /// Shuffle every deck, in `DeckKind::ALL` order.
    pub fn shuffle_all(&mut self, rng: &mut GameRng) {
        for kind in DeckKind::ALL {
            self.shuffle(kind, rng);
        }
    }

    /// Cards remaining in a deck.
    #[must_use]
    pub fn len(&self, kind: DeckKind) -> usize {
        match kind {
            DeckKind::Protagonists => self.protagonists.len(),
            DeckKind::Installations => self.installations.len(),
            DeckKind::Interventions => self.interventions.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self, kind: DeckKind) -> bool {
        self.len(kind) == 0
    }

    /// Remove the top card of a deck.
    pub fn pop(&mut self, kind: DeckKind) -> Option<Card> {
        match kind {
            DeckKind::Protagonists => self.protagonists.pop().map(Card::Hero),
            DeckKind::Installations => self.installations.pop().map(Card::Installation),
            DeckKind::Interventions => self.interventions.pop().map(Card::Intervention),
        }
    }

    /// Remove the top hero of the protagonist deck.
    pub fn pop_hero(&mut self) -> Option<HeroCard> {
        self.protagonists.pop()
    }

    /// Top hero without removing it.
    #[must_use]
    pub fn peek_hero(&self) -> Option<&HeroCard> {
        self.protagonists.last()
    }

    #[must_use]
    pub fn status(&self) -> DeckStatus {
        DeckStatus {
            protagonists: self.protagonists.len(),
            installations: self.installations.len(),
            interventions: self.interventions.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ResourceKind, Treasure};

    fn small_catalog() -> CardCatalog {
        CardCatalog::new()
            .with_hero(HeroCard::new("A", 3, ResourceKind::Science))
            .with_hero(HeroCard::new("B", 4, ResourceKind::Dramatic))
            .with_installation(InstallationCard::new("Room", 2, Treasure::none()))
    }

    #[test]
    fn test_pop_from_tail() {
        let mut decks = Decks::from_catalog(&small_catalog());

        let top = decks.pop(DeckKind::Protagonists).unwrap();
        assert_eq!(top.name(), "B");
        assert_eq!(decks.len(DeckKind::Protagonists), 1);
    }

    #[test]
    fn test_pop_empty_deck() {
        let mut decks = Decks::from_catalog(&small_catalog());

        assert!(decks.is_empty(DeckKind::Interventions));
        assert_eq!(decks.pop(DeckKind::Interventions), None);
        assert_eq!(decks.len(DeckKind::Interventions), 0);
    }

    #[test]
    fn test_status() {
        let decks = Decks::from_catalog(&CardCatalog::standard());
        let status = decks.status();

        assert_eq!(status.protagonists, 13);
        assert_eq!(status.installations, 21);
        assert_eq!(status.interventions, 9);
        assert_eq!(status.total(), 43);
    }

    #[test]
    fn test_shuffle_all_preserves_counts() {
        let mut decks = Decks::from_catalog(&CardCatalog::standard());
        let before = decks.status();

        decks.shuffle_all(&mut GameRng::new(9));

        assert_eq!(decks.status(), before);
    }
}
