//! Game construction.

use tracing::info;

use super::machine::Game;
use crate::cards::CardCatalog;
use crate::commentary::{Commentary, DialogueBook};
use crate::core::{GameConfig, GameError, GameState, PlayerId, PLAYER_COUNT};
use crate::zones::Decks;

/// Builder for creating a `Game`.
///
/// ```
/// use cosmic_trials::{GameBuilder, PhaseId};
///
/// let game = GameBuilder::new().bosses(3, 4).build(42).unwrap();
///
/// assert_eq!(game.state().phase, PhaseId::Initialization);
/// assert_eq!(game.state().players[cosmic_trials::PlayerId::FIRST].hand.len(), 5);
/// ```
pub struct GameBuilder {
    config: GameConfig,
    catalog: Option<CardCatalog>,
    dialogue: Option<DialogueBook>,
    bosses: [usize; PLAYER_COUNT],
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            catalog: None,
            dialogue: None,
            bosses: [0, 1],
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Cards to play with. Defaults to the standard set.
    pub fn catalog(mut self, catalog: CardCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Commentary lines. Defaults to the standard book.
    pub fn dialogue(mut self, dialogue: DialogueBook) -> Self {
        self.dialogue = Some(dialogue);
        self
    }

    /// Catalog indices of each player's boss. Defaults to the first two.
    pub fn bosses(mut self, first: usize, second: usize) -> Self {
        self.bosses = [first, second];
        self
    }

    /// Build a game ready for its first `advance_phase`: decks shuffled,
    /// bosses assigned, opening hands dealt.
    pub fn build(self, seed: u64) -> Result<Game, GameError> {
        self.config.validate()?;

        let catalog = self.catalog.unwrap_or_else(CardCatalog::standard);
        if catalog.bosses.len() < PLAYER_COUNT {
            return Err(GameError::NotEnoughBosses {
                needed: PLAYER_COUNT,
                found: catalog.bosses.len(),
            });
        }

        let mut state = GameState::new(seed).with_max_installations(self.config.max_installations);
        state.set_decks(Decks::from_catalog(&catalog));
        state.shuffle_decks();

        for (player, &index) in PlayerId::all().zip(self.bosses.iter()) {
            let boss = catalog
                .bosses
                .get(index)
                .cloned()
                .ok_or(GameError::BossIndexOutOfRange {
                    index,
                    available: catalog.bosses.len(),
                })?;
            state.assign_boss(player, boss);
        }

        state.deal_initial_hands(self.config.initial_hand_size);

        let commentary = Commentary::new(
            self.dialogue.unwrap_or_else(DialogueBook::standard),
            self.config.commentary_history,
            state.rng.for_context("commentary"),
        );

        info!(
            seed,
            first = state.players[PlayerId::FIRST].boss.as_ref().map_or("", |b| b.name.as_str()),
            second = state.players[PlayerId::SECOND].boss.as_ref().map_or("", |b| b.name.as_str()),
            "game created"
        );

        Ok(Game::from_parts(state, self.config, commentary))
    }
}
