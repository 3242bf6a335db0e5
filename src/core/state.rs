//! Game state and the deck & hand operations that act on it.
//!
//! ## GameState
//!
//! Complete game state:
//! - Phase, turn, active player, passes
//! - Both player boards (boss, hand, installations, score)
//! - The hero pool and the heroes currently on trial
//! - The three shared decks
//! - RNG and the instance id counter
//!
//! ## GameSnapshot
//!
//! Read-only projection handed to the presentation layer. Boards and pools
//! are `im` structures, so taking a snapshot never deep-copies a hand.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::entity::{InstanceId, InstanceIdAllocator};
use super::phase::PhaseId;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{BossCard, CardInstance, HeroInstance, ResourceKind};
use crate::zones::{DeckKind, DeckStatus, Decks, PlayerBoard};

/// Default installation capacity.
pub const DEFAULT_MAX_INSTALLATIONS: usize = 5;

/// A hero bound to the player whose lair it will enter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveTrial {
    pub hero: HeroInstance,
    pub target: PlayerId,
}

/// Full game state.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Current phase.
    pub phase: PhaseId,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Player whose construction command is expected.
    pub active_player: PlayerId,

    /// Players that have passed this construction phase.
    passed: PlayerMap<bool>,

    /// Both boards.
    pub players: PlayerMap<PlayerBoard>,

    /// Revealed heroes nobody has attracted yet.
    pub hero_pool: Vector<HeroInstance>,

    /// Heroes assigned this turn, in attraction order.
    pub active_trials: Vector<ActiveTrial>,

    /// Set once a verdict is reached.
    pub game_over: bool,

    /// Winner, once the game is over.
    pub winner: Option<PlayerId>,

    /// Deterministic RNG for deck shuffles.
    pub rng: GameRng,

    decks: Decks,
    ids: InstanceIdAllocator,
    max_installations: usize,
}

impl GameState {
    /// Create an empty game state: no bosses, empty decks, turn 1.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            phase: PhaseId::Initialization,
            turn_number: 1,
            active_player: PlayerId::FIRST,
            passed: PlayerMap::with_value(false),
            players: PlayerMap::with_default(),
            hero_pool: Vector::new(),
            active_trials: Vector::new(),
            game_over: false,
            winner: None,
            rng: GameRng::new(seed),
            decks: Decks::default(),
            ids: InstanceIdAllocator::default(),
            max_installations: DEFAULT_MAX_INSTALLATIONS,
        }
    }

    /// Set installation capacity.
    #[must_use]
    pub fn with_max_installations(mut self, max: usize) -> Self {
        self.max_installations = max;
        self
    }

    #[must_use]
    pub fn max_installations(&self) -> usize {
        self.max_installations
    }

    /// Give a player their boss. Ranking follows the boss's xp.
    pub fn assign_boss(&mut self, player: PlayerId, boss: BossCard) {
        let board = &mut self.players[player];
        board.ranking = boss.xp;
        board.boss = Some(boss);
    }

    // === Decks ===

    /// Replace the decks.
    pub fn set_decks(&mut self, decks: Decks) {
        self.decks = decks;
    }

    /// Shuffle one deck.
    pub fn shuffle_deck(&mut self, kind: DeckKind) {
        self.decks.shuffle(kind, &mut self.rng);
    }

    /// Shuffle all three decks.
    pub fn shuffle_decks(&mut self) {
        self.decks.shuffle_all(&mut self.rng);
    }

    #[must_use]
    pub fn deck_size(&self, kind: DeckKind) -> usize {
        self.decks.len(kind)
    }

    #[must_use]
    pub fn deck_status(&self) -> DeckStatus {
        self.decks.status()
    }

    // === Hands ===

    /// Draw the top card of a deck into a player's hand.
    ///
    /// Returns `None` (and changes nothing) when the deck is empty.
    pub fn draw(&mut self, player: PlayerId, kind: DeckKind) -> Option<CardInstance> {
        let card = self.decks.pop(kind)?;
        let instance = CardInstance::new(self.ids.next_id(), card);
        debug!(%player, ?kind, card = instance.name(), "drew card");
        self.players[player].hand.push_back(instance.clone());
        Some(instance)
    }

    /// `count` installation draws for each player, seat order.
    pub fn deal_initial_hands(&mut self, count: usize) {
        self.draw_round(count);
    }

    /// Start-of-turn installation draws for each player.
    pub fn draw_phase_cards(&mut self, count: usize) {
        self.draw_round(count);
    }

    fn draw_round(&mut self, count: usize) {
        for player in PlayerId::all() {
            for _ in 0..count {
                self.draw(player, DeckKind::Installations);
            }
        }
    }

    /// Play a card from hand into the installation zone.
    ///
    /// Returns `false` without changing anything when the index is out of
    /// range or the zone is full.
    pub fn play(&mut self, player: PlayerId, hand_index: usize, face_down: bool) -> bool {
        let capacity = self.max_installations;
        let played = self.players[player].play(hand_index, face_down, capacity);
        if played {
            debug!(%player, hand_index, face_down, "installation played");
        }
        played
    }

    /// Flip all of a player's installations face-up.
    pub fn reveal_all(&mut self, player: PlayerId) {
        self.players[player].reveal_all();
    }

    /// Flip every installation on the table face-up.
    pub fn reveal_all_players(&mut self) {
        for (_, board) in self.players.iter_mut() {
            board.reveal_all();
        }
    }

    // === Heroes ===

    /// Reveal up to `count` heroes into the pool.
    ///
    /// Stops early when the protagonist deck runs out.
    pub fn reveal_heroes(&mut self, count: usize) -> Vec<HeroInstance> {
        let mut revealed = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(card) = self.decks.pop_hero() else {
                debug!("protagonist deck exhausted");
                break;
            };
            let hero = HeroInstance::new(self.ids.next_id(), card);
            debug!(hero = %hero.card.name, id = %hero.id, "hero revealed");
            self.hero_pool.push_back(hero.clone());
            revealed.push(hero);
        }
        revealed
    }

    /// Move a pooled hero onto a player's trial list.
    ///
    /// Returns `false` if no hero with that id is in the pool.
    pub fn move_hero_to_trial(&mut self, hero_id: InstanceId, target: PlayerId) -> bool {
        let Some(index) = self.hero_pool.iter().position(|h| h.id == hero_id) else {
            return false;
        };
        let hero = self.hero_pool.remove(index);
        self.active_trials.push_back(ActiveTrial { hero, target });
        true
    }

    /// Discard every hero on trial.
    pub fn clear_trials(&mut self) {
        self.active_trials.clear();
    }

    // === Scores ===

    /// Boss plus installation treasure of one kind.
    #[must_use]
    pub fn treasure_count(&self, player: PlayerId, kind: ResourceKind) -> u32 {
        self.players[player].treasure_count(kind)
    }

    /// Absolute difference between the players' trials-minus-failures.
    #[must_use]
    pub fn score_differential(&self) -> u32 {
        let first = self.players[PlayerId::FIRST].score();
        let second = self.players[PlayerId::SECOND].score();
        first.abs_diff(second) as u32
    }

    /// Players ordered by ranking, highest first. Equal ranks keep seat order.
    #[must_use]
    pub fn player_order_by_ranking(&self) -> Vec<PlayerId> {
        let mut order: Vec<PlayerId> = PlayerId::all().collect();
        order.sort_by_key(|&p| std::cmp::Reverse(self.players[p].ranking));
        order
    }

    // === Construction passes ===

    pub fn mark_passed(&mut self, player: PlayerId) {
        self.passed[player] = true;
    }

    #[must_use]
    pub fn has_passed(&self, player: PlayerId) -> bool {
        self.passed[player]
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        PlayerId::all().all(|p| self.passed[p])
    }

    pub fn reset_passes(&mut self) {
        self.passed = PlayerMap::with_value(false);
    }

    #[must_use]
    pub fn passed_players(&self) -> Vec<PlayerId> {
        PlayerId::all().filter(|&p| self.passed[p]).collect()
    }

    // === Turn advancement ===

    /// End-of-turn bookkeeping: next turn, first player active, clean slate.
    pub fn start_new_turn(&mut self) {
        self.turn_number += 1;
        self.active_player = PlayerId::FIRST;
        self.reset_passes();
        self.clear_trials();
    }

    /// Read-only projection for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            turn_number: self.turn_number,
            active_player: self.active_player,
            passed_players: self.passed_players(),
            players: self.players.clone(),
            hero_pool: self.hero_pool.clone(),
            active_trials: self.active_trials.clone(),
            decks: self.deck_status(),
            game_over: self.game_over,
            winner: self.winner,
        }
    }
}

/// Read-only view of the game for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: PhaseId,
    pub turn_number: u32,
    pub active_player: PlayerId,
    pub passed_players: Vec<PlayerId>,
    pub players: PlayerMap<PlayerBoard>,
    pub hero_pool: Vector<HeroInstance>,
    pub active_trials: Vector<ActiveTrial>,
    pub decks: DeckStatus,
    pub game_over: bool,
    pub winner: Option<PlayerId>,
}
