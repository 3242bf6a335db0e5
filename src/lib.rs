//! # cosmic-trials
//!
//! A two-player card game engine. Each player runs an antagonist's lair;
//! heroes revealed every turn are drawn to the lair richest in their
//! resource and must survive its installations.
//!
//! ## Design Principles
//!
//! 1. **Closed turn cycle**: Six phases, one `PhaseId` enum, matched
//!    exhaustively. Only construction waits for players.
//!
//! 2. **Deterministic**: Every game is a function of its seed. Decks and
//!    commentary draw from independent RNG streams.
//!
//! 3. **Presentation is outside**: Renderers read `GameSnapshot`s and
//!    forward commands; the engine reports back through `GameObserver`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Hands, installations and the hero pool
//!   are `im` vectors, so snapshots are cheap.
//!
//! - **Rules as functions**: Attraction, trial and victory resolution are
//!   plain functions over `GameState`, testable without a running game.
//!
//! ## Modules
//!
//! - `core`: Instance ids, players, phases, state, RNG, configuration, errors
//! - `cards`: Card definitions, instances and the catalog
//! - `zones`: Shared decks and player boards
//! - `rules`: Attraction, trial and victory resolvers
//! - `commentary`: Context classification and non-repeating line selection
//! - `game`: Builder, phase machine and observer
//!
//! ## Example
//!
//! ```
//! use cosmic_trials::{GameBuilder, PhaseId, PlayerId};
//!
//! let mut game = GameBuilder::new().build(2024).unwrap();
//! game.advance_phase();
//! assert_eq!(game.phase(), PhaseId::Construction);
//!
//! game.build_action(PlayerId::FIRST, 0);
//! game.pass(PlayerId::SECOND);
//! game.pass(PlayerId::FIRST);
//! game.advance_phase();
//!
//! assert!(game.is_over() || game.state().turn_number == 2);
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod commentary;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    ActiveTrial, GameConfig, GameError, GameRng, GameSnapshot, GameState, InstanceId,
    InstanceIdAllocator, PhaseId, PlayerId, PlayerMap, PLAYER_COUNT,
};

pub use crate::cards::{
    BossCard, Card, CardCatalog, CardInstance, HeroCard, HeroInstance, InstallationCard,
    InstallationKind, InterventionCard, InterventionEffect, PlacedCard, ResourceKind, Treasure,
};

pub use crate::zones::{DeckKind, DeckStatus, Decks, PlayerBoard};

pub use crate::rules::{Attraction, SpecialEvent, TrialResult, Verdict, VictoryReason};

pub use crate::commentary::{
    Commentary, CosmicBalance, DialogueBook, EvaluationContext, LineHistory, Mood,
};

pub use crate::game::{
    DebugSummary, EventLog, Game, GameBuilder, GameObserver, NullObserver, ObservedEvent, Score,
};
