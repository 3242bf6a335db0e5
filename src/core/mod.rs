//! Core engine types: instance ids, players, phases, state, RNG, configuration.
//!
//! Everything the rules and the commentary layer build on lives here. Game
//! variants tune behavior through `GameConfig` rather than by editing the core.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod phase;
pub mod state;

pub use entity::{InstanceId, InstanceIdAllocator};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::GameConfig;
pub use error::GameError;
pub use phase::PhaseId;
pub use state::{ActiveTrial, GameSnapshot, GameState};
