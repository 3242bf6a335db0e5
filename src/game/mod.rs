//! The playable game: construction, the phase machine and its observer.

pub mod builder;
pub mod machine;
pub mod observer;

pub use builder::GameBuilder;
pub use machine::{DebugSummary, Game, Score};
pub use observer::{EventLog, GameObserver, NullObserver, ObservedEvent};
