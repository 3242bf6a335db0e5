//! Setup and loading errors.
//!
//! Ordinary rule violations (wrong player, empty deck, full zone) are not
//! errors: commands report them through `bool`/`Option` results. `GameError`
//! covers faults that make it impossible to start a game at all.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("catalog needs at least {needed} bosses, found {found}")]
    NotEnoughBosses { needed: usize, found: usize },

    #[error("boss index {index} out of range (catalog has {available})")]
    BossIndexOutOfRange { index: usize, available: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("failed to parse configuration")]
    ConfigParse {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse card catalog")]
    CatalogParse {
        #[source]
        source: serde_json::Error,
    },
}
