//! Card locations: the three shared decks and each player's board.
//!
//! ## Key Types
//!
//! - `DeckKind` / `Decks`: Protagonist, installation and intervention piles
//! - `DeckStatus`: Remaining deck sizes for display
//! - `PlayerBoard`: A player's boss, hand, installations and score
//!
//! Higher-level deck and hand operations that need both (drawing into a hand,
//! revealing heroes into the pool) live on `GameState`.

pub mod board;
pub mod decks;

pub use board::PlayerBoard;
pub use decks::{DeckKind, DeckStatus, Decks};
