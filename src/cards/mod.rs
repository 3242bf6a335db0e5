//! Card system: definitions, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `Card`: Tagged union of the four card kinds
//! - `ResourceKind` / `Treasure`: What heroes are attracted to
//! - `CardInstance` / `HeroInstance`: Cards stamped with a per-game id
//! - `PlacedCard`: A card in the installation zone, with its facing
//! - `CardCatalog`: Static definitions loaded once at startup

pub mod catalog;
pub mod definition;
pub mod instance;

pub use catalog::CardCatalog;
pub use definition::{
    BossCard, Card, HeroCard, InstallationCard, InstallationKind, InterventionCard,
    InterventionEffect, ResourceKind, Treasure,
};
pub use instance::{CardInstance, HeroInstance, PlacedCard};
