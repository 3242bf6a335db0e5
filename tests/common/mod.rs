//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::OnceLock;

use cosmic_trials::{BossCard, CardCatalog, HeroCard, InstallationCard, ResourceKind, Treasure};
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize test logging once. Level from `TEST_LOG`, then `RUST_LOG`,
/// then `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Two bosses: a science lair (seat one) and a dramatic lair (seat two).
pub fn science_vs_dramatic() -> CardCatalog {
    CardCatalog::new()
        .with_boss(BossCard::new("Baron", 520, Treasure::of(ResourceKind::Science, 1)))
        .with_boss(BossCard::new("Monarch", 500, Treasure::of(ResourceKind::Dramatic, 1)))
}

/// `count` identical science heroes.
pub fn with_science_heroes(catalog: CardCatalog, count: usize, health: i32) -> CardCatalog {
    (0..count).fold(catalog, |c, i| {
        c.with_hero(HeroCard::new(format!("Scientist {i}"), health, ResourceKind::Science))
    })
}

/// `count` identical rooms with no treasure.
pub fn with_rooms(catalog: CardCatalog, count: usize, damage: i32) -> CardCatalog {
    (0..count).fold(catalog, |c, _| {
        c.with_installation(InstallationCard::new("Death Ray", damage, Treasure::none()))
    })
}
