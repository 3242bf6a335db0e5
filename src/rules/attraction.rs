//! Attraction resolution.
//!
//! Each pooled hero is drawn to the lair holding the most of its resource.
//! Boss treasure and every installation count, face-down or not.
//!
//! Ties on a non-zero count go to the higher ranking; equal rankings keep the
//! lower seat. A hero nobody has any matching treasure for stays in the pool
//! and is considered again next turn.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{HeroCard, HeroInstance};
use crate::core::{GameState, InstanceId, PlayerId};

/// One hero moved from the pool onto a player's trial list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attraction {
    pub hero_id: InstanceId,
    pub hero_name: String,
    pub player: PlayerId,
    /// The winning player's count of the hero's resource.
    pub treasure_count: u32,
}

/// The player a hero would be drawn to, with their matching treasure count.
///
/// Returns `None` when no player holds any of the hero's resource.
#[must_use]
pub fn best_player_for(state: &GameState, hero: &HeroCard) -> Option<(PlayerId, u32)> {
    let mut best: Option<(PlayerId, u32)> = None;

    for player in PlayerId::all() {
        let count = state.treasure_count(player, hero.treasure_kind);
        best = match best {
            None => Some((player, count)),
            Some((leader, leader_count)) => {
                let outranks = state.players[player].ranking > state.players[leader].ranking;
                if count > leader_count || (count == leader_count && outranks) {
                    Some((player, count))
                } else {
                    best
                }
            }
        };
    }

    best.filter(|&(_, count)| count > 0)
}

/// Assign every pooled hero to a player.
///
/// Works from a snapshot of the pool. Attraction never changes a board, so
/// the order heroes are processed in does not affect where they go.
pub fn resolve_attraction(state: &mut GameState) -> Vec<Attraction> {
    let pool: Vec<HeroInstance> = state.hero_pool.iter().cloned().collect();
    let mut attractions = Vec::with_capacity(pool.len());

    for hero in pool {
        let Some((player, treasure_count)) = best_player_for(state, &hero.card) else {
            debug!(hero = %hero.card.name, kind = %hero.card.treasure_kind, "hero unclaimed, stays in pool");
            continue;
        };

        if state.move_hero_to_trial(hero.id, player) {
            debug!(hero = %hero.card.name, %player, treasure_count, "hero attracted");
            attractions.push(Attraction {
                hero_id: hero.id,
                hero_name: hero.card.name,
                player,
                treasure_count,
            });
        }
    }

    attractions
}
