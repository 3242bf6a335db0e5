//! Trial resolution.
//!
//! A hero walks a lair's installations in placement order, taking each
//! room's damage until its health reaches zero. Rooms after that point are
//! never entered.
//!
//! A defeated hero is a trial won for the lair's owner; a survivor is a
//! failure. Epic heroes count double either way.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::HeroInstance;
use crate::core::{GameState, PlayerId};
use crate::zones::PlayerBoard;

/// Outcome of one hero's trial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialResult {
    pub hero_name: String,
    pub player: PlayerId,
    pub damage_dealt: i32,
    pub defeated: bool,
    /// Health left after the walk, never below zero.
    pub remaining_health: i32,
    pub is_epic: bool,
}

impl TrialResult {
    /// Trials or failures this result is worth.
    #[must_use]
    pub fn stakes(&self) -> u32 {
        if self.is_epic {
            2
        } else {
            1
        }
    }
}

/// Notable shapes a round of trials can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialEvent {
    EpicHeroDefeated,
    EpicHeroSurvived,
    /// Every hero this round was defeated.
    PerfectTurn,
    /// Every hero this round survived.
    TotalFailure,
}

impl SpecialEvent {
    pub const ALL: [SpecialEvent; 4] = [
        SpecialEvent::EpicHeroDefeated,
        SpecialEvent::EpicHeroSurvived,
        SpecialEvent::PerfectTurn,
        SpecialEvent::TotalFailure,
    ];
}

/// Walk a hero through a lair. Does not touch the board's counters.
#[must_use]
pub fn run_trial(board: &PlayerBoard, player: PlayerId, hero: &HeroInstance) -> TrialResult {
    let mut remaining = hero.card.health;
    let mut damage_dealt = 0;

    for placed in board.installations.iter() {
        if remaining <= 0 {
            break;
        }
        let damage = placed.damage();
        remaining -= damage;
        damage_dealt += damage;
    }

    TrialResult {
        hero_name: hero.card.name.clone(),
        player,
        damage_dealt,
        defeated: remaining <= 0,
        remaining_health: remaining.max(0),
        is_epic: hero.card.is_epic,
    }
}

/// Credit a result to the board it was run against.
pub fn apply_result(board: &mut PlayerBoard, result: &TrialResult) {
    if result.defeated {
        board.trials_won += result.stakes();
    } else {
        board.trials_failed += result.stakes();
    }
}

/// Run every active trial in attraction order, credit the outcomes and
/// discard the heroes.
pub fn resolve_trials(state: &mut GameState) -> Vec<TrialResult> {
    let trials: Vec<_> = state.active_trials.iter().cloned().collect();
    let mut results = Vec::with_capacity(trials.len());

    for trial in trials {
        let board = &mut state.players[trial.target];
        let result = run_trial(board, trial.target, &trial.hero);
        apply_result(board, &result);

        if result.defeated {
            info!(player = %result.player, hero = %result.hero_name, gained = result.stakes(), "hero defeated");
        } else {
            info!(player = %result.player, hero = %result.hero_name, gained = result.stakes(), "hero survived");
        }
        results.push(result);
    }

    state.clear_trials();
    results
}

/// The most notable event in a round, if any.
///
/// Checked in order: an epic defeat, an epic survival, a clean sweep, a
/// total rout. An empty round has no event.
#[must_use]
pub fn special_event(results: &[TrialResult]) -> Option<SpecialEvent> {
    if results.iter().any(|r| r.is_epic && r.defeated) {
        return Some(SpecialEvent::EpicHeroDefeated);
    }
    if results.iter().any(|r| r.is_epic && !r.defeated) {
        return Some(SpecialEvent::EpicHeroSurvived);
    }
    if results.is_empty() {
        return None;
    }
    if results.iter().all(|r| r.defeated) {
        return Some(SpecialEvent::PerfectTurn);
    }
    if results.iter().all(|r| !r.defeated) {
        return Some(SpecialEvent::TotalFailure);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardInstance, HeroCard, InstallationCard, PlacedCard, ResourceKind, Treasure};
    use crate::core::InstanceId;

    fn lair(damages: &[i32]) -> PlayerBoard {
        let mut board = PlayerBoard::default();
        for (i, &damage) in damages.iter().enumerate() {
            board.installations.push_back(PlacedCard {
                instance: CardInstance::new(
                    InstanceId(i as u32),
                    Card::Installation(InstallationCard::new("Room", damage, Treasure::none())),
                ),
                face_down: false,
            });
        }
        board
    }

    fn hero(health: i32) -> HeroInstance {
        HeroInstance::new(InstanceId(99), HeroCard::new("Hero", health, ResourceKind::Science))
    }

    fn result(is_epic: bool, defeated: bool) -> TrialResult {
        TrialResult {
            hero_name: "Hero".to_string(),
            player: PlayerId::FIRST,
            damage_dealt: 0,
            defeated,
            remaining_health: 0,
            is_epic,
        }
    }

    #[test]
    fn test_hero_stops_taking_damage_once_defeated() {
        let board = lair(&[2, 2, 2, 2]);
        let result = run_trial(&board, PlayerId::FIRST, &hero(5));

        assert!(result.defeated);
        assert_eq!(result.damage_dealt, 6);
        assert_eq!(result.remaining_health, 0);
    }

    #[test]
    fn test_empty_lair_fails() {
        let result = run_trial(&PlayerBoard::default(), PlayerId::SECOND, &hero(1));

        assert!(!result.defeated);
        assert_eq!(result.damage_dealt, 0);
        assert_eq!(result.remaining_health, 1);
    }

    #[test]
    fn test_zero_health_hero_is_defeated_without_damage() {
        let result = run_trial(&lair(&[3]), PlayerId::FIRST, &hero(0));

        assert!(result.defeated);
        assert_eq!(result.damage_dealt, 0);
    }

    #[test]
    fn test_apply_result_epic_counts_double() {
        let mut board = PlayerBoard::default();

        apply_result(&mut board, &result(true, true));
        apply_result(&mut board, &result(false, false));
        apply_result(&mut board, &result(true, false));

        assert_eq!(board.trials_won, 2);
        assert_eq!(board.trials_failed, 3);
    }

    #[test]
    fn test_special_event_priority() {
        assert_eq!(special_event(&[]), None);
        assert_eq!(
            special_event(&[result(false, true), result(true, true)]),
            Some(SpecialEvent::EpicHeroDefeated)
        );
        assert_eq!(
            special_event(&[result(true, false), result(true, true)]),
            Some(SpecialEvent::EpicHeroDefeated)
        );
        assert_eq!(
            special_event(&[result(true, false), result(false, true)]),
            Some(SpecialEvent::EpicHeroSurvived)
        );
        assert_eq!(
            special_event(&[result(false, true), result(false, true)]),
            Some(SpecialEvent::PerfectTurn)
        );
        assert_eq!(
            special_event(&[result(false, false)]),
            Some(SpecialEvent::TotalFailure)
        );
        assert_eq!(special_event(&[result(false, false), result(false, true)]), None);
    }
}
