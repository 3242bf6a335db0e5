//! Round resolution.
//!
//! The three resolvers the phase machine runs every turn:
//! - `attraction`: which lair each pooled hero is drawn to
//! - `trial`: walking a hero through a lair and scoring the outcome
//! - `victory`: whether either player has crossed a threshold
//!
//! Resolvers are plain functions over `GameState`. They never emit
//! commentary; the phase machine turns their results into events.

pub mod attraction;
pub mod trial;
pub mod victory;

pub use attraction::{best_player_for, resolve_attraction, Attraction};
pub use trial::{apply_result, resolve_trials, run_trial, special_event, SpecialEvent, TrialResult};
pub use victory::{apply_verdict, evaluate_victory, Verdict, VictoryReason};
