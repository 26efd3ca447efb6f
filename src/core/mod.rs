//! Core engine types: players, state, RNG, configuration, errors.
//!
//! This module holds the building blocks every other module shares.
//! Rule tuning goes through `RaceConfig` rather than code changes.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{
    PayoutTable, RaceConfig, RoundEndRule, SpecialDiePolicy, StartLayout, TRACK_LENGTH,
};
pub use error::{RuleViolation, SnapshotError};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Phase};
