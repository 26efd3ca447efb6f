//! # camel-derby
//!
//! A deterministic simulation engine for a camel racing and betting board
//! game.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: `CamelRace` is the only thing that mutates a race.
//!    Every other module is plain data plus pure rule checks.
//!
//! 2. **Refusals Are Values**: A move the rules forbid returns
//!    `Err(RuleViolation)` and leaves the race untouched.
//!
//! 3. **Configuration Over Convention**: Start layout, special-die
//!    behaviour, round-end trigger and payouts live in `RaceConfig`.
//!
//! ## Architecture
//!
//! - **Seeded Dice**: All randomness flows through `GameRng` (ChaCha8), so a
//!   seed replays a race exactly.
//!
//! - **Persistent History**: Round records use `im-rs` vectors; snapshots
//!   clone in O(1) and encode with bincode.
//!
//! ## Modules
//!
//! - `core`: Players, state, RNG, configuration, errors
//! - `board`: Camels, spaces, stacks and movement
//! - `dice`: Die resolution
//! - `ledger`: Round wagers, final wagers, partnerships
//! - `spectators`: Spectator token placement
//! - `round`: Round records and scoring
//! - `rules`: The race engine and snapshots

pub mod core;
pub mod board;
pub mod dice;
pub mod ledger;
pub mod spectators;
pub mod round;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap, Player,
    GameRng, GameRngState,
    RaceConfig, PayoutTable, StartLayout, SpecialDiePolicy, RoundEndRule,
    GameState, Phase,
    RuleViolation, SnapshotError,
};

pub use crate::board::{Board, Camel, CamelColor, CamelMove, Space, StackPosition};

pub use crate::dice::{DieKind, DieRoll};

pub use crate::ledger::{FinalWager, FinalWagerKind, Partnership, WagerCard, WagerDecks};

pub use crate::spectators::{SpectatorToken, TokenLanding, TokenSide};

pub use crate::round::{RoundPayout, RoundResults, RoundScorer, StandardScorer};

pub use crate::rules::{CamelRace, RaceSnapshot, RollOutcome};
