//! Error types.
//!
//! Rule refusals are ordinary values: every refusal leaves the race state
//! untouched. Programmer errors (unknown player, space index off the track)
//! panic instead.

use thiserror::Error;

use super::player::PlayerId;
use crate::board::CamelColor;

/// A move the rules refuse.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("space {space} is occupied by a camel")]
    CamelOnSpace { space: usize },

    #[error("space {space} already holds a spectator token")]
    TokenOnSpace { space: usize },

    #[error("space {space} is next to a spectator token")]
    AdjacentToken { space: usize },

    #[error("{player} already has a spectator token on the board")]
    TokenAlreadyPlaced { player: PlayerId },

    #[error("{player} has no spectator token on the board")]
    NoTokenOnBoard { player: PlayerId },

    #[error("{player} is already in a partnership this round")]
    AlreadyPartnered { player: PlayerId },

    #[error("{player} cannot partner with themselves")]
    SelfPartnership { player: PlayerId },

    #[error("no {color} wager cards left this round")]
    DeckExhausted { color: CamelColor },

    #[error("{color} is not a regular camel")]
    NotRegular { color: CamelColor },

    #[error("the game is over")]
    GameOver,
}

/// Failure to encode or decode a race snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] bincode::Error),
}
