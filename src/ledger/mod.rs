//! Wager and partnership ledger.
//!
//! - Round wagers draw from per-colour decks held by the current round
//! - Final wagers live for the whole game
//! - Partnerships pair two players for one round

pub mod partnership;
pub mod wager;

pub use partnership::{create_partnership, Partnership};
pub use wager::{
    place_wager, AvailableWagerCards, FinalWager, FinalWagerKind, WagerCard, WagerDecks,
};
