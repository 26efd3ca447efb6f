//! Per-round record.
//!
//! A `RoundResults` is opened when a round starts and collects everything
//! that happens until the round closes: regular dice, wagers, partnerships,
//! tokens and the camels that landed on them. Once scored it is frozen and
//! kept in the game history.

use serde::{Deserialize, Serialize};

use super::scoring::RoundPayout;
use crate::board::CamelColor;
use crate::core::config::{RaceConfig, RoundEndRule};
use crate::dice::DieRoll;
use crate::ledger::{Partnership, WagerCard, WagerDecks};
use crate::spectators::{SpectatorToken, TokenLanding};

/// Everything recorded during one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResults {
    /// Round number, starting at 1.
    pub round: u32,

    /// Regular rolls in the order they were resolved.
    pub dice_results: Vec<DieRoll>,

    /// Wagers placed this round.
    pub wagers: Vec<WagerCard>,

    /// Wager cards still available this round.
    pub available_wager_cards: WagerDecks,

    /// Partnerships formed this round.
    pub partnerships: Vec<Partnership>,

    /// Tokens placed this round, with their latest position.
    pub spectator_tokens: Vec<SpectatorToken>,

    /// Camel landings on tokened spaces.
    pub token_landings: Vec<TokenLanding>,

    /// Set once the round has been scored.
    pub payout: Option<RoundPayout>,
}

impl RoundResults {
    /// Open a round with full wager decks.
    #[must_use]
    pub fn new(round: u32, config: &RaceConfig) -> Self {
        Self {
            round,
            dice_results: Vec::new(),
            wagers: Vec::new(),
            available_wager_cards: WagerDecks::new(&config.wager_denominations),
            partnerships: Vec::new(),
            spectator_tokens: Vec::new(),
            token_landings: Vec::new(),
            payout: None,
        }
    }

    /// Whether the round-end condition holds.
    #[must_use]
    pub fn is_complete(&self, rule: RoundEndRule) -> bool {
        match rule {
            RoundEndRule::RollCount(n) => self.dice_results.len() >= n,
            RoundEndRule::AllColorsRolled => CamelColor::REGULAR
                .iter()
                .all(|c| self.dice_results.iter().any(|r| r.color == *c)),
        }
    }

    /// Whether the round has been scored.
    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.payout.is_some()
    }
}
