//! Race configuration.
//!
//! A `RaceConfig` fixes the tunable rules of a race at startup:
//! - How camels are laid out before the first roll
//! - How often the special die comes up, and whether it moves camels
//! - When a round ends
//! - The wager deck and payout tables
//!
//! Defaults reproduce the base game. The track length is fixed at
//! [`TRACK_LENGTH`] spaces.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// Number of spaces on the track.
pub const TRACK_LENGTH: usize = 16;

/// Coins each player starts with.
pub const STARTING_COINS: i64 = 3;

/// Regular rolls recorded before a round ends.
pub const ROLLS_PER_ROUND: usize = 5;

/// Wager card denominations per regular colour, highest first.
pub type Denominations = SmallVec<[u8; 4]>;

/// Camel placement before the first roll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartLayout {
    /// Every camel starts on space 0, stacked in creation order
    /// (red at the bottom, black on top).
    #[default]
    Stacked,
    /// Camels are placed by a setup throw: regular camels on space
    /// `value - 1`, special camels on `last - (value - 1)`.
    Rolled,
}

/// What a special-die result does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialDiePolicy {
    /// The result is reported but no camel moves.
    #[default]
    Ignore,
    /// The drawn special camel moves backward. The roll still does not
    /// count toward the round end.
    MoveBackward,
}

/// Condition that closes a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEndRule {
    /// The round ends once this many regular rolls are recorded.
    /// Colours are drawn with replacement, so repeats count.
    RollCount(usize),
    /// The round ends once every regular colour has been rolled.
    AllColorsRolled,
}

impl Default for RoundEndRule {
    fn default() -> Self {
        Self::RollCount(ROLLS_PER_ROUND)
    }
}

/// Coin amounts used by the standard scorer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutTable {
    /// Paid for a wager on the second camel.
    pub second_place: i64,
    /// Paid (usually negative) for a wager on any other camel.
    pub loser_penalty: i64,
    /// Multiplied by the token sign for each camel landing on a token.
    pub landing_reward: i64,
    /// Paid for correct final wagers, in placement order.
    pub final_payouts: Vec<i64>,
    /// Paid to correct final wagers beyond `final_payouts`.
    pub final_floor: i64,
    /// Paid (usually negative) for a wrong final wager.
    pub final_penalty: i64,
}

impl Default for PayoutTable {
    fn default() -> Self {
        Self {
            second_place: 1,
            loser_penalty: -1,
            landing_reward: 1,
            final_payouts: vec![8, 5, 3, 2, 1],
            final_floor: 1,
            final_penalty: -1,
        }
    }
}

/// Complete race configuration.
///
/// ```
/// use camel_derby::core::{RaceConfig, RoundEndRule, SpecialDiePolicy};
///
/// let config = RaceConfig::default()
///     .with_round_end(RoundEndRule::AllColorsRolled)
///     .with_special_die(SpecialDiePolicy::MoveBackward);
///
/// assert_eq!(config.starting_coins, 3);
/// assert_eq!(config.wager_denominations.as_slice(), &[5, 3, 2, 2]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RaceConfig {
    /// Coins each player starts with.
    pub starting_coins: i64,

    /// Initial camel placement.
    pub start_layout: StartLayout,

    /// Chance that a throw uses the special die.
    pub special_die_chance: f64,

    /// Effect of a special-die result.
    pub special_die: SpecialDiePolicy,

    /// When a round closes.
    pub round_end: RoundEndRule,

    /// Per-colour wager deck, highest denomination first.
    pub wager_denominations: Denominations,

    /// Scoring amounts.
    pub payouts: PayoutTable,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            starting_coins: STARTING_COINS,
            start_layout: StartLayout::default(),
            special_die_chance: 1.0 / 6.0,
            special_die: SpecialDiePolicy::default(),
            round_end: RoundEndRule::default(),
            wager_denominations: smallvec![5, 3, 2, 2],
            payouts: PayoutTable::default(),
        }
    }
}

impl RaceConfig {
    /// Set the starting layout.
    #[must_use]
    pub fn with_start_layout(mut self, layout: StartLayout) -> Self {
        self.start_layout = layout;
        self
    }

    /// Set the chance of a special-die throw.
    #[must_use]
    pub fn with_special_die_chance(mut self, chance: f64) -> Self {
        self.special_die_chance = chance;
        self
    }

    /// Set the special-die policy.
    #[must_use]
    pub fn with_special_die(mut self, policy: SpecialDiePolicy) -> Self {
        self.special_die = policy;
        self
    }

    /// Set the round-end rule.
    #[must_use]
    pub fn with_round_end(mut self, rule: RoundEndRule) -> Self {
        self.round_end = rule;
        self
    }

    /// Set the starting coin balance.
    #[must_use]
    pub fn with_starting_coins(mut self, coins: i64) -> Self {
        self.starting_coins = coins;
        self
    }

    /// Set the payout table.
    #[must_use]
    pub fn with_payouts(mut self, payouts: PayoutTable) -> Self {
        self.payouts = payouts;
        self
    }
}
