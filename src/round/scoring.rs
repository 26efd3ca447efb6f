//! Round and final scoring.
//!
//! Scoring is a seam: the engine hands a finished round, the camel ranking
//! and the players to a `RoundScorer` and applies the `RoundPayout` it
//! returns. `StandardScorer` implements the base game's payout table.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::results::RoundResults;
use crate::board::CamelColor;
use crate::core::config::PayoutTable;
use crate::core::{Player, PlayerId, PlayerMap};
use crate::ledger::{FinalWager, FinalWagerKind, WagerCard};

/// Coin changes produced by one scoring pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPayout {
    /// Net coin delta per player. Players without an entry are unaffected.
    pub deltas: FxHashMap<PlayerId, i64>,
    /// Wager cards that paid out, kept by their players.
    pub won_cards: Vec<WagerCard>,
}

impl RoundPayout {
    /// Add `amount` to a player's delta.
    pub fn credit(&mut self, player: PlayerId, amount: i64) {
        *self.deltas.entry(player).or_insert(0) += amount;
    }

    /// A player's net delta.
    #[must_use]
    pub fn delta(&self, player: PlayerId) -> i64 {
        self.deltas.get(&player).copied().unwrap_or(0)
    }

    /// Apply the payout to the players. Balances never go below zero.
    pub fn apply(&self, players: &mut PlayerMap<Player>) {
        for (id, player) in players.iter_mut() {
            player.apply_coins(self.delta(id));
        }
        for card in &self.won_cards {
            players[card.player].wager_cards.push(*card);
        }
    }
}

/// Scoring rules.
///
/// ## Implementation Notes
///
/// - `ranking` lists regular camels leader first
/// - Both methods must be pure; the engine calls `score_round` exactly
///   once per round and `score_final` once per game
pub trait RoundScorer {
    /// Score a finished round.
    fn score_round(
        &self,
        round: &RoundResults,
        ranking: &[CamelColor],
        players: &PlayerMap<Player>,
    ) -> RoundPayout;

    /// Settle the game-long wagers at the end of the race.
    fn score_final(
        &self,
        wagers: &[FinalWager],
        ranking: &[CamelColor],
        players: &PlayerMap<Player>,
    ) -> RoundPayout;
}

/// The base game's payouts.
///
/// ## Round wagers
///
/// - On the leader: the card's denomination
/// - On the second camel: `second_place`
/// - On any other camel: `loser_penalty`
///
/// Each partner also collects their partner's best winning wager. Each
/// camel landing on a spectator token pays its owner
/// `token sign × landing_reward`.
///
/// ## Final wagers
///
/// Correct bets are paid from `final_payouts` in placement order, then
/// `final_floor`; wrong bets pay `final_penalty`.
#[derive(Clone, Debug, Default)]
pub struct StandardScorer {
    table: PayoutTable,
}

impl StandardScorer {
    /// Create a scorer with the given payout table.
    #[must_use]
    pub fn new(table: PayoutTable) -> Self {
        Self { table }
    }

    fn wager_payout(&self, card: &WagerCard, ranking: &[CamelColor]) -> i64 {
        match ranking.iter().position(|&c| c == card.color) {
            Some(0) => i64::from(card.value),
            Some(1) => self.table.second_place,
            _ => self.table.loser_penalty,
        }
    }
}

impl RoundScorer for StandardScorer {
    fn score_round(
        &self,
        round: &RoundResults,
        ranking: &[CamelColor],
        players: &PlayerMap<Player>,
    ) -> RoundPayout {
        let mut payout = RoundPayout::default();
        let mut best_win: FxHashMap<PlayerId, i64> = FxHashMap::default();

        for card in &round.wagers {
            let amount = self.wager_payout(card, ranking);
            payout.credit(card.player, amount);
            if amount > 0 {
                payout.won_cards.push(*card);
                let best = best_win.entry(card.player).or_insert(0);
                *best = (*best).max(amount);
            }
        }

        for pair in &round.partnerships {
            for (member, partner) in [(pair.first, pair.second), (pair.second, pair.first)] {
                if let Some(&bonus) = best_win.get(&partner) {
                    payout.credit(member, bonus);
                }
            }
        }

        for landing in &round.token_landings {
            let reward = landing.token.side.sign() * self.table.landing_reward;
            payout.credit(landing.token.owner, reward);
        }

        payout.deltas.retain(|id, _| players.contains(*id));
        payout
    }

    fn score_final(
        &self,
        wagers: &[FinalWager],
        ranking: &[CamelColor],
        players: &PlayerMap<Player>,
    ) -> RoundPayout {
        let mut payout = RoundPayout::default();

        for kind in [FinalWagerKind::FirstPlace, FinalWagerKind::LastPlace] {
            let target = match kind {
                FinalWagerKind::FirstPlace => ranking.first(),
                FinalWagerKind::LastPlace => ranking.last(),
            };
            let mut correct = 0;

            for wager in wagers.iter().filter(|w| w.kind == kind) {
                if Some(&wager.color) == target {
                    let amount = self
                        .table
                        .final_payouts
                        .get(correct)
                        .copied()
                        .unwrap_or(self.table.final_floor);
                    payout.credit(wager.player, amount);
                    correct += 1;
                } else {
                    payout.credit(wager.player, self.table.final_penalty);
                }
            }
        }

        payout.deltas.retain(|id, _| players.contains(*id));
        payout
    }
}
