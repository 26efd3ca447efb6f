//! Round wagers, wager decks, and final wagers.
//!
//! Each regular colour has a deck of wager cards per round, highest
//! denomination first. Placing a wager takes the top card; a colour with an
//! empty deck cannot be wagered on again until the next round.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::CamelColor;
use crate::core::config::Denominations;
use crate::core::{PlayerId, RuleViolation};
use crate::round::RoundResults;

/// A round wager on a regular camel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WagerCard {
    pub player: PlayerId,
    pub color: CamelColor,
    /// Denomination taken from the deck when the wager was placed.
    pub value: u8,
}

/// Remaining wager cards of one colour.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableWagerCards {
    pub color: CamelColor,
    /// Remaining denominations, highest first.
    pub amounts: Denominations,
}

/// Wager decks for every regular colour.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WagerDecks {
    decks: Vec<AvailableWagerCards>,
}

impl WagerDecks {
    /// Fresh decks, one per regular colour.
    #[must_use]
    pub fn new(denominations: &Denominations) -> Self {
        Self {
            decks: CamelColor::REGULAR
                .iter()
                .map(|&color| AvailableWagerCards {
                    color,
                    amounts: denominations.clone(),
                })
                .collect(),
        }
    }

    /// Remaining denominations for a colour. Empty for special camels.
    #[must_use]
    pub fn remaining(&self, color: CamelColor) -> &[u8] {
        self.decks
            .iter()
            .find(|d| d.color == color)
            .map_or(&[], |d| d.amounts.as_slice())
    }

    /// All decks in colour order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &AvailableWagerCards> {
        self.decks.iter()
    }

    /// Take the top card of a colour's deck.
    fn draw(&mut self, color: CamelColor) -> Result<u8, RuleViolation> {
        let deck = self
            .decks
            .iter_mut()
            .find(|d| d.color == color)
            .ok_or(RuleViolation::NotRegular { color })?;
        if deck.amounts.is_empty() {
            return Err(RuleViolation::DeckExhausted { color });
        }
        Ok(deck.amounts.remove(0))
    }
}

/// Which end of the race a final wager backs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinalWagerKind {
    FirstPlace,
    LastPlace,
}

/// A game-long wager on the overall winner or loser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalWager {
    pub player: PlayerId,
    pub color: CamelColor,
    pub kind: FinalWagerKind,
}

/// Record a round wager, taking the colour's top wager card.
pub fn place_wager(
    round: &mut RoundResults,
    player: PlayerId,
    color: CamelColor,
) -> Result<WagerCard, RuleViolation> {
    let value = round.available_wager_cards.draw(color)?;
    let card = WagerCard {
        player,
        color,
        value,
    };
    round.wagers.push(card);

    debug!(%player, camel = %color, value, "wager placed");
    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RaceConfig;

    fn round() -> RoundResults {
        RoundResults::new(1, &RaceConfig::default())
    }

    #[test]
    fn test_wagers_take_descending_cards() {
        let mut round = round();
        let p1 = PlayerId::new(1);

        let values: Vec<u8> = (0..4)
            .map(|_| place_wager(&mut round, p1, CamelColor::Green).unwrap().value)
            .collect();

        assert_eq!(values, vec![5, 3, 2, 2]);
        assert_eq!(round.wagers.len(), 4);
        assert!(round.available_wager_cards.remaining(CamelColor::Green).is_empty());
    }

    #[test]
    fn test_exhausted_deck_refuses() {
        let mut round = round();
        for _ in 0..4 {
            place_wager(&mut round, PlayerId::new(1), CamelColor::Red).unwrap();
        }

        let result = place_wager(&mut round, PlayerId::new(2), CamelColor::Red);

        assert_eq!(result, Err(RuleViolation::DeckExhausted { color: CamelColor::Red }));
        assert_eq!(round.wagers.len(), 4);
    }

    #[test]
    fn test_decks_are_independent() {
        let mut round = round();
        place_wager(&mut round, PlayerId::new(1), CamelColor::Blue).unwrap();

        assert_eq!(round.available_wager_cards.remaining(CamelColor::Blue), &[3, 2, 2]);
        assert_eq!(round.available_wager_cards.remaining(CamelColor::Yellow), &[5, 3, 2, 2]);
    }

    #[test]
    fn test_special_camel_refused() {
        let mut round = round();

        let result = place_wager(&mut round, PlayerId::new(1), CamelColor::White);

        assert_eq!(result, Err(RuleViolation::NotRegular { color: CamelColor::White }));
    }
}
