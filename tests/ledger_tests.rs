//! Wager and partnership ledger integration tests.

use camel_derby::board::CamelColor;
use camel_derby::core::{PlayerId, RaceConfig, RuleViolation};
use camel_derby::dice::DieRoll;
use camel_derby::ledger::FinalWagerKind;
use camel_derby::rules::CamelRace;
use CamelColor::*;

fn race(players: usize) -> CamelRace {
    let names: Vec<String> = (1..=players).map(|i| format!("player{i}")).collect();
    CamelRace::new(&names, RaceConfig::default(), 7)
}

fn p(id: u8) -> PlayerId {
    PlayerId::new(id)
}

fn close_round(race: &mut CamelRace) {
    for _ in 0..5 {
        race.apply_roll(DieRoll::regular(1, Yellow)).unwrap();
    }
}

// =============================================================================
// Round Wagers
// =============================================================================

/// Test that wagers take cards from the top of the deck.
#[test]
fn test_wagers_draw_descending() {
    let mut race = race(4);

    let values: Vec<u8> = (1..=4)
        .map(|id| race.place_wager(p(id), Green).unwrap().value)
        .collect();

    assert_eq!(values, vec![5, 3, 2, 2]);
    assert!(race
        .state()
        .current_round()
        .available_wager_cards
        .remaining(Green)
        .is_empty());
    assert_eq!(race.state().current_round().wagers.len(), 4);
}

/// Test that an exhausted deck refuses further wagers.
#[test]
fn test_exhausted_deck() {
    let mut race = race(1);
    for _ in 0..4 {
        race.place_wager(p(1), Red).unwrap();
    }

    assert_eq!(
        race.place_wager(p(1), Red),
        Err(RuleViolation::DeckExhausted { color: Red })
    );
    assert_eq!(race.state().current_round().wagers.len(), 4);
    assert!(race.place_wager(p(1), Blue).is_ok());
}

/// Test that decks are refilled for the next round.
#[test]
fn test_decks_refill() {
    let mut race = race(2);
    race.place_wager(p(1), Purple).unwrap();
    race.place_wager(p(2), Purple).unwrap();

    close_round(&mut race);

    let card = race.place_wager(p(2), Purple).unwrap();
    assert_eq!(card.value, 5);
}

/// Test that special camels cannot be wagered on.
#[test]
fn test_wager_on_special_refused() {
    let mut race = race(2);

    assert_eq!(
        race.place_wager(p(1), White),
        Err(RuleViolation::NotRegular { color: White })
    );
}

/// Test that final wagers persist across rounds in placement order.
#[test]
fn test_final_wagers_persist() {
    let mut race = race(2);
    race.place_final_wager(p(1), Blue, FinalWagerKind::FirstPlace)
        .unwrap();
    close_round(&mut race);
    race.place_final_wager(p(2), Red, FinalWagerKind::LastPlace)
        .unwrap();

    let wagers: Vec<_> = race.state().final_wagers.iter().map(|w| w.player).collect();
    assert_eq!(wagers, vec![p(1), p(2)]);
}

// =============================================================================
// Partnerships
// =============================================================================

/// Test that partnered players cannot join another pair this round.
#[test]
fn test_partnership_exclusivity() {
    let mut race = race(4);
    race.create_partnership(p(1), p(2)).unwrap();

    for (a, b) in [(1, 3), (3, 2), (2, 4), (4, 1)] {
        let result = race.create_partnership(p(a), p(b));
        assert!(
            matches!(result, Err(RuleViolation::AlreadyPartnered { .. })),
            "{a} + {b}: {result:?}"
        );
    }
    assert!(race.create_partnership(p(3), p(4)).is_ok());
    assert_eq!(race.state().current_round().partnerships.len(), 2);
}

/// Test that partnerships reset with the round.
#[test]
fn test_partnership_resets() {
    let mut race = race(3);
    race.create_partnership(p(1), p(2)).unwrap();
    assert!(race.create_partnership(p(2), p(3)).is_err());

    close_round(&mut race);

    assert!(race.state().current_round().partnerships.is_empty());
    assert!(race.create_partnership(p(2), p(3)).is_ok());
}

/// Test that a player cannot partner with themselves.
#[test]
fn test_self_partnership() {
    let mut race = race(2);

    assert_eq!(
        race.create_partnership(p(2), p(2)),
        Err(RuleViolation::SelfPartnership { player: p(2) })
    );
}

/// Test that a partner shares in the other's winning wager.
#[test]
fn test_partner_collects_bonus() {
    let mut race = race(3);
    race.place_wager(p(1), Yellow).unwrap();
    race.create_partnership(p(1), p(3)).unwrap();

    // Yellow carries purple, white and black, so purple leads and yellow is second.
    close_round(&mut race);

    assert_eq!(race.state().player(p(1)).coins, 4);
    assert_eq!(race.state().player(p(2)).coins, 3);
    assert_eq!(race.state().player(p(3)).coins, 4);
}
