//! Spectator token integration tests.
//!
//! These tests verify placement and relocation rules through the race
//! engine, and that refusals leave the race untouched.

use camel_derby::board::CamelColor;
use camel_derby::core::{PlayerId, RaceConfig, RuleViolation};
use camel_derby::dice::DieRoll;
use camel_derby::rules::CamelRace;
use camel_derby::spectators::TokenSide::{Boo, Cheer};

fn race() -> CamelRace {
    CamelRace::new(&["Ada", "Grace", "Linus"], RaceConfig::default(), 42)
}

fn p(id: u8) -> PlayerId {
    PlayerId::new(id)
}

// =============================================================================
// Placement
// =============================================================================

/// Test that a token lands on a free space and is recorded for the round.
#[test]
fn test_place_records_token() {
    let mut race = race();

    let token = race.place_spectator_token(p(1), 7, Boo).unwrap();

    assert_eq!(token.space, 7);
    assert_eq!(race.state().board.spectator_at(7), Some(&token));
    assert_eq!(race.state().current_round().spectator_tokens, vec![token]);
}

/// Test that a space with a camel is refused.
#[test]
fn test_camel_space_refused() {
    let mut race = race();

    let result = race.place_spectator_token(p(1), 0, Cheer);

    assert_eq!(result, Err(RuleViolation::CamelOnSpace { space: 0 }));
}

/// Test that both neighbours of an existing token are refused.
#[test]
fn test_adjacent_spaces_refused() {
    let mut race = race();
    race.place_spectator_token(p(1), 8, Cheer).unwrap();

    for space in [7, 9] {
        let result = race.place_spectator_token(p(2), space, Cheer);
        assert_eq!(result, Err(RuleViolation::AdjacentToken { space }));
    }
    assert!(race.place_spectator_token(p(2), 10, Cheer).is_ok());
}

/// Test adjacency at the far end of the track.
#[test]
fn test_adjacency_at_track_end() {
    let mut race = race();
    race.place_spectator_token(p(1), 14, Cheer).unwrap();

    assert_eq!(
        race.place_spectator_token(p(2), 15, Cheer),
        Err(RuleViolation::AdjacentToken { space: 15 })
    );
}

/// Test that a space already holding a token is refused.
#[test]
fn test_token_space_refused() {
    let mut race = race();
    race.place_spectator_token(p(1), 4, Cheer).unwrap();

    assert_eq!(
        race.place_spectator_token(p(2), 4, Boo),
        Err(RuleViolation::TokenOnSpace { space: 4 })
    );
}

/// Test that a player cannot put down a second token.
#[test]
fn test_one_token_per_player() {
    let mut race = race();
    race.place_spectator_token(p(1), 4, Cheer).unwrap();

    assert_eq!(
        race.place_spectator_token(p(1), 11, Cheer),
        Err(RuleViolation::TokenAlreadyPlaced { player: p(1) })
    );
}

/// Test that refusals do not change the race.
#[test]
fn test_refusal_leaves_state_untouched() {
    let mut race = race();
    race.place_spectator_token(p(1), 6, Cheer).unwrap();
    let before = race.state().clone();

    let _ = race.place_spectator_token(p(2), 5, Cheer);
    let _ = race.place_spectator_token(p(3), 0, Cheer);
    let _ = race.move_spectator_token(p(2), 12);

    assert_eq!(race.state(), &before);
}

/// Test that the side a token was placed with is what it pays out.
#[test]
fn test_token_side_sign() {
    let mut race = race();

    let cheer = race.place_spectator_token(p(1), 6, Cheer).unwrap();
    let boo = race.place_spectator_token(p(2), 10, Boo).unwrap();

    assert_eq!(cheer.side.sign(), 1);
    assert_eq!(boo.side.sign(), -1);
}

/// Test that a space off the track panics.
#[test]
#[should_panic(expected = "off the track")]
fn test_off_track_panics() {
    let mut race = race();
    let _ = race.place_spectator_token(p(1), 16, Cheer);
}

// =============================================================================
// Relocation
// =============================================================================

/// Test moving a token updates the board and the round record.
#[test]
fn test_move_token() {
    let mut race = race();
    race.place_spectator_token(p(2), 5, Boo).unwrap();

    let moved = race.move_spectator_token(p(2), 11).unwrap();

    let state = race.state();
    assert_eq!(moved.space, 11);
    assert_eq!(moved.side, Boo);
    assert!(state.board.spectator_at(5).is_none());
    assert_eq!(state.board.spectator_at(11), Some(&moved));
    assert_eq!(state.current_round().spectator_tokens, vec![moved]);
}

/// Test that moving without a token on the board is refused.
#[test]
fn test_move_without_token() {
    let mut race = race();

    assert_eq!(
        race.move_spectator_token(p(3), 9),
        Err(RuleViolation::NoTokenOnBoard { player: p(3) })
    );
}

/// Test that moving next to one's own current space is refused.
#[test]
fn test_move_next_to_own_token() {
    let mut race = race();
    race.place_spectator_token(p(1), 9, Cheer).unwrap();

    assert_eq!(
        race.move_spectator_token(p(1), 10),
        Err(RuleViolation::AdjacentToken { space: 10 })
    );
}

/// Test that moving onto a camel is refused.
#[test]
fn test_move_onto_camel() {
    let mut race = race();
    race.place_spectator_token(p(1), 9, Cheer).unwrap();
    race.apply_roll(DieRoll::regular(3, CamelColor::Blue)).unwrap();

    assert_eq!(
        race.move_spectator_token(p(1), 3),
        Err(RuleViolation::CamelOnSpace { space: 3 })
    );
}

/// Test that tokens vanish at round end and can be placed again.
#[test]
fn test_tokens_reset_each_round() {
    let mut race = race();
    race.place_spectator_token(p(1), 12, Cheer).unwrap();

    for _ in 0..5 {
        race.apply_roll(DieRoll::regular(1, CamelColor::Red)).unwrap();
    }

    assert!(race.state().board.spectator_at(12).is_none());
    assert!(race.place_spectator_token(p(1), 12, Boo).is_ok());
}
