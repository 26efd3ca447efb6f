//! Game state: the aggregate root of a race.
//!
//! ## GameState
//!
//! Everything a renderer or a persistence layer needs:
//! - Players and their coins
//! - The board (spaces, stacks, tokens, camel positions)
//! - Round counter, starting player and lifecycle phase
//! - Round history and final wagers
//! - Game-over flag and winner
//!
//! History uses `im` persistent vectors so snapshots clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::RaceConfig;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::board::Board;
use crate::ledger::FinalWager;
use crate::round::{RoundPayout, RoundResults};

/// Round lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Dice are being thrown and bets taken.
    #[default]
    InRound,
    /// The round-end condition fired; scoring and resets are running.
    RoundEnding,
    /// The race is settled. No further moves are accepted.
    GameOver,
}

/// Complete state of one race.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Seated players, in join order.
    pub players: PlayerMap<Player>,

    /// The track.
    pub board: Board,

    /// Current round number (starts at 1).
    pub round: u32,

    /// Player who starts the current round.
    pub active_player: PlayerId,

    /// Lifecycle phase.
    pub phase: Phase,

    /// Every round so far; the last entry is the open round.
    pub rounds: Vector<RoundResults>,

    /// Game-long wagers in placement order.
    pub final_wagers: Vector<FinalWager>,

    /// Settlement of the final wagers, once the game is over.
    pub final_payout: Option<RoundPayout>,

    /// Set when the race has been settled.
    pub is_game_over: bool,

    /// Richest player once the game is over.
    pub winner: Option<PlayerId>,
}

impl GameState {
    /// Seat the players, lay out the camels and open round 1.
    ///
    /// ## Defaults
    ///
    /// - ids follow `player_names` order, starting at 1
    /// - every player starts with `config.starting_coins` and no cards
    /// - the first player starts round 1
    ///
    /// Panics if `player_names` is empty.
    #[must_use]
    pub fn new<N: AsRef<str>>(player_names: &[N], config: &RaceConfig, rng: &mut GameRng) -> Self {
        let players = PlayerMap::new(player_names.len(), |id| {
            Player::new(id, player_names[id.index()].as_ref(), config.starting_coins)
        });

        let mut rounds = Vector::new();
        rounds.push_back(RoundResults::new(1, config));

        Self {
            players,
            board: Board::with_layout(config.start_layout, rng),
            round: 1,
            active_player: PlayerId::new(1),
            phase: Phase::InRound,
            rounds,
            final_wagers: Vector::new(),
            final_payout: None,
            is_game_over: false,
            winner: None,
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Get a player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// The open round.
    #[must_use]
    pub fn current_round(&self) -> &RoundResults {
        self.rounds.back().expect("a round is always open")
    }

    /// The open round, mutably.
    pub fn current_round_mut(&mut self) -> &mut RoundResults {
        self.rounds.back_mut().expect("a round is always open")
    }

    /// The board and the open round, borrowed together.
    pub(crate) fn board_and_round_mut(&mut self) -> (&mut Board, &mut RoundResults) {
        let round = self.rounds.back_mut().expect("a round is always open");
        (&mut self.board, round)
    }

    /// Close the books on the current round and open the next one.
    pub(crate) fn open_next_round(&mut self, config: &RaceConfig) {
        self.round += 1;
        self.rounds.push_back(RoundResults::new(self.round, config));
    }

    /// Hand the start to the next player, wrapping to the first.
    pub(crate) fn advance_starting_player(&mut self) {
        let next = self.active_player.0 as usize % self.player_count() + 1;
        self.active_player = PlayerId::new(next as u8);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CamelColor;

    fn state(names: &[&str]) -> GameState {
        GameState::new(names, &RaceConfig::default(), &mut GameRng::new(42))
    }

    #[test]
    fn test_new_state() {
        let state = state(&["Ada", "Grace", "Linus"]);

        assert_eq!(state.player_count(), 3);
        assert_eq!(state.round, 1);
        assert_eq!(state.active_player, PlayerId::new(1));
        assert_eq!(state.phase, Phase::InRound);
        assert_eq!(state.rounds.len(), 1);
        assert_eq!(state.current_round().round, 1);
        assert!(!state.is_game_over);
        assert!(state.winner.is_none());

        let grace = state.player(PlayerId::new(2));
        assert_eq!(grace.name, "Grace");
        assert_eq!(grace.coins, 3);
        assert!(grace.wager_cards.is_empty());
    }

    #[test]
    fn test_camels_start_stacked() {
        let state = state(&["Ada"]);

        assert_eq!(state.board.stack_at(0), &CamelColor::ALL);
        assert!(state.board.camels().iter().all(|c| c.position == 0));
    }

    #[test]
    fn test_starting_player_wraps() {
        let mut state = state(&["Ada", "Grace", "Linus"]);

        let order: Vec<u8> = (0..4)
            .map(|_| {
                state.advance_starting_player();
                state.active_player.0
            })
            .collect();

        assert_eq!(order, vec![2, 3, 1, 2]);
    }

    #[test]
    fn test_open_next_round_keeps_history() {
        let mut state = state(&["Ada", "Grace"]);
        state.current_round_mut().dice_results.push(crate::dice::DieRoll::regular(2, CamelColor::Red));

        state.open_next_round(&RaceConfig::default());

        assert_eq!(state.round, 2);
        assert_eq!(state.rounds.len(), 2);
        assert_eq!(state.rounds[0].dice_results.len(), 1);
        assert!(state.current_round().dice_results.is_empty());
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_no_players_panics() {
        let names: [&str; 0] = [];
        let _ = state(&names);
    }
}
