//! The race engine.
//!
//! `CamelRace` owns the game state, the RNG and a scorer, and exposes every
//! operation a caller may perform. Rule refusals come back as
//! `Err(RuleViolation)` and never change state.
//!
//! ## Round lifecycle
//!
//! After each recorded regular roll the engine checks the round-end rule.
//! When it holds the engine scores the round, clears the spectator tokens,
//! hands the start to the next player and opens a fresh round.

use std::cmp::Reverse;

use tracing::{debug, info};

use crate::board::{CamelColor, CamelMove};
use crate::core::{
    GameRng, GameState, Phase, PlayerId, RaceConfig, RuleViolation, SpecialDiePolicy,
};
use crate::dice::{self, DieKind, DieRoll};
use crate::ledger::{self, FinalWager, FinalWagerKind, Partnership, WagerCard};
use crate::round::{RoundScorer, StandardScorer};
use crate::spectators::{self, SpectatorToken, TokenLanding, TokenSide};

/// What a single throw did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollOutcome {
    /// The die result.
    pub roll: DieRoll,
    /// The camel move it caused, if any.
    pub movement: Option<CamelMove>,
    /// The number of the round this throw closed, if it closed one.
    pub round_ended: Option<u32>,
}

/// A camel race in progress.
///
/// ## Example
///
/// ```
/// use camel_derby::core::{PlayerId, RaceConfig};
/// use camel_derby::board::CamelColor;
/// use camel_derby::rules::CamelRace;
///
/// let mut race = CamelRace::new(&["Ada", "Grace"], RaceConfig::default(), 42);
///
/// let card = race.place_wager(PlayerId::new(1), CamelColor::Red).unwrap();
/// assert_eq!(card.value, 5);
///
/// let outcome = race.roll_die().unwrap();
/// assert!((1..=3).contains(&outcome.roll.value));
/// ```
#[derive(Clone, Debug)]
pub struct CamelRace<S: RoundScorer = StandardScorer> {
    pub(crate) config: RaceConfig,
    pub(crate) state: GameState,
    pub(crate) rng: GameRng,
    scorer: S,
}

impl CamelRace<StandardScorer> {
    /// Start a race with the standard scorer.
    ///
    /// Players get ids 1.. in the order given. Panics if `player_names`
    /// is empty.
    #[must_use]
    pub fn new<N: AsRef<str>>(player_names: &[N], config: RaceConfig, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let state = GameState::new(player_names, &config, &mut rng);
        let scorer = StandardScorer::new(config.payouts.clone());

        info!(players = state.player_count(), seed, "race initialized");

        Self {
            config,
            state,
            rng,
            scorer,
        }
    }

    pub(crate) fn from_parts(config: RaceConfig, state: GameState, rng: GameRng) -> Self {
        let scorer = StandardScorer::new(config.payouts.clone());
        Self {
            config,
            state,
            rng,
            scorer,
        }
    }
}

impl<S: RoundScorer> CamelRace<S> {
    /// Replace the scorer.
    #[must_use]
    pub fn with_scorer<T: RoundScorer>(self, scorer: T) -> CamelRace<T> {
        CamelRace {
            config: self.config,
            state: self.state,
            rng: self.rng,
            scorer,
        }
    }

    /// Read-only view of the whole game.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The race configuration.
    #[must_use]
    pub fn config(&self) -> &RaceConfig {
        &self.config
    }

    // === Dice ===

    /// Throw a die and apply the result.
    pub fn roll_die(&mut self) -> Result<RollOutcome, RuleViolation> {
        self.ensure_running()?;
        let roll = dice::throw(&mut self.rng, self.config.special_die_chance);
        self.apply_roll(roll)
    }

    /// Apply a known die result as if it had just been thrown.
    ///
    /// A regular result is recorded, moves its camel and may close the
    /// round. A special result moves a camel only under
    /// `SpecialDiePolicy::MoveBackward` and never counts toward the round
    /// end.
    ///
    /// Panics if the colour does not match the die kind, or if the value
    /// is not 1, 2 or 3.
    pub fn apply_roll(&mut self, roll: DieRoll) -> Result<RollOutcome, RuleViolation> {
        self.ensure_running()?;
        assert!(
            (1..=3).contains(&roll.value),
            "die value must be 1, 2 or 3, got {}",
            roll.value
        );
        assert_eq!(
            roll.color.is_special(),
            roll.kind == DieKind::Special,
            "{:?} die cannot show {}",
            roll.kind,
            roll.color
        );
        debug!(kind = ?roll.kind, value = roll.value, camel = %roll.color, "die rolled");

        let movement = match (roll.kind, self.config.special_die) {
            (DieKind::Regular, _) => {
                self.state.current_round_mut().dice_results.push(roll);
                Some(self.move_camel(roll))
            }
            (DieKind::Special, SpecialDiePolicy::MoveBackward) => Some(self.move_camel(roll)),
            (DieKind::Special, SpecialDiePolicy::Ignore) => None,
        };

        let round_ended = (roll.kind == DieKind::Regular
            && self.state.current_round().is_complete(self.config.round_end))
        .then(|| self.end_round());

        Ok(RollOutcome {
            roll,
            movement,
            round_ended,
        })
    }

    fn move_camel(&mut self, roll: DieRoll) -> CamelMove {
        let movement = self.state.board.move_camel(roll.color, roll.value);

        if let Some(&token) = self.state.board.spectator_at(movement.to) {
            debug!(owner = %token.owner, space = movement.to, "camel landed on a spectator token");
            self.state.current_round_mut().token_landings.push(TokenLanding {
                token,
                camel: roll.color,
            });
        }

        movement
    }

    // === Ledger ===

    /// Wager on a regular camel winning the round.
    ///
    /// Takes the highest card left in that colour's deck.
    pub fn place_wager(
        &mut self,
        player: PlayerId,
        color: CamelColor,
    ) -> Result<WagerCard, RuleViolation> {
        self.ensure_running()?;
        self.expect_player(player);
        ledger::place_wager(self.state.current_round_mut(), player, color)
            .inspect_err(|e| debug!(%player, error = %e, "wager refused"))
    }

    /// Wager on the overall winner or loser of the race.
    pub fn place_final_wager(
        &mut self,
        player: PlayerId,
        color: CamelColor,
        kind: FinalWagerKind,
    ) -> Result<FinalWager, RuleViolation> {
        self.ensure_running()?;
        self.expect_player(player);
        if color.is_special() {
            return Err(RuleViolation::NotRegular { color });
        }

        let wager = FinalWager {
            player,
            color,
            kind,
        };
        self.state.final_wagers.push_back(wager);
        debug!(%player, camel = %color, ?kind, "final wager placed");
        Ok(wager)
    }

    /// Pair two players for the current round.
    pub fn create_partnership(
        &mut self,
        first: PlayerId,
        second: PlayerId,
    ) -> Result<Partnership, RuleViolation> {
        self.ensure_running()?;
        self.expect_player(first);
        self.expect_player(second);
        ledger::create_partnership(self.state.current_round_mut(), first, second)
            .inspect_err(|e| debug!(%first, %second, error = %e, "partnership refused"))
    }

    // === Spectators ===

    /// Place `player`'s spectator token on space `index`.
    ///
    /// Panics if `index` is off the track.
    pub fn place_spectator_token(
        &mut self,
        player: PlayerId,
        index: usize,
        side: TokenSide,
    ) -> Result<SpectatorToken, RuleViolation> {
        self.ensure_running()?;
        self.expect_player(player);
        let (board, round) = self.state.board_and_round_mut();
        spectators::place_token(board, round, player, index, side)
            .inspect_err(|e| debug!(%player, space = index, error = %e, "token placement refused"))
    }

    /// Move `player`'s spectator token to space `index`.
    pub fn move_spectator_token(
        &mut self,
        player: PlayerId,
        index: usize,
    ) -> Result<SpectatorToken, RuleViolation> {
        self.ensure_running()?;
        self.expect_player(player);
        let (board, round) = self.state.board_and_round_mut();
        spectators::move_token(board, round, player, index)
            .inspect_err(|e| debug!(%player, space = index, error = %e, "token move refused"))
    }

    // === Lifecycle ===

    /// Whether a regular camel has reached the final space.
    #[must_use]
    pub fn race_finished(&self) -> bool {
        self.state.board.race_finished()
    }

    /// Settle the race.
    ///
    /// Scores the open round if any regular die was thrown in it, settles
    /// the final wagers, and names the richest player the winner (ties go
    /// to the earlier joiner). Returns the winner.
    pub fn finish_game(&mut self) -> Result<PlayerId, RuleViolation> {
        self.ensure_running()?;

        if !self.state.current_round().dice_results.is_empty() {
            self.score_current_round();
        }

        let ranking = self.state.board.ranking();
        let wagers: Vec<FinalWager> = self.state.final_wagers.iter().copied().collect();
        let payout = self.scorer.score_final(&wagers, &ranking, &self.state.players);
        payout.apply(&mut self.state.players);
        self.state.final_payout = Some(payout);

        let winner = self
            .state
            .players
            .iter()
            .max_by_key(|(id, p)| (p.coins, Reverse(*id)))
            .map(|(id, _)| id)
            .expect("a race always has players");

        self.state.winner = Some(winner);
        self.state.is_game_over = true;
        self.state.phase = Phase::GameOver;

        info!(%winner, coins = self.state.player(winner).coins, "game over");
        Ok(winner)
    }

    /// Close the current round and open the next. Returns the closed
    /// round's number.
    fn end_round(&mut self) -> u32 {
        let closed = self.state.round;
        self.state.phase = Phase::RoundEnding;
        info!(round = closed, "round ending");

        self.score_current_round();
        self.state.board.clear_spectator_tokens();
        self.state.advance_starting_player();
        self.state.open_next_round(&self.config);
        self.state.phase = Phase::InRound;

        info!(round = self.state.round, starting = %self.state.active_player, "round started");
        closed
    }

    /// Score the open round once.
    fn score_current_round(&mut self) {
        if self.state.current_round().is_scored() {
            return;
        }

        let ranking = self.state.board.ranking();
        let payout = self
            .scorer
            .score_round(self.state.current_round(), &ranking, &self.state.players);
        payout.apply(&mut self.state.players);

        debug!(round = self.state.round, deltas = ?payout.deltas, "round scored");
        self.state.current_round_mut().payout = Some(payout);
    }

    fn ensure_running(&self) -> Result<(), RuleViolation> {
        if self.state.is_game_over {
            Err(RuleViolation::GameOver)
        } else {
            Ok(())
        }
    }

    fn expect_player(&self, player: PlayerId) {
        assert!(self.state.players.contains(player), "Unknown player {player}");
    }
}
