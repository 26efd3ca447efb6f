//! Spectator token placement and relocation.
//!
//! Each player owns one token, cheering (`+1`) or booing (`-1`). A token
//! may only stand on a space with no camel, no other token, and no token on
//! either neighbouring space. Tokens stay until the round ends.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, CamelColor};
use crate::core::{PlayerId, RuleViolation};
use crate::round::RoundResults;

/// Which face of a spectator token is up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenSide {
    /// Pays its owner for each landing.
    Cheer,
    /// Costs its owner for each landing.
    Boo,
}

impl TokenSide {
    /// `1` for a cheer, `-1` for a boo.
    #[must_use]
    pub const fn sign(self) -> i64 {
        match self {
            TokenSide::Cheer => 1,
            TokenSide::Boo => -1,
        }
    }
}

/// A player's spectator token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpectatorToken {
    pub owner: PlayerId,
    pub side: TokenSide,
    /// Space index the token stands on.
    pub space: usize,
}

impl SpectatorToken {
    #[must_use]
    pub const fn new(owner: PlayerId, side: TokenSide, space: usize) -> Self {
        Self { owner, side, space }
    }
}

/// A camel group landing on a tokened space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenLanding {
    /// The token hit.
    pub token: SpectatorToken,
    /// The camel the die named.
    pub camel: CamelColor,
}

/// Check that a token may stand on `index`.
pub fn check_placement(board: &Board, index: usize) -> Result<(), RuleViolation> {
    let space = board.space(index);
    if space.has_camel() {
        return Err(RuleViolation::CamelOnSpace { space: index });
    }
    if space.token().is_some() {
        return Err(RuleViolation::TokenOnSpace { space: index });
    }
    if board.token_adjacent(index) {
        return Err(RuleViolation::AdjacentToken { space: index });
    }
    Ok(())
}

/// Put `player`'s token on the track.
pub fn place_token(
    board: &mut Board,
    round: &mut RoundResults,
    player: PlayerId,
    index: usize,
    side: TokenSide,
) -> Result<SpectatorToken, RuleViolation> {
    if board.token_of(player).is_some() {
        return Err(RuleViolation::TokenAlreadyPlaced { player });
    }
    check_placement(board, index)?;

    let token = SpectatorToken::new(player, side, index);
    board.set_token(index, token);
    round.spectator_tokens.push(token);

    debug!(%player, space = index, ?side, "spectator token placed");
    Ok(token)
}

/// Relocate `player`'s token to `to`.
///
/// The round's record of the token is updated in place.
pub fn move_token(
    board: &mut Board,
    round: &mut RoundResults,
    player: PlayerId,
    to: usize,
) -> Result<SpectatorToken, RuleViolation> {
    let from = board
        .token_of(player)
        .ok_or(RuleViolation::NoTokenOnBoard { player })?;
    check_placement(board, to)?;

    let Some(mut token) = board.take_token(from) else {
        return Err(RuleViolation::NoTokenOnBoard { player });
    };
    token.space = to;
    board.set_token(to, token);

    if let Some(entry) = round
        .spectator_tokens
        .iter_mut()
        .find(|t| t.owner == player && t.side == token.side)
    {
        *entry = token;
    }

    debug!(%player, from, to, "spectator token moved");
    Ok(token)
}
