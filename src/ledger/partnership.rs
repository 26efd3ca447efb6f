//! Per-round partnerships.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{PlayerId, RuleViolation};
use crate::round::RoundResults;

/// Two distinct players paired for the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partnership {
    pub first: PlayerId,
    pub second: PlayerId,
}

impl Partnership {
    /// Check if a player belongs to this partnership.
    #[must_use]
    pub fn involves(&self, player: PlayerId) -> bool {
        self.first == player || self.second == player
    }

    /// The other member, if `player` is one of the pair.
    #[must_use]
    pub fn partner_of(&self, player: PlayerId) -> Option<PlayerId> {
        if self.first == player {
            Some(self.second)
        } else if self.second == player {
            Some(self.first)
        } else {
            None
        }
    }
}

/// Pair two players for the current round.
///
/// Refused if either player is already partnered this round.
pub fn create_partnership(
    round: &mut RoundResults,
    first: PlayerId,
    second: PlayerId,
) -> Result<Partnership, RuleViolation> {
    if first == second {
        return Err(RuleViolation::SelfPartnership { player: first });
    }
    for player in [first, second] {
        if round.partnerships.iter().any(|p| p.involves(player)) {
            return Err(RuleViolation::AlreadyPartnered { player });
        }
    }

    let partnership = Partnership { first, second };
    round.partnerships.push(partnership);

    debug!(%first, %second, "partnership formed");
    Ok(partnership)
}
