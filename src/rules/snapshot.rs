//! Save and restore a race.
//!
//! A snapshot carries the configuration, the full game state and the RNG
//! position, so a restored race throws exactly the dice the original would
//! have thrown next.

use serde::{Deserialize, Serialize};

use super::engine::CamelRace;
use crate::core::{GameRng, GameRngState, GameState, RaceConfig, SnapshotError};
use crate::round::RoundScorer;

/// Everything needed to resume a race.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RaceSnapshot {
    pub config: RaceConfig,
    pub state: GameState,
    pub rng: GameRngState,
}

impl RaceSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode bytes produced by [`RaceSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }
}

impl<S: RoundScorer> CamelRace<S> {
    /// Capture the race. The scorer is not part of the snapshot.
    #[must_use]
    pub fn snapshot(&self) -> RaceSnapshot {
        RaceSnapshot {
            config: self.config.clone(),
            state: self.state.clone(),
            rng: self.rng.state(),
        }
    }
}

impl CamelRace {
    /// Resume a captured race with the standard scorer.
    #[must_use]
    pub fn restore(snapshot: RaceSnapshot) -> Self {
        let rng = GameRng::from_state(&snapshot.rng);
        Self::from_parts(snapshot.config, snapshot.state, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CamelColor;
    use crate::core::PlayerId;

    #[test]
    fn test_bytes_round_trip() {
        let mut race = CamelRace::new(&["Ada", "Grace"], RaceConfig::default(), 9);
        race.place_wager(PlayerId::new(2), CamelColor::Blue).unwrap();
        race.roll_die().unwrap();

        let snapshot = race.snapshot();
        let bytes = snapshot.to_bytes().unwrap();

        assert_eq!(RaceSnapshot::from_bytes(&bytes).unwrap(), snapshot);
    }

    #[test]
    fn test_garbage_fails_to_decode() {
        let err = RaceSnapshot::from_bytes(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, SnapshotError::Decode(_)));
    }
}
