//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Ids follow join order and start at 1.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access, indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::ledger::WagerCard;

/// Player identifier supporting 1-255 players.
///
/// Ids are 1-based: the first player to join is `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the 0-based storage index for this player.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use camel_derby::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(1));
    /// assert_eq!(players[3], PlayerId::new(4));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Join-order id.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Coin balance. Never negative.
    pub coins: i64,
    /// Wager cards won in earlier rounds.
    pub wager_cards: Vec<WagerCard>,
}

impl Player {
    /// Create a player with a starting balance and no cards.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, coins: i64) -> Self {
        Self {
            id,
            name: name.into(),
            coins,
            wager_cards: Vec::new(),
        }
    }

    /// Apply a coin delta, flooring the balance at zero.
    pub fn apply_coins(&mut self, delta: i64) {
        self.coins = (self.coins + delta).max(0);
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use camel_derby::core::{PlayerId, PlayerMap};
///
/// let mut coins: PlayerMap<i64> = PlayerMap::with_value(3, 3);
/// coins[PlayerId::new(2)] += 5;
///
/// assert_eq!(coins[PlayerId::new(1)], 3);
/// assert_eq!(coins[PlayerId::new(2)], 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Check whether `player` is seated in this map.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.0 >= 1 && player.index() < self.data.len()
    }

    /// Get a reference to a player's data.
    ///
    /// Panics on an unknown player.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        assert!(self.contains(player), "Unknown player {player}");
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        assert!(self.contains(player), "Unknown player {player}");
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8 + 1), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8 + 1), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
