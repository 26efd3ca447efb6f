//! The race track: spaces, camel stacks, and movement.
//!
//! The `Board` owns every space and every camel position, so the "each
//! camel sits in exactly one stack" invariant is maintained in one place.
//! Stacks are ordered bottom → top; a moving camel carries everything
//! stacked above it.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::camel::{Camel, CamelColor, CAMEL_COUNT};
use super::space::{CamelStack, Space};
use crate::core::config::{StartLayout, TRACK_LENGTH};
use crate::core::{GameRng, PlayerId};
use crate::spectators::SpectatorToken;

/// Where a moving group lands in the destination stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StackPosition {
    /// On top of the existing stack.
    Top,
    /// Underneath the existing stack.
    Bottom,
}

/// A completed camel move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CamelMove {
    /// The camel the die named.
    pub color: CamelColor,
    /// Origin space.
    pub from: usize,
    /// Destination space.
    pub to: usize,
    /// The moving group, bottom first. Starts with `color`.
    pub group: CamelStack,
    /// How the group joined the destination stack.
    pub placed: StackPosition,
}

/// The track and its camels.
///
/// ## Usage
///
/// ```
/// use camel_derby::board::{Board, CamelColor};
///
/// let mut board = Board::new();
/// board.place(CamelColor::Blue, 5);
/// board.place(CamelColor::Green, 5);
///
/// // Blue carries green along.
/// board.move_camel(CamelColor::Blue, 1);
///
/// assert_eq!(board.stack_at(6), &[CamelColor::Blue, CamelColor::Green]);
/// assert!(board.stack_at(5).is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    spaces: Vec<Space>,
    camels: [Camel; CAMEL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty track. No camel is placed yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            spaces: vec![Space::default(); TRACK_LENGTH],
            camels: CamelColor::ALL.map(Camel::new),
        }
    }

    /// A track with all seven camels placed per `layout`.
    pub fn with_layout(layout: StartLayout, rng: &mut GameRng) -> Self {
        let mut board = Self::new();

        match layout {
            StartLayout::Stacked => {
                for color in CamelColor::ALL {
                    board.place(color, 0);
                }
            }
            StartLayout::Rolled => {
                let last = board.last_index();
                let mut regular = CamelColor::REGULAR;
                let mut special = CamelColor::SPECIAL;
                rng.shuffle(&mut regular);
                rng.shuffle(&mut special);

                for color in regular {
                    let value = usize::from(*rng.choose(&[1u8, 2, 3]).unwrap_or(&1));
                    board.place(color, value - 1);
                }
                for color in special {
                    let value = usize::from(*rng.choose(&[1u8, 2, 3]).unwrap_or(&1));
                    board.place(color, last - (value - 1));
                }
            }
        }

        board
    }

    /// Index of the final space.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.spaces.len() - 1
    }

    /// Number of spaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Always false; the track has a fixed length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Get a space. Panics if `index` is off the track.
    #[must_use]
    pub fn space(&self, index: usize) -> &Space {
        assert!(index < self.spaces.len(), "space index {index} is off the track");
        &self.spaces[index]
    }

    fn space_mut(&mut self, index: usize) -> &mut Space {
        assert!(index < self.spaces.len(), "space index {index} is off the track");
        &mut self.spaces[index]
    }

    /// All spaces, start first.
    #[must_use]
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    /// The camel on top of a space.
    #[must_use]
    pub fn camel_at(&self, index: usize) -> Option<CamelColor> {
        self.space(index).top_camel()
    }

    /// The camel stack on a space, bottom first.
    #[must_use]
    pub fn stack_at(&self, index: usize) -> &[CamelColor] {
        self.space(index).stack()
    }

    /// The spectator token on a space.
    #[must_use]
    pub fn spectator_at(&self, index: usize) -> Option<&SpectatorToken> {
        self.space(index).token()
    }

    /// A camel's record.
    #[must_use]
    pub fn camel(&self, color: CamelColor) -> &Camel {
        &self.camels[color.index()]
    }

    /// All camels in creation order.
    #[must_use]
    pub fn camels(&self) -> &[Camel] {
        &self.camels
    }

    /// Put a camel on top of a space.
    ///
    /// Panics if the camel is already on the track.
    pub fn place(&mut self, color: CamelColor, index: usize) {
        if self.spaces.iter().any(|s| s.stack.contains(&color)) {
            panic!("{color} camel is already on the track");
        }
        self.space_mut(index).push_top(&[color]);
        self.camels[color.index()].position = index;
    }

    /// Move a camel `value` steps in its direction, carrying every camel
    /// stacked above it.
    ///
    /// The destination is clamped to the track. A special camel landing on
    /// an occupied space slides underneath; every other group lands on top.
    ///
    /// Panics if the camel is not on the track.
    pub fn move_camel(&mut self, color: CamelColor, value: u8) -> CamelMove {
        let from = self.camels[color.index()].position;
        let to = self.destination(color, value);

        let group = self
            .space_mut(from)
            .take_from(color)
            .unwrap_or_else(|| panic!("{color} camel is not on space {from}"));

        let destination = self.space_mut(to);
        let placed = if color.is_special() && destination.has_camel() {
            destination.push_bottom(&group);
            StackPosition::Bottom
        } else {
            destination.push_top(&group);
            StackPosition::Top
        };

        for moved in &group {
            self.camels[moved.index()].position = to;
        }

        debug!(camel = %color, from, to, carried = group.len() - 1, ?placed, "camel moved");

        CamelMove {
            color,
            from,
            to,
            group,
            placed,
        }
    }

    /// Where `color` would land after a throw of `value`.
    #[must_use]
    pub fn destination(&self, color: CamelColor, value: u8) -> usize {
        let from = self.camels[color.index()].position as i64;
        let target = from + i64::from(value) * color.direction();
        target.clamp(0, self.last_index() as i64) as usize
    }

    /// Regular camels, leader first.
    ///
    /// Spaces are read from the furthest forward; within a space the top
    /// camel leads. Special camels are not ranked.
    #[must_use]
    pub fn ranking(&self) -> SmallVec<[CamelColor; 5]> {
        self.spaces
            .iter()
            .rev()
            .flat_map(|space| space.stack.iter().rev())
            .copied()
            .filter(|c| !c.is_special())
            .collect()
    }

    /// Whether a regular camel has reached the final space.
    #[must_use]
    pub fn race_finished(&self) -> bool {
        self.space(self.last_index())
            .stack
            .iter()
            .any(|c| !c.is_special())
    }

    /// Check that every camel sits in exactly one stack at its recorded
    /// position.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen = FxHashSet::default();
        for (index, space) in self.spaces.iter().enumerate() {
            for &color in &space.stack {
                if !seen.insert(color) || self.camels[color.index()].position != index {
                    return false;
                }
            }
        }
        seen.len() == CAMEL_COUNT
    }

    // === Spectator tokens ===

    /// Space holding `player`'s token.
    #[must_use]
    pub fn token_of(&self, player: PlayerId) -> Option<usize> {
        self.spaces
            .iter()
            .position(|s| s.token.as_ref().is_some_and(|t| t.owner == player))
    }

    /// Whether a space next to `index` holds a token.
    #[must_use]
    pub fn token_adjacent(&self, index: usize) -> bool {
        let before = index.checked_sub(1);
        let after = Some(index + 1).filter(|&i| i < self.spaces.len());
        [before, after]
            .into_iter()
            .flatten()
            .any(|i| self.spaces[i].token.is_some())
    }

    pub(crate) fn set_token(&mut self, index: usize, token: SpectatorToken) {
        self.space_mut(index).token = Some(token);
    }

    pub(crate) fn take_token(&mut self, index: usize) -> Option<SpectatorToken> {
        self.space_mut(index).token.take()
    }

    /// Remove every token from the track.
    pub fn clear_spectator_tokens(&mut self) {
        for space in &mut self.spaces {
            space.token = None;
        }
    }
}
