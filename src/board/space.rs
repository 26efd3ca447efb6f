//! A single track space.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::camel::{CamelColor, CAMEL_COUNT};
use crate::spectators::SpectatorToken;

/// Ordered camel stack, bottom first.
pub type CamelStack = SmallVec<[CamelColor; CAMEL_COUNT]>;

/// One space of the track.
///
/// The top camel is derived from the stack, so the "stack non-empty iff a
/// top camel exists" invariant holds by construction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub(crate) stack: CamelStack,
    pub(crate) token: Option<SpectatorToken>,
}

impl Space {
    /// Camels on this space, bottom first.
    #[must_use]
    pub fn stack(&self) -> &[CamelColor] {
        &self.stack
    }

    /// The visible camel on top of the stack.
    #[must_use]
    pub fn top_camel(&self) -> Option<CamelColor> {
        self.stack.last().copied()
    }

    /// Whether any camel stands here.
    #[must_use]
    pub fn has_camel(&self) -> bool {
        !self.stack.is_empty()
    }

    /// The spectator token on this space.
    #[must_use]
    pub fn token(&self) -> Option<&SpectatorToken> {
        self.token.as_ref()
    }

    /// Split off `color` and everything stacked above it.
    ///
    /// Returns `None` if `color` is not on this space.
    pub(crate) fn take_from(&mut self, color: CamelColor) -> Option<CamelStack> {
        let at = self.stack.iter().position(|&c| c == color)?;
        Some(self.stack.drain(at..).collect())
    }

    /// Put a group on top of the stack.
    pub(crate) fn push_top(&mut self, group: &[CamelColor]) {
        self.stack.extend_from_slice(group);
    }

    /// Slide a group underneath the stack.
    pub(crate) fn push_bottom(&mut self, group: &[CamelColor]) {
        self.stack.insert_many(0, group.iter().copied());
    }
}
