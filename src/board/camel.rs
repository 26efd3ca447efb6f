//! Camel identities and positions.
//!
//! Seven camels race: five regular camels that run forward and always
//! stack on top, and two special camels (white, black) that run backward
//! and slip underneath an occupied space.

use serde::{Deserialize, Serialize};

/// Number of camels in a race.
pub const CAMEL_COUNT: usize = 7;

/// Camel colour. The colour is the camel's identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CamelColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    White,
    Black,
}

impl CamelColor {
    /// All camels in creation order.
    pub const ALL: [CamelColor; CAMEL_COUNT] = [
        CamelColor::Red,
        CamelColor::Blue,
        CamelColor::Green,
        CamelColor::Yellow,
        CamelColor::Purple,
        CamelColor::White,
        CamelColor::Black,
    ];

    /// The forward-running camels, the only ones that can be wagered on.
    pub const REGULAR: [CamelColor; 5] = [
        CamelColor::Red,
        CamelColor::Blue,
        CamelColor::Green,
        CamelColor::Yellow,
        CamelColor::Purple,
    ];

    /// The backward-running camels.
    pub const SPECIAL: [CamelColor; 2] = [CamelColor::White, CamelColor::Black];

    /// Dense index into per-camel arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether this camel runs backward.
    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(self, CamelColor::White | CamelColor::Black)
    }

    /// Step direction: `1` forward, `-1` backward.
    #[must_use]
    pub const fn direction(self) -> i64 {
        if self.is_special() {
            -1
        } else {
            1
        }
    }

    /// Lowercase colour name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CamelColor::Red => "red",
            CamelColor::Blue => "blue",
            CamelColor::Green => "green",
            CamelColor::Yellow => "yellow",
            CamelColor::Purple => "purple",
            CamelColor::White => "white",
            CamelColor::Black => "black",
        }
    }
}

impl std::fmt::Display for CamelColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A camel and the space it stands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camel {
    pub color: CamelColor,
    /// Space index; 0 is the start.
    pub position: usize,
}

impl Camel {
    /// A camel waiting at the start.
    #[must_use]
    pub const fn new(color: CamelColor) -> Self {
        Self { color, position: 0 }
    }
}
