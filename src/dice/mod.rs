//! Die resolution.
//!
//! Every throw first decides which die comes up. The special die shows a
//! value in 1..=3 and white or black; the regular die shows a value from
//! `{1,2,3,1,2,3}` and one of the five regular colours.
//!
//! ```
//! use camel_derby::core::GameRng;
//! use camel_derby::dice::{throw, DieKind};
//!
//! let mut rng = GameRng::new(3);
//! let roll = throw(&mut rng, 0.0);
//!
//! assert_eq!(roll.kind, DieKind::Regular);
//! assert!((1..=3).contains(&roll.value));
//! ```

use serde::{Deserialize, Serialize};

use crate::board::CamelColor;
use crate::core::GameRng;

/// Faces of the regular die.
pub const REGULAR_FACES: [u8; 6] = [1, 2, 3, 1, 2, 3];

/// Faces of the special die.
pub const SPECIAL_FACES: [u8; 3] = [1, 2, 3];

/// Which die produced a roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieKind {
    Regular,
    Special,
}

/// A resolved throw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieRoll {
    pub kind: DieKind,
    /// 1, 2 or 3.
    pub value: u8,
    pub color: CamelColor,
}

impl DieRoll {
    /// A regular-die result.
    #[must_use]
    pub fn regular(value: u8, color: CamelColor) -> Self {
        Self {
            kind: DieKind::Regular,
            value,
            color,
        }
    }
}

/// Throw one die. The special die comes up with probability
/// `special_chance`.
pub fn throw(rng: &mut GameRng, special_chance: f64) -> DieRoll {
    if rng.gen_bool(special_chance) {
        DieRoll {
            kind: DieKind::Special,
            value: pick(rng, &SPECIAL_FACES),
            color: pick(rng, &CamelColor::SPECIAL),
        }
    } else {
        DieRoll {
            kind: DieKind::Regular,
            value: pick(rng, &REGULAR_FACES),
            color: pick(rng, &CamelColor::REGULAR),
        }
    }
}

fn pick<T: Copy>(rng: &mut GameRng, faces: &[T]) -> T {
    match rng.choose(faces) {
        Some(&face) => face,
        None => unreachable!("die faces are never empty"),
    }
}
