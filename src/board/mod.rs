//! Board and track model.
//!
//! ## Key Types
//!
//! - `CamelColor`, `Camel`: the seven racers and their positions
//! - `Space`: one track space with its camel stack and optional token
//! - `Board`: the whole track, owning all stacks and movement

pub mod camel;
pub mod space;
pub mod track;

pub use camel::{Camel, CamelColor, CAMEL_COUNT};
pub use space::{CamelStack, Space};
pub use track::{Board, CamelMove, StackPosition};
