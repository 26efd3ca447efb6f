//! The race engine and its persistence boundary.
//!
//! `CamelRace` is the only place that mutates a race. It checks the rules,
//! applies the change and runs the round lifecycle. Rendering and I/O stay
//! outside; callers read `CamelRace::state` and save `RaceSnapshot` bytes.

pub mod engine;
pub mod snapshot;

pub use engine::{CamelRace, RollOutcome};
pub use snapshot::RaceSnapshot;
