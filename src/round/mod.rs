//! Round records and scoring.

pub mod results;
pub mod scoring;

pub use results::RoundResults;
pub use scoring::{RoundPayout, RoundScorer, StandardScorer};
