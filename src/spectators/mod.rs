//! Spectator tokens.
//!
//! Tokens are round-scoped: they are placed or moved during a round and
//! cleared from the track when it ends. Camels landing on a token pay its
//! owner at scoring time.

pub mod token;

pub use token::{check_placement, move_token, place_token, SpectatorToken, TokenLanding, TokenSide};
