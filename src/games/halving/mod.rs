//! The halving game.
//!
//! - Start from a positive number (15 by default)
//! - On your turn: subtract one, or halve with floor division
//! - The player who brings the number to 0 wins

mod game;

pub use game::{HalvingGame, HalvingMove};
