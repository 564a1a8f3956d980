//! Nim with any number of piles.
//!
//! - Default setup: piles of 1, 3, 5 and 7 objects
//! - On your turn: remove one or more objects from a single pile
//! - The player who takes the last object wins (normal play)

mod game;

pub use game::{NimGame, NimMove};
