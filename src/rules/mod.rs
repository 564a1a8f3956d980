//! The game-state contract every variant implements.

pub mod engine;

pub use engine::{Game, GameResult, Outcome};
