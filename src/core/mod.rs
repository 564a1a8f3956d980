//! Core types shared by every game: players, RNG, configuration.

pub mod config;
pub mod player;
pub mod rng;

pub use config::GameConfig;
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
