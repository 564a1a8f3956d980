//! # rust-games
//!
//! Two-player, zero-sum, perfect-information games with exhaustive
//! minimax agents.
//!
//! ## Design Principles
//!
//! 1. **One Contract**: Every game implements `Game`. Search, agents and
//!    drivers are generic over it and never look inside a position.
//!
//! 2. **Values Not Handles**: A game is a plain value. Cloning gives an
//!    independent branch; search clones once per edge.
//!
//! 3. **Owned Randomness**: Each agent owns a seeded `GameRng`. There is no
//!    global RNG, so the same seeds always give the same games.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, game configuration
//! - `rules`: The `Game` trait and outcomes
//! - `games`: Halving game, tic-tac-toe, nim, connect four
//! - `search`: Exhaustive minimax
//! - `agents`: Random, minimax and human agents
//! - `play`: Two-agent match driver
//! - `simulation`: Parallel batch simulation with CSV output
//! - `logging`: Terminal and file loggers (feature `cli`)

pub mod agents;
pub mod core;
pub mod error;
pub mod games;
#[cfg(feature = "cli")]
pub mod logging;
pub mod play;
pub mod rules;
pub mod search;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, PlayerId, PlayerMap};

pub use crate::error::{Error, Result};

pub use crate::rules::{Game, GameResult, Outcome};

pub use crate::games::{
    Cell, ConnectFourGame, HalvingGame, HalvingMove, NimGame, NimMove, TicTacToeGame,
};

pub use crate::search::{Minimax, SearchStats};

pub use crate::agents::{Agent, AgentKind, MinimaxAgent, RandomAgent};
#[cfg(feature = "cli")]
pub use crate::agents::HumanAgent;

pub use crate::play::{Match, MatchReport, Turn};

pub use crate::simulation::{MatchRecord, SimulationConfig, Simulator, Summary};
