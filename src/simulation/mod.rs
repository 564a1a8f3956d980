//! Batch simulation of agent pairings.
//!
//! - `config`: run parameters (`SimulationConfig`)
//! - `record`: one CSV row per completed game
//! - `simulator`: thread-pool driver
//! - `summary`: grouped win/draw, move, and timing statistics

pub mod config;
pub mod record;
pub mod simulator;
pub mod summary;

pub use config::SimulationConfig;
pub use record::MatchRecord;
pub use simulator::Simulator;
pub use summary::{PairingSummary, Summary};
