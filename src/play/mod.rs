//! Driving one game between two agents.
//!
//! `Match` alternates agents until the game ends and times each decision.
//! The result is a `MatchReport` with the move history and per-player
//! decision time.

mod report;
mod runner;

pub use report::{MatchReport, Turn};
pub use runner::Match;
