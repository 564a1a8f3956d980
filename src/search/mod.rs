//! Exhaustive game-tree search.
//!
//! - `minimax`: full-depth minimax with uniform tie-breaking
//! - `stats`: per-search counters

pub mod minimax;
pub mod stats;

pub use minimax::Minimax;
pub use stats::SearchStats;
