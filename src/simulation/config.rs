//! Batch simulation configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::agents::AgentKind;
use crate::core::GameConfig;
use crate::error::{Error, Result};

/// Configuration for a batch simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Games played per (game, agent pairing).
    pub games_per_pairing: usize,

    /// Worker threads for the game pool.
    pub workers: usize,

    /// Master seed. Per-match starting numbers and agent seeds are drawn
    /// from it in match order, so a run is reproducible for any worker count.
    pub seed: u64,

    /// Games to simulate, in order.
    pub games: Vec<GameConfig>,

    /// Agent pairings `(first, second)`, in order.
    pub pairings: Vec<(AgentKind, AgentKind)>,

    /// Draw each halving game's starting number from this inclusive range
    /// instead of using the configured one. `None` keeps the configured start.
    pub initial_range: Option<(u32, u32)>,

    /// Directory for `results.csv` and `simulation.log`. Recreated on each run.
    pub output_dir: PathBuf,

    /// Log progress every this many completed games (0 = never).
    pub progress_interval: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games_per_pairing: 200,
            workers: num_cpus::get().max(8),
            seed: 42,
            games: vec![GameConfig::default(), GameConfig::TicTacToe],
            pairings: vec![
                (AgentKind::Random, AgentKind::Minimax),
                (AgentKind::Minimax, AgentKind::Minimax),
                (AgentKind::Minimax, AgentKind::Random),
                (AgentKind::Random, AgentKind::Random),
            ],
            initial_range: Some((10, 20)),
            output_dir: PathBuf::from("results"),
            progress_interval: 25,
        }
    }
}

impl SimulationConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set games per pairing.
    pub fn with_games_per_pairing(mut self, games: usize) -> Self {
        self.games_per_pairing = games;
        self
    }

    /// Set the worker count.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the list of games.
    pub fn with_games(mut self, games: Vec<GameConfig>) -> Self {
        self.games = games;
        self
    }

    /// Replace the list of agent pairings.
    pub fn with_pairings(mut self, pairings: Vec<(AgentKind, AgentKind)>) -> Self {
        self.pairings = pairings;
        self
    }

    /// Set or clear the random starting-number range for halving games.
    pub fn with_initial_range(mut self, range: Option<(u32, u32)>) -> Self {
        self.initial_range = range;
        self
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the progress logging interval.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Check the configuration before anything is written to disk.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::invalid_configuration("need at least one worker"));
        }
        if let Some((low, high)) = self.initial_range {
            if low == 0 || low > high {
                return Err(Error::invalid_configuration(format!(
                    "initial range {}..={} must be positive and non-empty",
                    low, high
                )));
            }
        }
        for (first, second) in &self.pairings {
            if *first == AgentKind::Human || *second == AgentKind::Human {
                return Err(Error::invalid_configuration(
                    "batch simulation cannot seat a human agent",
                ));
            }
        }
        for game in &self.games {
            game.validate()?;
        }
        Ok(())
    }

    /// Path of the CSV results file.
    #[must_use]
    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join("results.csv")
    }

    /// Path of the log file.
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.output_dir.join("simulation.log")
    }
}
