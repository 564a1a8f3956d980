//! Parallel batch simulation.

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use log::{error, info, warn};
use rayon::prelude::*;

use crate::agents::AgentKind;
use crate::core::{GameConfig, GameRng, PlayerId};
use crate::error::{Error, Result};
use crate::games::{ConnectFourGame, HalvingGame, NimGame, TicTacToeGame};
use crate::play::Match;
use crate::rules::Game;

use super::config::SimulationConfig;
use super::record::{self, MatchRecord};
use super::summary::Summary;

/// Everything one simulated game needs, drawn up front from the master RNG.
#[derive(Clone, Debug)]
struct MatchPlan {
    match_number: usize,
    game: GameConfig,
    first_seed: u64,
    second_seed: u64,
}

/// Runs batches of games between automated agents and collects the results.
pub struct Simulator {
    config: SimulationConfig,
    rng: GameRng,
    results: Vec<MatchRecord>,
}

impl Simulator {
    /// Create a simulator. The configuration is validated here.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let rng = GameRng::new(config.seed);
        Ok(Self {
            config,
            rng,
            results: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Records of every completed game so far.
    #[must_use]
    pub fn results(&self) -> &[MatchRecord] {
        &self.results
    }

    /// Remove and recreate the output directory.
    pub fn prepare_output_dir(&self) -> Result<()> {
        let dir = &self.config.output_dir;
        if dir.exists() {
            fs::remove_dir_all(dir).map_err(|source| Error::Io {
                operation: format!("remove {}", dir.display()),
                source,
            })?;
        }
        fs::create_dir_all(dir).map_err(|source| Error::Io {
            operation: format!("create {}", dir.display()),
            source,
        })?;
        Ok(())
    }

    /// Run every configured game against every configured pairing.
    pub fn run_all(&mut self) -> Result<()> {
        info!("Starting game simulations...");
        info!("{}", "=".repeat(60));

        let games = self.config.games.clone();
        let pairings = self.config.pairings.clone();
        for game in &games {
            info!("--- {} SIMULATIONS ---", game.name().to_uppercase());
            for &(first, second) in &pairings {
                self.run_batch(game, first, second)?;
            }
        }

        info!("All simulations completed!");
        info!("Total games simulated: {}", self.results.len());
        Ok(())
    }

    /// Play `games_per_pairing` games of `game` between `first` and `second`.
    ///
    /// Games that fail are logged and skipped. Returns the number of games
    /// that completed.
    pub fn run_batch(
        &mut self,
        game: &GameConfig,
        first: AgentKind,
        second: AgentKind,
    ) -> Result<usize> {
        let total = self.config.games_per_pairing;
        info!(
            "Running {} {} games: {} vs {} (using {} threads)",
            total,
            game.name(),
            first,
            second,
            self.config.workers
        );

        let plans = self.plan_batch(game);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.workers)
            .build()
            .map_err(|e| Error::invalid_configuration(format!("thread pool: {}", e)))?;

        let finished: Mutex<Vec<MatchRecord>> = Mutex::new(Vec::with_capacity(total));
        let completed = AtomicUsize::new(0);
        let interval = self.config.progress_interval;

        pool.install(|| {
            plans.par_iter().for_each(|plan| {
                match play_planned(plan, first, second) {
                    Ok(record) => {
                        store(&finished, record);
                        let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                        if interval > 0 && done % interval == 0 {
                            info!("  Completed {}/{} games", done, total);
                        }
                    }
                    Err(e) => error!("Error in game {}: {}", plan.match_number, e),
                }
            });
        });

        let mut batch = finished.into_inner().unwrap_or_else(PoisonError::into_inner);
        batch.sort_by_key(|record| record.match_number);

        let count = batch.len();
        info!("  Batch completed: {}/{} games successful", count, total);
        self.results.extend(batch);
        Ok(count)
    }

    /// Write `results.csv` into the output directory.
    pub fn save_results(&self) -> Result<()> {
        if self.results.is_empty() {
            warn!("No results to save. Run simulations first.");
            return Ok(());
        }
        let path = self.config.csv_path();
        record::write_csv(&path, &self.results)?;
        info!("Results saved to {}", path.display());
        Ok(())
    }

    /// Group the collected results.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::from_records(&self.results)
    }

    /// Prepare the output directory, run everything, save, and log the summary.
    pub fn run(&mut self) -> Result<Summary> {
        let start = Instant::now();
        self.run_all()?;
        info!(
            "Total simulation time: {:.2} seconds",
            start.elapsed().as_secs_f64()
        );
        self.save_results()?;
        let summary = self.summary();
        summary.log();
        Ok(summary)
    }

    fn plan_batch(&mut self, game: &GameConfig) -> Vec<MatchPlan> {
        (1..=self.config.games_per_pairing)
            .map(|match_number| {
                let game = match (game, self.config.initial_range) {
                    (GameConfig::Halving { .. }, Some((low, high))) => {
                        GameConfig::halving(self.rng.gen_range_u32(low..=high))
                    }
                    _ => game.clone(),
                };
                MatchPlan {
                    match_number,
                    game,
                    first_seed: self.rng.gen_seed(),
                    second_seed: self.rng.gen_seed(),
                }
            })
            .collect()
    }
}

/// Push a finished record, recovering the buffer if another worker panicked.
fn store(finished: &Mutex<Vec<MatchRecord>>, record: MatchRecord) {
    finished
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(record);
}

fn play_planned(plan: &MatchPlan, first: AgentKind, second: AgentKind) -> Result<MatchRecord> {
    match &plan.game {
        GameConfig::Halving { starting_number } => {
            play_one(HalvingGame::new(*starting_number)?, plan, first, second)
        }
        GameConfig::TicTacToe => play_one(TicTacToeGame::new(), plan, first, second),
        GameConfig::Nim { piles } => play_one(NimGame::new(piles)?, plan, first, second),
        GameConfig::ConnectFour { board_size } => {
            play_one(ConnectFourGame::new(*board_size)?, plan, first, second)
        }
    }
}

fn play_one<G: Game + 'static>(
    game: G,
    plan: &MatchPlan,
    first: AgentKind,
    second: AgentKind,
) -> Result<MatchRecord> {
    let game_type = game.name().to_string();
    let initial_number = game.parameter();

    let first = first.build::<G>(PlayerId::First, plan.first_seed)?;
    let second = second.build::<G>(PlayerId::Second, plan.second_seed)?;
    let player1_agent = first.name().to_string();
    let player2_agent = second.name().to_string();

    let report = Match::new(game, first, second)?.play()?;

    Ok(MatchRecord {
        game_type,
        match_number: plan.match_number,
        initial_number,
        player1_agent,
        player2_agent,
        winner: report.winner_code(),
        total_moves: report.total_moves(),
        player1_computation_time: report.computation_time[PlayerId::First],
        player2_computation_time: report.computation_time[PlayerId::Second],
    })
}
