//! Batch simulator: plays every agent pairing many times and writes
//! `results.csv`, `simulation.log`, and a summary.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use rust_games::agents::AgentKind;
use rust_games::logging;
use rust_games::{GameConfig, SimulationConfig, Simulator};

#[derive(Parser, Debug)]
#[command(name = "simulate")]
#[command(version, about = "Simulate games between automated agents", long_about = None)]
struct Cli {
    /// Games per agent pairing
    #[arg(long, short = 'n', default_value_t = 200)]
    games: usize,

    /// Worker threads (default: CPU count, at least 8)
    #[arg(long, short = 'w')]
    workers: Option<usize>,

    /// Master seed for starting numbers and agent seeds
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Output directory, removed and recreated on each run
    #[arg(long, short = 'o', default_value = "results")]
    output: PathBuf,

    /// Lowest random starting number for the halving game
    #[arg(long, default_value_t = 10)]
    min_start: u32,

    /// Highest random starting number for the halving game
    #[arg(long, default_value_t = 20)]
    max_start: u32,

    /// Also simulate nim with these piles (comma separated)
    #[arg(long, value_delimiter = ',')]
    nim: Option<Vec<i64>>,

    /// Restrict pairings to this agent for player 1
    #[arg(long, value_enum)]
    first: Option<AgentKind>,

    /// Restrict pairings to this agent for player 2
    #[arg(long, value_enum)]
    second: Option<AgentKind>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = SimulationConfig::new()
        .with_games_per_pairing(cli.games)
        .with_seed(cli.seed)
        .with_output_dir(cli.output)
        .with_initial_range(Some((cli.min_start, cli.max_start)));
    if let Some(workers) = cli.workers {
        config = config.with_workers(workers);
    }
    if let Some(piles) = cli.nim {
        let mut games = config.games.clone();
        games.push(GameConfig::nim(piles));
        config = config.with_games(games);
    }
    let pairings = config
        .pairings
        .iter()
        .copied()
        .filter(|(first, second)| {
            cli.first.map_or(true, |kind| kind == *first)
                && cli.second.map_or(true, |kind| kind == *second)
        })
        .collect::<Vec<_>>();
    let config = config.with_pairings(pairings);

    let mut simulator = Simulator::new(config)?;
    simulator.prepare_output_dir()?;
    logging::init(&simulator.config().log_path())?;

    info!(
        "Starting simulations with {} worker threads",
        simulator.config().workers
    );
    let summary = simulator.run()?;
    info!("Simulated {} games", summary.total_games());
    Ok(())
}
