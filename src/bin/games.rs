//! Interactive games collection: pick a game and an agent for each side,
//! then watch or play.

use anyhow::Result;
use clap::Parser;
use dialoguer::{Confirm, Input, Select};
use log::LevelFilter;

use rust_games::agents::AgentKind;
use rust_games::logging;
use rust_games::{
    ConnectFourGame, Game, GameConfig, GameRng, HalvingGame, Match, NimGame, PlayerId,
    TicTacToeGame,
};

#[derive(Parser, Debug)]
#[command(name = "games")]
#[command(version, about = "Play two-player games against humans or AI agents", long_about = None)]
struct Cli {
    /// Seed for the AI agents
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Show search details for AI moves
    #[arg(long, short = 'v')]
    verbose: bool,
}

const KINDS: [AgentKind; 3] = [AgentKind::Human, AgentKind::Random, AgentKind::Minimax];

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    logging::init_terminal(level)?;

    println!("Welcome to the Games Collection!");
    println!("{}", "=".repeat(40));

    let mut rng = GameRng::new(cli.seed);
    let defaults = GameConfig::defaults();
    let mut items: Vec<String> = defaults.iter().map(|c| c.name().to_string()).collect();
    items.push("Exit".to_string());

    loop {
        let choice = Select::new()
            .with_prompt("\nChoose a game")
            .items(items.as_slice())
            .default(0)
            .interact()?;
        let Some(default) = defaults.get(choice) else {
            println!("Thanks for playing!");
            return Ok(());
        };

        println!("\n{} Rules:\n{}", default.name(), default.rules());
        let config = configure(default)?;

        let first = choose_kind(PlayerId::First)?;
        let second = choose_kind(PlayerId::Second)?;
        let seeds = (rng.gen_seed(), rng.gen_seed());

        // Errors end the current game only; the menu keeps running.
        if let Err(e) = play(&config, first, second, seeds) {
            println!("Error: {}", e);
        }

        if !Confirm::new()
            .with_prompt("Play another game?")
            .default(true)
            .interact()?
        {
            println!("Thanks for playing!");
            return Ok(());
        }
    }
}

fn configure(default: &GameConfig) -> Result<GameConfig> {
    let config = match default {
        GameConfig::Halving { starting_number } => {
            let start: u32 = Input::new()
                .with_prompt("Enter starting number")
                .default(*starting_number)
                .validate_with(|n: &u32| -> std::result::Result<(), &str> {
                    match *n > 0 {
                        true => Ok(()),
                        false => Err("The starting number must be positive"),
                    }
                })
                .interact_text()?;
            GameConfig::halving(start)
        }
        GameConfig::TicTacToe => GameConfig::TicTacToe,
        GameConfig::Nim { piles } => {
            let custom = Select::new()
                .with_prompt("Choose pile configuration")
                .items(&[format!("Default {:?}", piles), "Custom".to_string()])
                .default(0)
                .interact()?;
            match custom {
                0 => default.clone(),
                _ => read_piles().unwrap_or_else(|| {
                    println!("Invalid input, using default piles");
                    default.clone()
                }),
            }
        }
        GameConfig::ConnectFour { .. } => {
            let sizes = ConnectFourGame::SUPPORTED_SIZES;
            let labels: Vec<String> = sizes.iter().map(|s| format!("{}x{} board", s, s)).collect();
            let index = Select::new()
                .with_prompt("Choose board size")
                .items(labels.as_slice())
                .default(0)
                .interact()?;
            GameConfig::connect_four(sizes[index])
        }
    };
    Ok(config)
}

fn read_piles() -> Option<GameConfig> {
    let line: String = Input::new()
        .with_prompt("Enter pile sizes separated by commas (e.g., 2,4,6)")
        .interact_text()
        .ok()?;
    let piles = line
        .split(',')
        .map(|pile| pile.trim().parse::<i64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .ok()?;
    let config = GameConfig::nim(piles);
    config.validate().ok().map(|_| config)
}

fn choose_kind(player: PlayerId) -> Result<AgentKind> {
    let labels: Vec<String> = KINDS
        .iter()
        .map(|kind| kind.agent_name().to_string())
        .collect();
    let index = Select::new()
        .with_prompt(format!("Choose agent type for {}", player))
        .items(labels.as_slice())
        .default(0)
        .interact()?;
    Ok(KINDS[index])
}

fn play(
    config: &GameConfig,
    first: AgentKind,
    second: AgentKind,
    seeds: (u64, u64),
) -> rust_games::Result<()> {
    match config {
        GameConfig::Halving { starting_number } => {
            run(HalvingGame::new(*starting_number)?, first, second, seeds)
        }
        GameConfig::TicTacToe => run(TicTacToeGame::new(), first, second, seeds),
        GameConfig::Nim { piles } => run(NimGame::new(piles)?, first, second, seeds),
        GameConfig::ConnectFour { board_size } => {
            run(ConnectFourGame::new(*board_size)?, first, second, seeds)
        }
    }
}

fn run<G: Game + 'static>(
    game: G,
    first: AgentKind,
    second: AgentKind,
    seeds: (u64, u64),
) -> rust_games::Result<()> {
    let first = first.build::<G>(PlayerId::First, seeds.0)?;
    let second = second.build::<G>(PlayerId::Second, seeds.1)?;

    println!("\nStarting game: {} vs {}", first.name(), second.name());
    println!("{}", "=".repeat(50));

    let mut game_match = Match::new(game, first, second)?;
    loop {
        let Some(turn) = game_match.step()? else {
            break;
        };
        let (player, action) = (turn.player, turn.action.clone());
        let agent = game_match.agent(player);
        println!("{} chooses: {}", agent.name(), action);
    }

    println!("\n{}", game_match.game());
    println!("{}", "=".repeat(50));
    game_match.finish();
    Ok(())
}
