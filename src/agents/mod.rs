//! Agents that pick moves for one side of a game.
//!
//! - `RandomAgent`: uniform over legal actions
//! - `MinimaxAgent`: exhaustive minimax with random tie-breaking
//! - `HumanAgent`: interactive menu (feature `cli`)
//!
//! Every agent is bound to one `PlayerId` and owns its randomness, so two
//! agents built with the same seeds make the same decisions.

#[cfg(feature = "cli")]
pub mod human;
pub mod minimax;
pub mod random;

#[cfg(feature = "cli")]
pub use human::HumanAgent;
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::error::Result;
use crate::rules::Game;

/// Default seed for agents built without an explicit one.
pub const DEFAULT_SEED: u64 = 42;

/// Move selection for one side of a game.
///
/// Implementations must not alter the game they are shown; they return the
/// action and the driver applies it.
pub trait Agent<G: Game> {
    /// The side this agent plays.
    fn player(&self) -> PlayerId;

    /// Display name, recorded in simulation output.
    fn name(&self) -> &str;

    /// Pick an action, or `None` if the game has none.
    fn choose_action(&mut self, game: &G) -> Result<Option<G::Action>>;
}

/// Kind of agent to build for a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum AgentKind {
    Human,
    Random,
    Minimax,
}

impl AgentKind {
    /// Kinds that need no terminal, in simulation pairing order.
    pub const AUTOMATED: [AgentKind; 2] = [AgentKind::Random, AgentKind::Minimax];

    /// Name the built agent will report.
    #[must_use]
    pub fn agent_name(self) -> &'static str {
        match self {
            AgentKind::Human => "Human",
            AgentKind::Random => RandomAgent::DEFAULT_NAME,
            AgentKind::Minimax => MinimaxAgent::DEFAULT_NAME,
        }
    }

    /// Build a boxed agent for `player`.
    ///
    /// `seed` only matters for the automated kinds. Without the `cli`
    /// feature a human agent cannot be built.
    pub fn build<G: Game + 'static>(self, player: PlayerId, seed: u64) -> Result<Box<dyn Agent<G>>> {
        match self {
            AgentKind::Random => Ok(Box::new(RandomAgent::new(player, seed))),
            AgentKind::Minimax => Ok(Box::new(MinimaxAgent::new(player, seed))),
            AgentKind::Human => build_human(player),
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AgentKind::Human => "Human",
            AgentKind::Random => "Random",
            AgentKind::Minimax => "Minimax",
        };
        write!(f, "{}", label)
    }
}

#[cfg(feature = "cli")]
fn build_human<G: Game + 'static>(player: PlayerId) -> Result<Box<dyn Agent<G>>> {
    Ok(Box::new(HumanAgent::new(player)))
}

#[cfg(not(feature = "cli"))]
fn build_human<G: Game + 'static>(_player: PlayerId) -> Result<Box<dyn Agent<G>>> {
    Err(crate::error::Error::invalid_configuration(
        "human agents require the `cli` feature",
    ))
}
