//! Uniform random agent.

use log::debug;

use crate::core::{GameRng, PlayerId};
use crate::error::Result;
use crate::rules::Game;

use super::{Agent, DEFAULT_SEED};

/// Picks uniformly among the legal actions.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    player: PlayerId,
    name: String,
    rng: GameRng,
}

impl RandomAgent {
    pub const DEFAULT_NAME: &'static str = "Random AI";

    /// Create an agent with its own seeded RNG.
    pub fn new(player: PlayerId, seed: u64) -> Self {
        Self {
            player,
            name: Self::DEFAULT_NAME.to_string(),
            rng: GameRng::new(seed),
        }
    }

    /// Set a custom display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Seed the agent was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new(PlayerId::First, DEFAULT_SEED)
    }
}

impl<G: Game> Agent<G> for RandomAgent {
    fn player(&self) -> PlayerId {
        self.player
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn choose_action(&mut self, game: &G) -> Result<Option<G::Action>> {
        let actions = game.actions();
        let action = self.rng.choose(&actions).cloned();
        if let Some(action) = &action {
            debug!("{} chooses: {}", self.name, action);
        }
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{HalvingGame, HalvingMove, TicTacToeGame};

    #[test]
    fn test_returns_legal_action() {
        let game = TicTacToeGame::from_moves(&[(0, 0), (1, 1)]).unwrap();
        let mut agent = RandomAgent::new(PlayerId::First, 5);

        for _ in 0..20 {
            let action = agent.choose_action(&game).unwrap().unwrap();
            assert!(game.actions().contains(&action));
        }
    }

    #[test]
    fn test_terminal_returns_none() {
        let mut game = HalvingGame::new(1).unwrap();
        game.next(&HalvingMove::Halve).unwrap();

        let mut agent = RandomAgent::new(PlayerId::Second, 5);
        assert_eq!(agent.choose_action(&game).unwrap(), None);
    }

    #[test]
    fn test_does_not_modify_game() {
        let game = TicTacToeGame::new();
        let before = game.clone();
        let mut agent = RandomAgent::default();

        let _ = Agent::<TicTacToeGame>::choose_action(&mut agent, &game).unwrap();
        assert_eq!(game, before);
    }

    #[test]
    fn test_same_seed_same_choices() {
        let game = TicTacToeGame::new();
        let mut a = RandomAgent::new(PlayerId::First, 99);
        let mut b = RandomAgent::new(PlayerId::First, 99);

        for _ in 0..10 {
            assert_eq!(a.choose_action(&game).unwrap(), b.choose_action(&game).unwrap());
        }
    }

    #[test]
    fn test_custom_name() {
        let agent = RandomAgent::new(PlayerId::First, 1).with_name("Chaos");
        assert_eq!(Agent::<TicTacToeGame>::name(&agent), "Chaos");
        assert_eq!(agent.seed(), 1);
    }
}
