//! Minimax agent.

use log::debug;

use crate::core::{GameRng, PlayerId};
use crate::error::Result;
use crate::rules::Game;
use crate::search::{Minimax, SearchStats};

use super::{Agent, DEFAULT_SEED};

/// Plays perfectly by searching every line to the end of the game.
///
/// Ties between equally valued moves are broken with the agent's own RNG.
#[derive(Debug)]
pub struct MinimaxAgent {
    player: PlayerId,
    name: String,
    rng: GameRng,
    search: Minimax,
}

impl MinimaxAgent {
    pub const DEFAULT_NAME: &'static str = "Minimax AI";

    pub fn new(player: PlayerId, seed: u64) -> Self {
        Self {
            player,
            name: Self::DEFAULT_NAME.to_string(),
            rng: GameRng::new(seed),
            search: Minimax::new(),
        }
    }

    /// Set a custom display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Statistics of the last decision.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        self.search.stats()
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new(PlayerId::First, DEFAULT_SEED)
    }
}

impl<G: Game> Agent<G> for MinimaxAgent {
    fn player(&self) -> PlayerId {
        self.player
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn choose_action(&mut self, game: &G) -> Result<Option<G::Action>> {
        let action = self.search.choose_action(game, self.player, &mut self.rng)?;
        if let Some(action) = &action {
            match self.search.stats().root_value {
                Some(value) => debug!("{} chooses: {} (value: {:.2})", self.name, action, value),
                None => debug!("{} chooses: {}", self.name, action),
            }
        }
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{HalvingGame, HalvingMove, NimGame, NimMove};

    #[test]
    fn test_equal_moves_tie() {
        let mut game = HalvingGame::new(2).unwrap();
        game.next(&HalvingMove::Halve).unwrap();

        // From 1 both moves reach 0.
        let mut agent = MinimaxAgent::new(PlayerId::Second, 1);
        assert!(agent.choose_action(&game).unwrap().is_some());
        assert_eq!(agent.stats().root_value, Some(1.0));
        assert_eq!(agent.stats().tied_actions, 2);
    }

    #[test]
    fn test_finds_winning_nim_move() {
        // [3, 5]: the only winning move is to equalise the piles.
        let game = NimGame::new(&[3, 5]).unwrap();
        let mut agent = MinimaxAgent::new(PlayerId::First, 1);

        let action = agent.choose_action(&game).unwrap().unwrap();
        assert_eq!(action, NimMove::new(1, 2));
        assert_eq!(agent.stats().root_value, Some(1.0));
        assert_eq!(agent.stats().tied_actions, 1);
    }

    #[test]
    fn test_does_not_modify_game() {
        let game = NimGame::new(&[2, 3]).unwrap();
        let before = game.clone();
        let mut agent = MinimaxAgent::default();

        agent.choose_action(&game).unwrap();
        assert_eq!(game, before);
    }
}
