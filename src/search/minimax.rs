//! Exhaustive minimax search.
//!
//! Every branch is expanded down to a terminal position. Leaves score
//! `player.sign() * utility`, so all values are from the searching player's
//! point of view and the two evaluators alternate strictly by ply.

use std::time::Instant;

use log::debug;

use crate::core::{GameRng, PlayerId};
use crate::error::Result;
use crate::rules::Game;

use super::stats::SearchStats;

/// Full-depth minimax with random tie-breaking at the root.
///
/// The searcher itself holds no randomness; the caller passes the RNG used
/// to break ties so that each agent owns its own stream.
#[derive(Debug, Default)]
pub struct Minimax {
    stats: SearchStats,
}

impl Minimax {
    /// Create a new searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Choose an optimal action for `player` in `game`.
    ///
    /// Returns `Ok(None)` on a terminal position. A single legal action is
    /// returned without searching. Otherwise every action is scored with the
    /// opponent to reply and one of the best is drawn uniformly from `rng`.
    pub fn choose_action<G: Game>(
        &mut self,
        game: &G,
        player: PlayerId,
        rng: &mut GameRng,
    ) -> Result<Option<G::Action>> {
        let start = Instant::now();
        self.stats.reset();

        let actions = game.actions();
        if actions.is_empty() {
            return Ok(None);
        }
        if actions.len() == 1 {
            self.stats.tied_actions = 1;
            self.stats.time_us = start.elapsed().as_micros() as u64;
            return Ok(actions.into_iter().next());
        }

        let mut scored = Vec::with_capacity(actions.len());
        for action in actions {
            let child = game.successor(&action)?;
            self.stats.nodes += 1;
            let value = self.minimize(&child, player)?;
            scored.push((action, value));
        }

        let best = scored
            .iter()
            .map(|(_, value)| *value)
            .fold(f64::NEG_INFINITY, f64::max);
        let tied: Vec<G::Action> = scored
            .into_iter()
            .filter(|(_, value)| *value == best)
            .map(|(action, _)| action)
            .collect();

        self.stats.root_value = Some(best);
        self.stats.tied_actions = tied.len();
        self.stats.time_us = start.elapsed().as_micros() as u64;

        debug!(
            "minimax: {} nodes, {} leaves, best {} shared by {} actions ({:.0} nodes/s)",
            self.stats.nodes,
            self.stats.leaves,
            best,
            tied.len(),
            self.stats.nodes_per_second()
        );

        Ok(rng.choose(&tied).cloned())
    }

    /// Game-theoretic value of `game` for `player`, who is assumed to be the
    /// player to move.
    pub fn evaluate<G: Game>(&mut self, game: &G, player: PlayerId) -> Result<f64> {
        let start = Instant::now();
        self.stats.reset();
        let value = self.maximize(game, player)?;
        self.stats.root_value = Some(value);
        self.stats.time_us = start.elapsed().as_micros() as u64;
        Ok(value)
    }

    fn maximize<G: Game>(&mut self, game: &G, player: PlayerId) -> Result<f64> {
        if game.is_terminal() {
            return self.leaf(game, player);
        }
        let mut value = f64::NEG_INFINITY;
        for action in game.actions() {
            let child = game.successor(&action)?;
            self.stats.nodes += 1;
            value = value.max(self.minimize(&child, player)?);
        }
        Ok(value)
    }

    fn minimize<G: Game>(&mut self, game: &G, player: PlayerId) -> Result<f64> {
        if game.is_terminal() {
            return self.leaf(game, player);
        }
        let mut value = f64::INFINITY;
        for action in game.actions() {
            let child = game.successor(&action)?;
            self.stats.nodes += 1;
            value = value.min(self.maximize(&child, player)?);
        }
        Ok(value)
    }

    fn leaf<G: Game>(&mut self, game: &G, player: PlayerId) -> Result<f64> {
        self.stats.leaves += 1;
        Ok(f64::from(player.sign()) * game.utility()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{Cell, HalvingGame, HalvingMove, NimGame, NimMove, TicTacToeGame};

    #[test]
    fn test_terminal_returns_none() {
        let mut game = HalvingGame::new(1).unwrap();
        game.next(&HalvingMove::Subtract).unwrap();

        let mut search = Minimax::new();
        let mut rng = GameRng::new(42);
        assert_eq!(search.choose_action(&game, PlayerId::Second, &mut rng).unwrap(), None);
    }

    #[test]
    fn test_single_action_skips_search() {
        let game = NimGame::new(&[1]).unwrap();
        let mut search = Minimax::new();
        let mut rng = GameRng::new(42);

        let action = search.choose_action(&game, PlayerId::First, &mut rng).unwrap();
        assert_eq!(action, Some(NimMove::new(0, 1)));
        assert_eq!(search.stats().nodes, 0);
        assert_eq!(search.stats().root_value, None);
    }

    #[test]
    fn test_single_action_replaces_previous_timing() {
        let mut search = Minimax::new();
        let mut rng = GameRng::new(42);

        // A full tic-tac-toe search leaves a large time behind.
        search
            .choose_action(&TicTacToeGame::new(), PlayerId::First, &mut rng)
            .unwrap();
        let full_search_us = search.stats().time_us;

        let outer = Instant::now();
        search
            .choose_action(&NimGame::new(&[1]).unwrap(), PlayerId::First, &mut rng)
            .unwrap();
        let outer_us = outer.elapsed().as_micros() as u64;

        assert!(search.stats().time_us <= outer_us);
        assert!(search.stats().time_us <= full_search_us);
        assert_eq!(search.stats().tied_actions, 1);
    }

    #[test]
    fn test_takes_immediate_win() {
        // X to move with (0,0) (0,1) already placed; (0,2) completes the row.
        let game = TicTacToeGame::from_moves(&[(0, 0), (1, 0), (0, 1), (1, 1)]).unwrap();
        let mut search = Minimax::new();
        let mut rng = GameRng::new(7);

        let action = search
            .choose_action(&game, PlayerId::First, &mut rng)
            .unwrap()
            .unwrap();
        // O threatens row 1, so only the immediate win avoids a loss.
        assert_eq!(action, Cell::new(0, 2));
        assert_eq!(search.stats().root_value, Some(1.0));
        assert_eq!(search.stats().tied_actions, 1);
    }

    #[test]
    fn test_blocks_opponent() {
        // O to move; X threatens (0,2) and O has no immediate win.
        let game = TicTacToeGame::from_moves(&[(0, 0), (1, 1), (0, 1)]).unwrap();
        let mut search = Minimax::new();
        let mut rng = GameRng::new(3);

        let action = search
            .choose_action(&game, PlayerId::Second, &mut rng)
            .unwrap()
            .unwrap();
        assert_eq!(action, Cell::new(0, 2));
    }

    #[test]
    fn test_evaluate_winning_position() {
        let game = NimGame::new(&[1, 2]).unwrap();
        let mut search = Minimax::new();

        // Nim-sum 3: the player to move wins.
        assert_eq!(search.evaluate(&game, PlayerId::First).unwrap(), 1.0);
        assert!(search.stats().leaves > 0);
        assert!(search.stats().nodes >= search.stats().leaves);
    }

    #[test]
    fn test_ties_broken_by_rng() {
        // Every opening move of nim [2, 2] loses, so all four actions tie.
        let game = NimGame::new(&[2, 2]).unwrap();
        let mut search = Minimax::new();

        let mut seen = Vec::new();
        for seed in 0..32 {
            let mut rng = GameRng::new(seed);
            let action = search
                .choose_action(&game, PlayerId::First, &mut rng)
                .unwrap()
                .unwrap();
            assert_eq!(search.stats().tied_actions, 4);
            assert_eq!(search.stats().root_value, Some(-1.0));
            if !seen.contains(&action) {
                seen.push(action);
            }
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_same_seed_same_choice() {
        let game = NimGame::new(&[2, 2]).unwrap();
        let mut search = Minimax::new();

        let first = search
            .choose_action(&game, PlayerId::First, &mut GameRng::new(11))
            .unwrap();
        let second = search
            .choose_action(&game, PlayerId::First, &mut GameRng::new(11))
            .unwrap();
        assert_eq!(first, second);
    }
}
