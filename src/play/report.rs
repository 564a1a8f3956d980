//! Record of a finished (or aborted) match.

use crate::core::{PlayerId, PlayerMap};
use crate::rules::GameResult;

/// A single move taken during a match.
#[derive(Clone, Debug, PartialEq)]
pub struct Turn<A> {
    /// The player who moved.
    pub player: PlayerId,

    /// The action applied.
    pub action: A,

    /// Seconds the agent spent choosing it.
    pub seconds: f64,
}

/// Everything recorded while playing one match.
#[derive(Clone, Debug)]
pub struct MatchReport<A> {
    /// Final result, `None` if play stopped before the game ended.
    pub result: Option<GameResult>,

    /// Moves in the order they were played.
    pub turns: Vec<Turn<A>>,

    /// Total decision time per player, in seconds.
    pub computation_time: PlayerMap<f64>,
}

impl<A> MatchReport<A> {
    pub(crate) fn new() -> Self {
        Self {
            result: None,
            turns: Vec::new(),
            computation_time: PlayerMap::with_value(0.0),
        }
    }

    pub(crate) fn push(&mut self, turn: Turn<A>) {
        self.computation_time[turn.player] += turn.seconds;
        self.turns.push(turn);
    }

    /// Number of moves applied.
    #[must_use]
    pub fn total_moves(&self) -> usize {
        self.turns.len()
    }

    /// Winner code: `1`, `-1`, or `0` for a draw or unfinished game.
    #[must_use]
    pub fn winner_code(&self) -> i8 {
        self.result.map_or(0, |result| result.code())
    }

    /// Moves made by one player.
    pub fn moves_by(&self, player: PlayerId) -> impl Iterator<Item = &Turn<A>> {
        self.turns.iter().filter(move |turn| turn.player == player)
    }
}
