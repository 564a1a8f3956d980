//! Turn loop for a two-agent match.

use std::time::Instant;

use log::{debug, warn};

use crate::agents::Agent;
use crate::core::PlayerId;
use crate::error::{Error, Result};
use crate::rules::Game;

use super::report::{MatchReport, Turn};

/// One game between two agents.
///
/// The match owns the game and both agents. Agents only ever see a shared
/// reference to the game; the match applies the chosen actions.
pub struct Match<G: Game> {
    game: G,
    agents: [Box<dyn Agent<G>>; 2],
    report: MatchReport<G::Action>,
}

impl<G: Game> Match<G> {
    /// Seat `first` and `second` at `game`.
    ///
    /// Each agent must have been built for the side it is seated on.
    pub fn new(game: G, first: Box<dyn Agent<G>>, second: Box<dyn Agent<G>>) -> Result<Self> {
        let agents = [first, second];
        for (seat, agent) in PlayerId::ALL.into_iter().zip(agents.iter()) {
            if agent.player() != seat {
                return Err(Error::invalid_configuration(format!(
                    "{} plays as {} but is seated as {}",
                    agent.name(),
                    agent.player(),
                    seat
                )));
            }
        }
        Ok(Self {
            game,
            agents,
            report: MatchReport::new(),
        })
    }

    /// The current position.
    #[must_use]
    pub fn game(&self) -> &G {
        &self.game
    }

    /// The agent seated as `player`.
    #[must_use]
    pub fn agent(&self, player: PlayerId) -> &dyn Agent<G> {
        self.agents[player.index()].as_ref()
    }

    /// The report so far.
    #[must_use]
    pub fn report(&self) -> &MatchReport<G::Action> {
        &self.report
    }

    /// Let the player to move choose and apply one action.
    ///
    /// Returns `Ok(None)` once the game is over, or if the agent declines to
    /// move.
    pub fn step(&mut self) -> Result<Option<&Turn<G::Action>>> {
        if self.game.is_terminal() {
            return Ok(None);
        }

        let player = self.game.current_player();
        let agent = &mut self.agents[player.index()];

        let start = Instant::now();
        let chosen = agent.choose_action(&self.game)?;
        let seconds = start.elapsed().as_secs_f64();

        let Some(action) = chosen else {
            warn!("{} returned no action in a running game", agent.name());
            return Ok(None);
        };

        self.game.next(&action)?;
        debug!("{} ({}) plays {}", player, agent.name(), action);

        self.report.push(Turn {
            player,
            action,
            seconds,
        });
        Ok(self.report.turns.last())
    }

    /// Play until the game ends and return the report.
    pub fn play(mut self) -> Result<MatchReport<G::Action>> {
        while self.step()?.is_some() {}
        Ok(self.finish())
    }

    /// Stop playing and return the report, with the result if the game ended.
    pub fn finish(mut self) -> MatchReport<G::Action> {
        self.report.result = self.game.winner();
        if let Some(result) = self.report.result {
            debug!(
                "{} finished after {} moves, winner code {}",
                self.game.name(),
                self.report.total_moves(),
                result.code()
            );
        }
        self.report
    }
}
