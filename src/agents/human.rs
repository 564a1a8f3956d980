//! Interactive agent reading moves from the terminal.

use dialoguer::Select;

use crate::core::PlayerId;
use crate::error::{Error, Result};
use crate::rules::Game;

use super::Agent;

/// Shows the position and asks the user to pick from a numbered menu.
#[derive(Clone, Debug)]
pub struct HumanAgent {
    player: PlayerId,
    name: String,
}

impl HumanAgent {
    pub const DEFAULT_NAME: &'static str = "Human";

    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            name: Self::DEFAULT_NAME.to_string(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<G: Game> Agent<G> for HumanAgent {
    fn player(&self) -> PlayerId {
        self.player
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn choose_action(&mut self, game: &G) -> Result<Option<G::Action>> {
        let actions = game.actions();
        if actions.is_empty() {
            return Ok(None);
        }

        println!("\n{}", game);
        println!("\n{}, it's your turn!", self.name);

        let labels = actions
            .iter()
            .enumerate()
            .map(|(i, action)| format!("{}. {}", i + 1, action))
            .collect::<Vec<String>>();
        let selection = Select::new()
            .with_prompt("Choose your move")
            .items(labels.as_slice())
            .default(0)
            .interact()
            .map_err(|e| Error::Prompt {
                message: e.to_string(),
            })?;

        Ok(actions.into_iter().nth(selection))
    }
}
