//! Halving game implementation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::error::{Error, Result};
use crate::rules::{Game, Outcome};

/// A move in the halving game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HalvingMove {
    /// Decrease the number by one.
    Subtract,
    /// Floor-divide the number by two.
    Halve,
}

impl HalvingMove {
    /// Both moves, in the order `actions()` lists them.
    pub const ALL: [HalvingMove; 2] = [HalvingMove::Subtract, HalvingMove::Halve];

    /// Result of this move on `number`. Zero stays at zero.
    #[must_use]
    pub fn apply(self, number: u32) -> u32 {
        match self {
            HalvingMove::Subtract => number.saturating_sub(1),
            HalvingMove::Halve => number / 2,
        }
    }
}

impl fmt::Display for HalvingMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalvingMove::Subtract => write!(f, "subtract"),
            HalvingMove::Halve => write!(f, "halve"),
        }
    }
}

impl FromStr for HalvingMove {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "subtract" => Ok(HalvingMove::Subtract),
            "halve" => Ok(HalvingMove::Halve),
            other => Err(Error::invalid_action(other, "expected 'subtract' or 'halve'")),
        }
    }
}

/// Halving game state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HalvingGame {
    starting_number: u32,
    number: u32,
    to_move: PlayerId,
}

impl HalvingGame {
    pub const DEFAULT_START: u32 = 15;

    /// Create a game starting from `starting_number`, which must be positive.
    pub fn new(starting_number: u32) -> Result<Self> {
        if starting_number == 0 {
            return Err(Error::invalid_configuration(
                "halving game needs a positive starting number",
            ));
        }
        Ok(Self {
            starting_number,
            number: starting_number,
            to_move: PlayerId::First,
        })
    }

    /// The current number.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn starting_number(&self) -> u32 {
        self.starting_number
    }
}

impl Default for HalvingGame {
    fn default() -> Self {
        Self {
            starting_number: Self::DEFAULT_START,
            number: Self::DEFAULT_START,
            to_move: PlayerId::First,
        }
    }
}

impl Game for HalvingGame {
    type Action = HalvingMove;

    fn name(&self) -> &'static str {
        "Halving Game"
    }

    fn current_player(&self) -> PlayerId {
        self.to_move
    }

    fn actions(&self) -> Vec<HalvingMove> {
        if self.is_terminal() {
            return vec![];
        }
        HalvingMove::ALL.to_vec()
    }

    fn next(&mut self, action: &HalvingMove) -> Result<()> {
        if self.is_terminal() {
            return Err(Error::invalid_action(action, "the number is already 0"));
        }
        self.number = action.apply(self.number);
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    fn outcome(&self) -> Outcome {
        if self.number == 0 {
            // The player who just moved reached zero.
            Outcome::Win(self.to_move.opponent())
        } else {
            Outcome::InProgress
        }
    }

    fn parameter(&self) -> Option<u32> {
        Some(self.starting_number)
    }
}

impl fmt::Display for HalvingGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome() {
            Outcome::Win(winner) => {
                write!(f, "Game Over! Number: {}, {} wins!", self.number, winner)
            }
            _ => write!(f, "Number: {}, {}'s turn", self.number, self.to_move),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::GameResult;

    #[test]
    fn test_game_creation() {
        let game = HalvingGame::default();
        assert_eq!(game.number(), 15);
        assert_eq!(game.current_player(), PlayerId::First);
        assert_eq!(game.parameter(), Some(15));
        assert!(!game.is_terminal());
    }

    #[test]
    fn test_zero_start_rejected() {
        assert!(matches!(
            HalvingGame::new(0),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_legal_actions() {
        let game = HalvingGame::new(7).unwrap();
        assert_eq!(game.actions(), vec![HalvingMove::Subtract, HalvingMove::Halve]);
    }

    #[test]
    fn test_apply_at_zero_stays_zero() {
        assert_eq!(HalvingMove::Subtract.apply(0), 0);
        assert_eq!(HalvingMove::Halve.apply(0), 0);
        assert_eq!(HalvingMove::Subtract.apply(5), 4);
        assert_eq!(HalvingMove::Halve.apply(5), 2);
    }

    #[test]
    fn test_moves_flip_player() {
        let mut game = HalvingGame::new(9).unwrap();

        game.next(&HalvingMove::Halve).unwrap();
        assert_eq!(game.number(), 4);
        assert_eq!(game.current_player(), PlayerId::Second);

        game.next(&HalvingMove::Subtract).unwrap();
        assert_eq!(game.number(), 3);
        assert_eq!(game.current_player(), PlayerId::First);
    }

    #[test]
    fn test_mover_reaching_zero_wins() {
        let mut game = HalvingGame::new(1).unwrap();
        game.next(&HalvingMove::Halve).unwrap();

        assert!(game.is_terminal());
        assert!(game.actions().is_empty());
        assert_eq!(game.winner(), Some(GameResult::Winner(PlayerId::First)));
        assert_eq!(game.utility().unwrap(), 1.0);
    }

    #[test]
    fn test_second_player_can_win() {
        let mut game = HalvingGame::new(2).unwrap();
        game.next(&HalvingMove::Subtract).unwrap();
        game.next(&HalvingMove::Subtract).unwrap();

        assert_eq!(game.winner(), Some(GameResult::Winner(PlayerId::Second)));
        assert_eq!(game.utility().unwrap(), -1.0);
    }

    #[test]
    fn test_move_after_end_rejected() {
        let mut game = HalvingGame::new(1).unwrap();
        game.next(&HalvingMove::Subtract).unwrap();
        let before = game.clone();

        assert!(matches!(
            game.next(&HalvingMove::Subtract),
            Err(Error::InvalidAction { .. })
        ));
        assert_eq!(game, before);
    }

    #[test]
    fn test_utility_before_end() {
        let game = HalvingGame::default();
        assert!(matches!(game.utility(), Err(Error::NotTerminal)));
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_parse_moves() {
        assert_eq!("subtract".parse::<HalvingMove>().unwrap(), HalvingMove::Subtract);
        assert_eq!(" halve ".parse::<HalvingMove>().unwrap(), HalvingMove::Halve);
        assert!(matches!(
            "double".parse::<HalvingMove>(),
            Err(Error::InvalidAction { .. })
        ));
    }

    #[test]
    fn test_display() {
        let mut game = HalvingGame::new(1).unwrap();
        assert_eq!(game.to_string(), "Number: 1, Player 1's turn");
        game.next(&HalvingMove::Subtract).unwrap();
        assert_eq!(game.to_string(), "Game Over! Number: 0, Player 1 wins!");
    }
}
