//! Game configuration types.
//!
//! A `GameConfig` names one game variant together with its construction
//! parameters. Drivers hold it as a runtime value and `match` on it to build
//! the concrete game, since each game has its own action type.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::games::{ConnectFourGame, HalvingGame, NimGame};

/// Game variant plus construction parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "game", rename_all = "snake_case")]
pub enum GameConfig {
    /// Subtract-or-halve race from a positive starting number.
    Halving { starting_number: u32 },

    /// Classic 3×3 tic-tac-toe.
    TicTacToe,

    /// Normal-play nim. Non-positive pile sizes are discarded.
    Nim { piles: Vec<i64> },

    /// Connect four on a square board of side 4 or 5.
    ConnectFour { board_size: usize },
}

impl GameConfig {
    /// Halving game from `starting_number`.
    #[must_use]
    pub fn halving(starting_number: u32) -> Self {
        Self::Halving { starting_number }
    }

    /// Nim from the given pile sizes.
    #[must_use]
    pub fn nim(piles: impl Into<Vec<i64>>) -> Self {
        Self::Nim {
            piles: piles.into(),
        }
    }

    /// Connect four with the given board side.
    #[must_use]
    pub fn connect_four(board_size: usize) -> Self {
        Self::ConnectFour { board_size }
    }

    /// Default parameters for every variant, in menu order.
    #[must_use]
    pub fn defaults() -> [Self; 4] {
        [
            Self::halving(HalvingGame::DEFAULT_START),
            Self::TicTacToe,
            Self::nim(
                NimGame::DEFAULT_PILES
                    .iter()
                    .map(|&pile| i64::from(pile))
                    .collect::<Vec<_>>(),
            ),
            Self::connect_four(4),
        ]
    }

    /// Display name of the variant, matching `Game::name`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Halving { .. } => "Halving Game",
            Self::TicTacToe => "Tic-Tac-Toe",
            Self::Nim { .. } => "Nim",
            Self::ConnectFour { .. } => "Connect Four",
        }
    }

    /// Check the parameters without building the game.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Halving { starting_number } => HalvingGame::new(*starting_number).map(drop),
            Self::TicTacToe => Ok(()),
            Self::Nim { piles } => NimGame::new(piles).map(drop),
            Self::ConnectFour { board_size } => ConnectFourGame::new(*board_size).map(drop),
        }
    }

    /// Short description of the rules, shown by the interactive driver.
    #[must_use]
    pub fn rules(&self) -> &'static str {
        match self {
            Self::Halving { .. } => {
                "Players take turns either subtracting 1 from the number or halving it \
                 (rounding down). The player who brings the number to 0 wins."
            }
            Self::TicTacToe => {
                "Players take turns placing X or O on a 3x3 grid. \
                 Three in a row horizontally, vertically or diagonally wins."
            }
            Self::Nim { .. } => {
                "Players take turns removing one or more objects from a single pile. \
                 The player who takes the last object wins."
            }
            Self::ConnectFour { .. } => {
                "Players take turns dropping pieces into a column. \
                 Four in a row horizontally, vertically or diagonally wins."
            }
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::halving(HalvingGame::DEFAULT_START)
    }
}

impl std::fmt::Display for GameConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Halving { starting_number } => {
                write!(f, "{} (start {})", self.name(), starting_number)
            }
            Self::TicTacToe => write!(f, "{}", self.name()),
            Self::Nim { piles } => write!(f, "{} {:?}", self.name(), piles),
            Self::ConnectFour { board_size } => {
                write!(f, "{} ({}x{})", self.name(), board_size, board_size)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        for config in GameConfig::defaults() {
            assert!(config.validate().is_ok(), "{} should be valid", config);
        }
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(GameConfig::halving(0).validate().is_err());
        assert!(GameConfig::nim(vec![0, -2]).validate().is_err());
        assert!(GameConfig::connect_four(6).validate().is_err());
    }

    #[test]
    fn test_names() {
        let names: Vec<_> = GameConfig::defaults().iter().map(GameConfig::name).collect();
        assert_eq!(names, vec!["Halving Game", "Tic-Tac-Toe", "Nim", "Connect Four"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(GameConfig::halving(12).to_string(), "Halving Game (start 12)");
        assert_eq!(GameConfig::connect_four(5).to_string(), "Connect Four (5x5)");
        assert_eq!(GameConfig::nim(vec![1, 2]).to_string(), "Nim [1, 2]");
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::nim(vec![1, 3, 5]);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"game":"nim","piles":[1,3,5]}"#);

        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
