//! Tic-tac-toe implementation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::error::{Error, Result};
use crate::games::grid::Grid;
use crate::rules::{Game, Outcome};

const SIZE: usize = 3;

/// A board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Tic-tac-toe state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TicTacToeGame {
    board: Grid,
    to_move: PlayerId,
}

impl TicTacToeGame {
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Grid::new(SIZE),
            to_move: PlayerId::First,
        }
    }

    /// Play a sequence of cells from the start position.
    pub fn from_moves(cells: &[(usize, usize)]) -> Result<Self> {
        let mut game = Self::new();
        for &(row, col) in cells {
            game.next(&Cell::new(row, col))?;
        }
        Ok(game)
    }

    #[must_use]
    pub fn board(&self) -> &Grid {
        &self.board
    }
}

impl Default for TicTacToeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for TicTacToeGame {
    type Action = Cell;

    fn name(&self) -> &'static str {
        "Tic-Tac-Toe"
    }

    fn current_player(&self) -> PlayerId {
        self.to_move
    }

    fn actions(&self) -> Vec<Cell> {
        if self.is_terminal() {
            return vec![];
        }
        self.board
            .empty_cells()
            .map(|(row, col)| Cell::new(row, col))
            .collect()
    }

    fn next(&mut self, action: &Cell) -> Result<()> {
        if !self.board.contains(action.row, action.col) {
            return Err(Error::invalid_action(action, "cell is off the board"));
        }
        if !self.board.is_empty_at(action.row, action.col) {
            return Err(Error::invalid_action(action, "cell is already occupied"));
        }
        if self.is_terminal() {
            return Err(Error::invalid_action(action, "the game is over"));
        }
        self.board.place(action.row, action.col, self.to_move);
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    fn outcome(&self) -> Outcome {
        match self.board.line_owner(SIZE) {
            Some(winner) => Outcome::Win(winner),
            None if self.board.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }
}

impl fmt::Display for TicTacToeGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            let cells: Vec<String> = (0..SIZE)
                .map(|col| {
                    let symbol = self.board.occupant(row, col).map_or(' ', PlayerId::symbol);
                    format!(" {} ", symbol)
                })
                .collect();
            writeln!(f, "{}", cells.join("|"))?;
            if row + 1 < SIZE {
                writeln!(f, "-----------")?;
            }
        }
        writeln!(f)?;
        match self.outcome() {
            Outcome::Win(winner) => write!(f, "Game Over! {} ({}) wins!", winner, winner.symbol()),
            Outcome::Draw => write!(f, "Game Over! It's a draw!"),
            Outcome::InProgress => write!(f, "{}'s turn ({})", self.to_move, self.to_move.symbol()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::GameResult;

    #[test]
    fn test_game_creation() {
        let game = TicTacToeGame::new();
        assert_eq!(game.current_player(), PlayerId::First);
        assert_eq!(game.actions().len(), 9);
        assert_eq!(game.actions()[0], Cell::new(0, 0));
        assert_eq!(game.actions()[8], Cell::new(2, 2));
    }

    #[test]
    fn test_place_flips_player() {
        let mut game = TicTacToeGame::new();
        game.next(&Cell::new(1, 1)).unwrap();

        assert_eq!(game.board().occupant(1, 1), Some(PlayerId::First));
        assert_eq!(game.current_player(), PlayerId::Second);
        assert!(!game.actions().contains(&Cell::new(1, 1)));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = TicTacToeGame::from_moves(&[(0, 0)]).unwrap();
        let before = game.clone();

        let err = game.next(&Cell::new(0, 0)).unwrap_err();
        assert!(matches!(err, Error::InvalidAction { .. }));
        assert_eq!(game, before);
    }

    #[test]
    fn test_off_board_rejected() {
        let mut game = TicTacToeGame::new();
        assert!(matches!(
            game.next(&Cell::new(3, 0)),
            Err(Error::InvalidAction { .. })
        ));
    }

    #[test]
    fn test_row_win() {
        // X: top row, O: middle row (two cells)
        let game = TicTacToeGame::from_moves(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]).unwrap();

        assert!(game.is_terminal());
        assert!(game.actions().is_empty());
        assert_eq!(game.winner(), Some(GameResult::Winner(PlayerId::First)));
        assert_eq!(game.utility().unwrap(), 1.0);
    }

    #[test]
    fn test_second_player_diagonal_win() {
        let game =
            TicTacToeGame::from_moves(&[(0, 1), (0, 0), (0, 2), (1, 1), (1, 0), (2, 2)]).unwrap();
        assert_eq!(game.winner(), Some(GameResult::Winner(PlayerId::Second)));
        assert_eq!(game.utility().unwrap(), -1.0);
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut game =
            TicTacToeGame::from_moves(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]).unwrap();
        assert!(matches!(
            game.next(&Cell::new(2, 2)),
            Err(Error::InvalidAction { .. })
        ));
    }

    #[test]
    fn test_draw() {
        // X O X / X O O / O X X
        let game = TicTacToeGame::from_moves(&[
            (0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2),
        ])
        .unwrap();

        assert!(game.is_terminal());
        assert_eq!(game.winner(), Some(GameResult::Draw));
        assert_eq!(game.utility().unwrap(), 0.0);
    }

    #[test]
    fn test_display() {
        let game = TicTacToeGame::from_moves(&[(0, 0), (1, 1)]).unwrap();
        let text = game.to_string();
        assert!(text.starts_with(" X |   |   \n-----------\n   | O |   \n"));
        assert!(text.ends_with("Player 1's turn (X)"));
    }
}
