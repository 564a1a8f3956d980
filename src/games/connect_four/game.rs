//! Connect four implementation.

use std::fmt;

use crate::core::PlayerId;
use crate::error::{Error, Result};
use crate::games::grid::Grid;
use crate::rules::{Game, Outcome};

const LINE: usize = 4;

/// Connect four state. Row 0 is the top of the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConnectFourGame {
    board: Grid,
    to_move: PlayerId,
}

impl ConnectFourGame {
    pub const SUPPORTED_SIZES: [usize; 2] = [4, 5];

    /// Create an empty board. Only sizes 4 and 5 are supported.
    pub fn new(board_size: usize) -> Result<Self> {
        if !Self::SUPPORTED_SIZES.contains(&board_size) {
            return Err(Error::invalid_configuration(format!(
                "board size must be 4 or 5, got {}",
                board_size
            )));
        }
        Ok(Self {
            board: Grid::new(board_size),
            to_move: PlayerId::First,
        })
    }

    /// Drop pieces into the given columns from the start position.
    pub fn from_moves(board_size: usize, columns: &[usize]) -> Result<Self> {
        let mut game = Self::new(board_size)?;
        for column in columns {
            game.next(column)?;
        }
        Ok(game)
    }

    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    #[must_use]
    pub fn board(&self) -> &Grid {
        &self.board
    }

    /// Row a piece dropped into `column` would land on.
    #[must_use]
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        (0..self.board.size())
            .rev()
            .find(|&row| self.board.is_empty_at(row, column))
    }
}

impl Default for ConnectFourGame {
    fn default() -> Self {
        Self {
            board: Grid::new(4),
            to_move: PlayerId::First,
        }
    }
}

impl Game for ConnectFourGame {
    type Action = usize;

    fn name(&self) -> &'static str {
        "Connect Four"
    }

    fn current_player(&self) -> PlayerId {
        self.to_move
    }

    fn actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return vec![];
        }
        (0..self.board.size())
            .filter(|&column| self.board.is_empty_at(0, column))
            .collect()
    }

    fn next(&mut self, action: &usize) -> Result<()> {
        let column = *action;
        if column >= self.board.size() {
            return Err(Error::invalid_action(
                column,
                format!("column must be 0 to {}", self.board.size() - 1),
            ));
        }
        let row = self
            .landing_row(column)
            .ok_or_else(|| Error::invalid_action(column, "column is full"))?;
        if self.is_terminal() {
            return Err(Error::invalid_action(column, "the game is over"));
        }
        self.board.place(row, column, self.to_move);
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    fn outcome(&self) -> Outcome {
        match self.board.line_owner(LINE) {
            Some(winner) => Outcome::Win(winner),
            None if self.board.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }
}

impl fmt::Display for ConnectFourGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.board.size();
        let header: Vec<String> = (0..size).map(|col| col.to_string()).collect();
        let header = format!(" {}", header.join(" "));
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", "-".repeat(header.len()))?;
        for row in 0..size {
            let cells: Vec<String> = (0..size)
                .map(|col| self.board.occupant(row, col).map_or('.', PlayerId::symbol).to_string())
                .collect();
            writeln!(f, "|{}|", cells.join("|"))?;
        }
        writeln!(f)?;
        match self.outcome() {
            Outcome::Win(winner) => write!(f, "Game Over! {} ({}) wins!", winner, winner.symbol()),
            Outcome::Draw => write!(f, "Game Over! It's a draw!"),
            Outcome::InProgress => write!(
                f,
                "{}'s turn ({})\nEnter column (0-{}) to drop your piece:",
                self.to_move,
                self.to_move.symbol(),
                size - 1
            ),
        }
    }
}
