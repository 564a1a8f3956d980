//! Tic-tac-toe on a 3×3 grid.
//!
//! First to three in a row (row, column or diagonal) wins; a full board
//! without a line is a draw. `PlayerId::First` plays X.

mod game;

pub use game::{Cell, TicTacToeGame};
