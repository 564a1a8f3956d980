//! Connect four on a 4×4 or 5×5 board.
//!
//! - Pieces dropped into a column fall to the lowest empty cell
//! - Four in a row horizontally, vertically or diagonally wins
//! - A full board without a line is a draw

mod game;

pub use game::ConnectFourGame;
