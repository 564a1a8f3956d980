//! Concrete games implementing the `Game` contract.
//!
//! - `halving`: subtract-or-halve counter race
//! - `tictactoe`: 3×3 alignment
//! - `nim`: multi-pile removal, normal play
//! - `connect_four`: gravity-drop alignment on 4×4 or 5×5

pub mod connect_four;
pub mod grid;
pub mod halving;
pub mod nim;
pub mod tictactoe;

pub use connect_four::ConnectFourGame;
pub use grid::Grid;
pub use halving::{HalvingGame, HalvingMove};
pub use nim::{NimGame, NimMove};
pub use tictactoe::{Cell, TicTacToeGame};
