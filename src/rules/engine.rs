//! Game trait for game implementations.
//!
//! Games implement `Game` to define their rules:
//! - What actions are legal
//! - How actions modify state
//! - Win/loss conditions

use std::fmt::{Debug, Display};

use crate::core::PlayerId;
use crate::error::{Error, Result};

/// Classification of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Moves remain.
    InProgress,
    /// The game ended with a winner.
    Win(PlayerId),
    /// The game ended without a winner.
    Draw,
}

impl Outcome {
    /// The finished result, or `None` while in progress.
    #[must_use]
    pub fn result(self) -> Option<GameResult> {
        match self {
            Outcome::InProgress => None,
            Outcome::Win(player) => Some(GameResult::Winner(player)),
            Outcome::Draw => Some(GameResult::Draw),
        }
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Winner code used in simulation records: `1`, `-1`, or `0` for a draw.
    #[must_use]
    pub fn code(&self) -> i8 {
        match self {
            GameResult::Winner(player) => player.sign(),
            GameResult::Draw => 0,
        }
    }

    /// Signed utility from `PlayerId::First`'s point of view.
    #[must_use]
    pub fn utility(&self) -> f64 {
        f64::from(self.code())
    }
}

/// Game trait.
///
/// A value implementing `Game` is one position of a two-player, zero-sum,
/// perfect-information game together with the player to move. `Clone` is
/// the copy operation: clones share nothing mutable with the original.
///
/// ## Implementation Notes
///
/// - `actions`: empty if and only if the position is terminal; the order
///   must be stable for a given position
/// - `next`: must reject illegal actions without modifying `self`, and must
///   flip `current_player` on success
/// - `outcome`: `InProgress` until no more moves are possible
pub trait Game: Clone + Display {
    /// A move in this game.
    type Action: Clone + Debug + Display + PartialEq;

    /// Name used in logs and simulation records.
    fn name(&self) -> &'static str;

    /// The player to move.
    fn current_player(&self) -> PlayerId;

    /// All legal actions in the current position.
    fn actions(&self) -> Vec<Self::Action>;

    /// Apply an action in place.
    ///
    /// Returns `Error::InvalidAction` if the action is not legal here.
    fn next(&mut self, action: &Self::Action) -> Result<()>;

    /// Classify the current position.
    fn outcome(&self) -> Outcome;

    /// Construction parameter worth recording, if any.
    fn parameter(&self) -> Option<u32> {
        None
    }

    // === Convenience Methods ===

    /// Check if the game is over.
    fn is_terminal(&self) -> bool {
        self.outcome() != Outcome::InProgress
    }

    /// The position after `action`, leaving `self` untouched.
    fn successor(&self, action: &Self::Action) -> Result<Self> {
        let mut next = self.clone();
        next.next(action)?;
        Ok(next)
    }

    /// Signed utility of a terminal position: `1.0`, `-1.0`, or `0.0`.
    fn utility(&self) -> Result<f64> {
        self.winner()
            .map(|result| result.utility())
            .ok_or(Error::NotTerminal)
    }

    /// The finished result, `None` while the game continues.
    fn winner(&self) -> Option<GameResult> {
        self.outcome().result()
    }
}
