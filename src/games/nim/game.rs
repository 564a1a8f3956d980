//! Nim implementation.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;
use crate::error::{Error, Result};
use crate::rules::{Game, Outcome};

/// Remove `count` objects from pile `pile` (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NimMove {
    pub pile: usize,
    pub count: u32,
}

impl NimMove {
    #[must_use]
    pub const fn new(pile: usize, count: u32) -> Self {
        Self { pile, count }
    }
}

impl fmt::Display for NimMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.pile, self.count)
    }
}

/// Nim state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NimGame {
    piles: SmallVec<[u32; 8]>,
    to_move: PlayerId,
}

impl NimGame {
    pub const DEFAULT_PILES: [u32; 4] = [1, 3, 5, 7];

    /// Create a game from pile sizes.
    ///
    /// Non-positive sizes are dropped; if nothing is left the configuration
    /// is rejected.
    pub fn new(piles: &[i64]) -> Result<Self> {
        let piles: SmallVec<[u32; 8]> = piles
            .iter()
            .filter(|&&size| size > 0)
            .map(|&size| {
                u32::try_from(size).map_err(|_| {
                    Error::invalid_configuration(format!("pile size {} is too large", size))
                })
            })
            .collect::<Result<_>>()?;
        if piles.is_empty() {
            return Err(Error::invalid_configuration(
                "nim needs at least one non-empty pile",
            ));
        }
        Ok(Self {
            piles,
            to_move: PlayerId::First,
        })
    }

    #[must_use]
    pub fn piles(&self) -> &[u32] {
        &self.piles
    }

    /// Objects left on the table.
    #[must_use]
    pub fn total_objects(&self) -> u32 {
        self.piles.iter().sum()
    }

    /// XOR of all pile sizes. Zero means the player to move loses under
    /// optimal play.
    #[must_use]
    pub fn nim_sum(&self) -> u32 {
        self.piles.iter().fold(0, |acc, &pile| acc ^ pile)
    }
}

impl Default for NimGame {
    fn default() -> Self {
        Self {
            piles: SmallVec::from_slice(&Self::DEFAULT_PILES),
            to_move: PlayerId::First,
        }
    }
}

impl Game for NimGame {
    type Action = NimMove;

    fn name(&self) -> &'static str {
        "Nim"
    }

    fn current_player(&self) -> PlayerId {
        self.to_move
    }

    fn actions(&self) -> Vec<NimMove> {
        self.piles
            .iter()
            .enumerate()
            .flat_map(|(pile, &size)| (1..=size).map(move |count| NimMove::new(pile, count)))
            .collect()
    }

    fn next(&mut self, action: &NimMove) -> Result<()> {
        let size = *self
            .piles
            .get(action.pile)
            .ok_or_else(|| Error::invalid_action(action, "no such pile"))?;
        if action.count == 0 {
            return Err(Error::invalid_action(action, "must remove at least one object"));
        }
        if action.count > size {
            return Err(Error::invalid_action(
                action,
                format!("pile {} only holds {}", action.pile, size),
            ));
        }
        self.piles[action.pile] -= action.count;
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    fn outcome(&self) -> Outcome {
        if self.piles.iter().all(|&pile| pile == 0) {
            // Normal play: whoever took the last object wins.
            Outcome::Win(self.to_move.opponent())
        } else {
            Outcome::InProgress
        }
    }
}

impl fmt::Display for NimGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nim Game State:")?;
        for (i, &pile) in self.piles.iter().enumerate() {
            writeln!(f, "Pile {}: {} ({})", i + 1, "*".repeat(pile as usize), pile)?;
        }
        match self.outcome() {
            Outcome::Win(winner) => write!(f, "Game Over! Winner: {}", winner),
            _ => write!(f, "Current player: {}", self.to_move),
        }
    }
}
