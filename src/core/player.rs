//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! The two sides of a zero-sum game, carrying the signs `+1` and `-1` used by
//! utilities and board cells.
//!
//! ## PlayerMap
//!
//! Two-slot storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
///
/// `First` always moves first and is worth `+1`; `Second` is worth `-1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    First,
    Second,
}

impl PlayerId {
    /// Both players in turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::First, PlayerId::Second];

    /// Signed identifier: `+1` for `First`, `-1` for `Second`.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            PlayerId::First => 1,
            PlayerId::Second => -1,
        }
    }

    /// Parse a signed identifier. Anything other than `+1`/`-1` is rejected.
    #[must_use]
    pub const fn from_sign(sign: i8) -> Option<Self> {
        match sign {
            1 => Some(PlayerId::First),
            -1 => Some(PlayerId::Second),
            _ => None,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    /// Slot index (0 for `First`, 1 for `Second`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }

    /// Board symbol used by the grid games.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            PlayerId::First => 'X',
            PlayerId::Second => 'O',
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.sign())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_games::core::{PlayerId, PlayerMap};
///
/// let mut moves: PlayerMap<u32> = PlayerMap::with_value(0);
/// moves[PlayerId::Second] += 2;
/// assert_eq!(moves[PlayerId::First], 0);
/// assert_eq!(moves[PlayerId::Second], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::First), factory(PlayerId::Second)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }

    /// Consume the map into its two values, `First` then `Second`.
    pub fn into_inner(self) -> [T; 2] {
        self.data
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::First.sign(), 1);
        assert_eq!(PlayerId::Second.sign(), -1);
        assert_eq!(PlayerId::First.opponent(), PlayerId::Second);
        assert_eq!(PlayerId::Second.opponent(), PlayerId::First);
        assert_eq!(format!("{}", PlayerId::Second), "Player -1");
    }

    #[test]
    fn test_from_sign() {
        assert_eq!(PlayerId::from_sign(1), Some(PlayerId::First));
        assert_eq!(PlayerId::from_sign(-1), Some(PlayerId::Second));
        assert_eq!(PlayerId::from_sign(0), None);
        assert_eq!(PlayerId::from_sign(2), None);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.sign() as i32 * 10);
        assert_eq!(map[PlayerId::First], 10);
        assert_eq!(map[PlayerId::Second], -10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<f64> = PlayerMap::with_default();
        map[PlayerId::First] += 1.5;
        map[PlayerId::Second] += 0.25;
        assert_eq!(map.into_inner(), [1.5, 0.25]);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<&str> = PlayerMap::new(|p| match p {
            PlayerId::First => "a",
            PlayerId::Second => "b",
        });
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::First, &"a"), (PlayerId::Second, &"b")]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::new(|p| p.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
