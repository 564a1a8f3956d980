//! Deterministic random number generation for agents and simulations.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Seed drawing**: A master generator hands out child seeds in order
//!
//! Every agent owns its own `GameRng`; nothing in the crate touches a global
//! generator.
//!
//! ```
//! use rust_games::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! let items = [1, 2, 3, 4, 5];
//! assert_eq!(a.choose(&items), b.choose(&items));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::RangeInclusive;

/// Deterministic seeded RNG.
///
/// Uses ChaCha8 for speed while keeping stream quality high.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random u32 in the given inclusive range.
    pub fn gen_range_u32(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Draw a seed for a child agent, in `1..=1_000_000`.
    pub fn gen_seed(&mut self) -> u64 {
        self.inner.gen_range(1..=1_000_000)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_u32(0..=999), rng2.gen_range_u32(0..=999));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_u32(0..=999)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_u32(0..=999)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_seed_drawing_is_deterministic() {
        let mut master1 = GameRng::new(42);
        let mut master2 = GameRng::new(42);

        let seeds1: Vec<_> = (0..20).map(|_| master1.gen_seed()).collect();
        let seeds2: Vec<_> = (0..20).map(|_| master2.gen_seed()).collect();

        assert_eq!(seeds1, seeds2);
        assert_eq!(master1.seed(), 42);
    }

    #[test]
    fn test_gen_range_u32_inclusive() {
        let mut rng = GameRng::new(7);
        for _ in 0..200 {
            let n = rng.gen_range_u32(10..=20);
            assert!((10..=20).contains(&n));
        }
        assert_eq!(rng.gen_range_u32(5..=5), 5);
    }

    #[test]
    fn test_gen_seed_range() {
        let mut rng = GameRng::new(3);
        for _ in 0..100 {
            let seed = rng.gen_seed();
            assert!((1..=1_000_000).contains(&seed));
        }
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some());
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }
}
