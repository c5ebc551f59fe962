//! Deterministic random number generation for deck shuffles.
//!
//! A session owns one `GameRng` seeded from its config. Every deal and
//! every restart forks a fresh stream from it, so a given seed always
//! replays the same sequence of boards while consecutive boards differ.
//!
//! ```
//! use memo_cards::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut first_deal = rng.fork();
//! let mut second_deal = rng.fork();
//!
//! let mut a: Vec<u32> = (0..16).collect();
//! let mut b = a.clone();
//! first_deal.shuffle(&mut a);
//! second_deal.shuffle(&mut b);
//! assert_ne!(a, b);
//! ```

use std::hash::Hasher;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;

/// Deterministic RNG with forking.
///
/// Uses ChaCha8; `shuffle` delegates to `rand`'s Fisher–Yates
/// implementation, which is unbiased given a uniform source.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// For hosts that don't care about replaying a board.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent, deterministic stream.
    ///
    /// Each call advances the fork counter, so successive forks differ.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Independent stream for a named purpose (e.g. "deck", "preview").
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        hasher.write_u64(self.seed);
        hasher.write(context.as_bytes());
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
            fork_counter: 0,
        }
    }

    /// Shuffle a slice in place (Fisher–Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut GameRng) -> Vec<u32> {
        let mut data: Vec<u32> = (0..32).collect();
        rng.shuffle(&mut data);
        data
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..20 {
            assert_eq!(shuffled(&mut rng1), shuffled(&mut rng2));
        }
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        assert_ne!(shuffled(&mut rng), shuffled(&mut forked));
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);

        for _ in 0..3 {
            assert_eq!(rng1.fork().seed(), rng2.fork().seed());
        }
    }

    #[test]
    fn test_context_streams() {
        let rng = GameRng::new(42);
        let mut deck = rng.for_context("deck");
        let mut other = rng.for_context("preview");
        let mut deck_again = rng.for_context("deck");

        let seq1 = shuffled(&mut deck);
        assert_ne!(seq1, shuffled(&mut other));
        assert_eq!(seq1, shuffled(&mut deck_again));
        assert_ne!(rng.for_context("deck").seed(), GameRng::new(43).for_context("deck").seed());
    }

    #[test]
    fn test_entropy_seeds_differ() {
        let seeds: Vec<u64> = (0..4).map(|_| GameRng::from_entropy().seed()).collect();
        assert!(seeds.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u32> = (1..=10).collect();
        let before = data.clone();

        rng.shuffle(&mut data);

        assert_ne!(data, before);
        data.sort_unstable();
        assert_eq!(data, before);
    }
}
