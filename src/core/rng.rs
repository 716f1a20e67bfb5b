//! Seedable random number generation for shuffles and draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Serializable**: O(1) state capture and restore
//! - **Non-destructive**: Shuffles operate on a copy, never the caller's sequence
//!
//! ```
//! use tarot::core::ReadingRng;
//!
//! let mut a = ReadingRng::new(42);
//! let mut b = ReadingRng::new(42);
//!
//! let items: im::Vector<u32> = (0..10).collect();
//! assert_eq!(a.shuffled(&items), b.shuffled(&items));
//! ```

use im::Vector;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded RNG backing every shuffle and draw of an engine.
///
/// Uses ChaCha8 for speed. Randomness quality is statistical only; no
/// cryptographic guarantees are made about draws.
#[derive(Clone, Debug)]
pub struct ReadingRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ReadingRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in `[0, upper]`.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..=upper)
    }

    /// Return a uniformly random permutation of `items`.
    ///
    /// Fisher-Yates over a copy: for `i` from the last index down to 1,
    /// pick `j` in `[0, i]` and swap. The input is left untouched.
    #[must_use]
    pub fn shuffled<T: Clone>(&mut self, items: &Vector<T>) -> Vector<T> {
        let mut copy = items.clone();
        for i in (1..copy.len()).rev() {
            let j = self.gen_index(i);
            copy.swap(i, j);
        }
        copy
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> ReadingRngState {
        ReadingRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &ReadingRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position so capture is O(1) regardless of how many
/// shuffles have run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
