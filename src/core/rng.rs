//! Deterministic random number generation with forking for rollouts.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Create independent branches for each rollout
//! - **Derivable streams**: `derive(i)` gives the i-th stream of a seed
//!   without advancing the parent, so parallel workers get
//!   uncorrelated, reproducible sequences regardless of scheduling
//!
//! ## Rollout Usage
//!
//! ```
//! use pente::core::GameRng;
//!
//! let base = GameRng::new(42);
//!
//! // One stream per candidate action
//! let mut action_rng = base.derive(3);
//!
//! // One fork per rollout of that action
//! let mut rollout_rng = action_rng.fork();
//!
//! // Streams are reproducible
//! let mut again = GameRng::new(42).derive(3);
//! assert_eq!(action_rng.seed(), again.seed());
//! # let _ = (rollout_rng.gen_range_usize(0..10), again.fork());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic RNG with forking for rollout simulations.
///
/// Uses ChaCha8 for speed while keeping streams statistically independent.
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

    /// Create an RNG seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        Self::new(mix(self.seed, self.fork_counter))
    }

    /// The `stream`-th independent sub-stream of this RNG's seed.
    ///
    /// Unlike [`fork`](Self::fork) this does not mutate `self`, so it can
    /// be called from many threads on a shared base RNG.
    #[must_use]
    pub fn derive(&self, stream: u64) -> Self {
        Self::new(mix(self.seed ^ GOLDEN_GAMMA.rotate_left(17), stream.wrapping_add(1)))
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

/// SplitMix64 finaliser over `seed + counter * gamma`.
fn mix(seed: u64, counter: u64) -> u64 {
    let mut z = seed.wrapping_add(counter.wrapping_mul(GOLDEN_GAMMA));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
