//! Deterministic run-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! Every stochastic operation in the workspace — entity placement, column
//! seeding, mutation, parent sampling — draws from a single `RunRng` threaded
//! through the call chain.  Seeding it from an explicit `u64` makes whole
//! optimization runs reproducible; there is no ambient/global random state
//! anywhere in the `cg-*` crates.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for child-seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// The single logical random source for one optimization run.
///
/// Wraps a `SmallRng`; intentionally `!Sync` so it cannot be shared across
/// threads by accident.  Parallel population evaluation never needs
/// randomness — only the sequential selection/breeding phases do.
pub struct RunRng(SmallRng);

impl RunRng {
    /// Seed deterministically.  The same seed always produces the same run.
    pub fn new(seed: u64) -> Self {
        RunRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent child `RunRng` — useful when a demo wants one
    /// stream per driver without correlating their draws.
    pub fn child(&mut self, offset: u64) -> RunRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        RunRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.  Returns `None` when empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
