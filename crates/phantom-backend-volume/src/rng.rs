//! Deterministic RNG wrapper using PCG32.
//!
//! All phantom generation MUST draw randomness through [`RandomStream`] so
//! the draw order stays in one place and reference volumes stay reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// A seedable source of the three kinds of draws the ring painter makes.
///
/// The ring field draws, in order: pivot x, pivot y, the starting wood type,
/// then one `(width, color)` pair per ring. Any implementation fed through the
/// same generator sees exactly that sequence.
pub trait RandomStream {
    /// Uniform integer in `[0, bound)`. `bound` must be non-zero.
    fn below(&mut self, bound: u32) -> u32;

    /// Uniform integer in `[min, max]`. Requires `min <= max`.
    fn inclusive(&mut self, min: u32, max: u32) -> u32;

    /// Fair coin flip.
    fn coin(&mut self) -> bool;
}

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating the bits.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }
}

impl RandomStream for DeterministicRng {
    #[inline]
    fn below(&mut self, bound: u32) -> u32 {
        self.inner.gen_range(0..bound)
    }

    #[inline]
    fn inclusive(&mut self, min: u32, max: u32) -> u32 {
        self.inner.gen_range(min..=max)
    }

    #[inline]
    fn coin(&mut self) -> bool {
        self.inner.gen_range(0..2u32) == 0
    }
}
