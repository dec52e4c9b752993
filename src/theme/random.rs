use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Source of randomness for centroid seeding.
///
/// Injected rather than global so a seed can be pinned in tests.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Uniform-ish value in `0..bound` (`bound` must be non-zero)
    fn next_below(&mut self, bound: usize) -> usize {
        ((self.next_u32() as u64 * bound as u64) >> 32) as usize
    }
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn next_u32(&mut self) -> u32 {
        RngCore::next_u32(self)
    }
}

/// Reproducible generator for a pinned seed
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator seeded from the operating system
pub fn from_entropy() -> StdRng {
    StdRng::from_entropy()
}
