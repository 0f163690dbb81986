//! A simple pseudorandom number generator.
//!
//! Specifically, the minimal C PCG32 recurrence from <https://www.pcg-random.org/> expressed against the [RngCore] trait.
//!
//! PCG(32) is the default source of (pseudo)random numbers as it is simple, fast, and has some nice supporting documentation.
//! Each [context](crate::context) stores a source of rng, fixed to [MinimalPCG32] in the concrete context, so a run is reproducible from its seed.
//! Revising or parameterising the context is all that's needed for a different source of rng.

use rand::SeedableRng;
use rand_core::{impls, Error, RngCore};

/// State and increment.
#[derive(Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = ((old_state >> 18) ^ old_state) >> 27;
        let rot = (old_state >> 59) as u32;
        (xorshifted as u32).rotate_right(rot)
    }

    // Two draws: uniform integer sampling consumes full u64s, and a half-empty
    // u64 collapses the widening-multiply range reduction to zero.
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        /// The default stream from the reference implementation.
        const INCREMENT: u64 = 1442695040888963407;
        Self {
            state: (u64::from_le_bytes(seed)).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut left = MinimalPCG32::from_seed(7_u64.to_le_bytes());
        let mut right = MinimalPCG32::from_seed(7_u64.to_le_bytes());

        for _ in 0..32 {
            assert_eq!(left.next_u32(), right.next_u32());
        }
    }

    #[test]
    fn u64_draws_use_the_full_width() {
        let mut rng = MinimalPCG32::from_seed(7_u64.to_le_bytes());

        let draws: Vec<u64> = (0..32).map(|_| rng.next_u64()).collect();
        assert!(draws.iter().any(|draw| *draw > u32::MAX as u64));
    }

    #[test]
    fn different_seeds_diverge() {
        let mut left = MinimalPCG32::from_seed(7_u64.to_le_bytes());
        let mut right = MinimalPCG32::from_seed(8_u64.to_le_bytes());

        let left_draws: Vec<u32> = (0..32).map(|_| left.next_u32()).collect();
        let right_draws: Vec<u32> = (0..32).map(|_| right.next_u32()).collect();

        assert_ne!(left_draws, right_draws);
    }
}
