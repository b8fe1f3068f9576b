//! Seeded random number generation.
//!
//! A run owns exactly one generator, created once from the configured seed.
//! Operators borrow it; they never reseed.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
