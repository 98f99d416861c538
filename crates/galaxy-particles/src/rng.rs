//! Seedable PRNG used by the generator

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Random source for particle generation.
///
/// Seed it for reproducible layouts (tests, `--seed`); otherwise it is
/// seeded from the OS.
pub struct GalaxyRng {
    inner: SmallRng,
}

impl GalaxyRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: SmallRng::from_entropy(),
        }
    }

    /// Returns a float in [0, 1)
    pub fn unit(&mut self) -> f32 {
        self.inner.gen::<f32>()
    }
}
