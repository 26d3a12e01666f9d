use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the random deltas the ticker adds to the simulated P&L.
///
/// Implementations return a value uniformly distributed on
/// `[-width / 2, width / 2)`. A zero (or non-positive) width yields 0.
/// Tests plug in scripted sources to make ticks deterministic.
pub trait JitterSource: Send {
    fn sample(&mut self, width: f64) -> f64;
}

/// Uniform jitter backed by a standard RNG.
pub struct UniformJitter {
    rng: StdRng,
}

impl UniformJitter {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformJitter {
    fn default() -> Self {
        Self::new()
    }
}

impl JitterSource for UniformJitter {
    fn sample(&mut self, width: f64) -> f64 {
        // gen_range panics on an empty range
        if !(width.is_finite() && width > 0.0) {
            return 0.0;
        }
        let half = width / 2.0;
        self.rng.gen_range(-half..half)
    }
}
