//! Pseudo-random number generator wrapper for Monte Carlo simulations.
//!
//! This module provides [`SimRng`], a seeded PRNG that remembers its seed.
//! Draws go through [`gum_core::Distribution::sample`], which is generic
//! over [`rand::Rng`].

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Monte Carlo simulation random number generator.
///
/// Implements [`RngCore`], so any `rand` distribution (and
/// [`gum_core::Distribution::sample`]) can draw from it directly.
///
/// # Examples
///
/// ```rust
/// use gum_core::Distribution;
/// use gum_engine::rng::SimRng;
///
/// let normal = Distribution::centered_scaled(1.0).unwrap();
/// let mut rng1 = SimRng::from_seed(42);
/// let mut rng2 = SimRng::from_seed(42);
/// assert_eq!(normal.sample(&mut rng1), normal.sample(&mut rng2));
/// assert_eq!(rng1.seed(), 42);
/// ```
#[derive(Debug, Clone)]
pub struct SimRng {
    inner: StdRng,
    seed: u64,
}

impl SimRng {
    /// Creates a generator initialised with `seed`.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for SimRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
