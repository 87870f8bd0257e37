//! # Random Number Generation Infrastructure
//!
//! This module provides the random number generation used by the Monte Carlo
//! engine.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator is seeded; identical seeds yield identical streams
//! - **Independence**: parallel blocks draw from generators whose seeds are derived,
//!   not shared, so no generator state crosses threads
//!
//! ## Module Structure
//!
//! - [`prng`]: Seeded PRNG wrapper ([`SimRng`])
//! - [`seed`]: Seed derivation for sample blocks and fresh-entropy seeds
//!
//! ## Usage Example
//!
//! ```rust
//! use gum_core::Distribution;
//! use gum_engine::rng::{derive_block_seed, SimRng};
//!
//! let mut rng = SimRng::from_seed(derive_block_seed(12345, 0));
//!
//! let resolution = Distribution::uniform_symmetric(0.0, 0.5).unwrap();
//! let buffer: Vec<f64> = (0..1000).map(|_| resolution.sample(&mut rng)).collect();
//! assert!(buffer.iter().all(|x| (-0.5..=0.5).contains(x)));
//! ```

pub mod prng;
pub mod seed;

pub use prng::SimRng;
pub use seed::{derive_block_seed, entropy_seed, splitmix64};
