//! # gum_engine: Monte Carlo Uncertainty Propagation (Layer 3)
//!
//! ## Layer 3 Role
//!
//! gum_engine turns a list of [`gum_core::UncertainQuantity`] descriptors into a
//! simulated population and extracts the expanded uncertainty from it, following
//! GUM Supplement 1:
//! - Seeded random number generation (`rng`)
//! - Parallel, reproducible sample generation (`mc`)
//! - Coverage interval, expanded uncertainty, histogram and summary (`stats`)
//!
//! ## Usage Example
//!
//! ```rust
//! use gum_core::{Distribution, UncertainQuantity};
//! use gum_engine::mc::MonteCarloSimulator;
//!
//! let quantities = vec![
//!     UncertainQuantity::exact(0.5),
//!     UncertainQuantity::error_term(Distribution::centered_scaled(0.001).unwrap()),
//! ];
//!
//! let result = MonteCarloSimulator::run(&quantities, 10_000, Some(42)).unwrap();
//! assert_eq!(result.point_estimate, 0.5);
//! assert_eq!(result.sample_population.len(), 10_000);
//! assert!(result.expanded_uncertainty > 0.0);
//! ```
//!
//! ## Concurrency
//!
//! Every sample is independent. The sample axis is split into fixed-size
//! blocks, each with its own generator derived from the base seed, so the
//! population is identical whether blocks run sequentially or on the rayon
//! pool, for any pool size.

#![warn(missing_docs)]

pub mod mc;
pub mod rng;
pub mod stats;

pub use mc::{MonteCarloSimulator, SimulationConfig, SimulationError, SimulationResult};
pub use stats::{CoverageInterval, PopulationSummary, UncertaintyStatistics};
