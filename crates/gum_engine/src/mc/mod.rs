//! Monte Carlo propagation of uncertain quantities.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloSimulator
//! ├── SimulationConfig   (sample count, confidence, seed, parallel)
//! ├── SimRng per block   (seed derived from base seed + block index)
//! └── simulate()
//!     ├── flatten quantities into independent terms
//!     ├── fill population block by block (rayon or sequential)
//!     └── UncertaintyStatistics::coverage_interval()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use gum_core::{Distribution, UncertainQuantity};
//! use gum_engine::mc::{MonteCarloSimulator, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .sample_count(50_000)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//! let simulator = MonteCarloSimulator::new(config).unwrap();
//!
//! let quantities = vec![
//!     UncertainQuantity::exact(1.0),
//!     UncertainQuantity::error_term(Distribution::uniform_symmetric(0.0, 0.1).unwrap()),
//! ];
//! let result = simulator.simulate(&quantities).unwrap();
//!
//! // 95 % of a U(-0.1, 0.1) lies within ±0.095.
//! assert!((result.expanded_uncertainty - 0.095).abs() < 2e-3);
//! ```

pub mod config;
pub mod error;
pub mod result;
pub mod simulator;

pub use config::{SimulationConfig, SimulationConfigBuilder, BLOCK_SIZE};
pub use error::SimulationError;
pub use result::SimulationResult;
pub use simulator::MonteCarloSimulator;
