//! # gum_core: Foundation Types for Measurement Uncertainty Propagation
//!
//! ## Layer 1 (Foundation) Role
//!
//! gum_core is the bottom layer of the workspace and provides:
//! - Random-variable models for error contributors (`distribution`)
//! - Value-plus-distribution pairing and composition (`quantity`)
//! - Propagation parameters: coverage factor, confidence, sample count (`config`)
//! - Error taxonomy shared by every layer (`types::error`)
//!
//! Nothing here runs a simulation. Composition of quantities only records the
//! independent terms; their convolution is realised empirically by the
//! Monte Carlo engine in `gum_engine`.
//!
//! ## Usage Example
//!
//! ```rust
//! use gum_core::{Distribution, UncertainQuantity};
//!
//! let measured = UncertainQuantity::exact(0.5);
//! let calibration =
//!     UncertainQuantity::error_term(Distribution::centered_scaled(0.001).unwrap());
//! let resolution =
//!     UncertainQuantity::error_term(Distribution::uniform_symmetric(0.0, 5e-5).unwrap());
//!
//! let composite = measured.combine(&calibration).combine(&resolution);
//! assert_eq!(composite.nominal_value(), 0.5);
//! assert_eq!(composite.terms().len(), 3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod distribution;
pub mod quantity;
pub mod types;

pub use config::{UncertaintyConfig, MAX_SAMPLES};
pub use distribution::Distribution;
pub use quantity::UncertainQuantity;
pub use types::{InputField, UncertaintyError};
