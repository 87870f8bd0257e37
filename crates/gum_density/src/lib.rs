//! # gum_density: Density Reading Uncertainty
//!
//! Orchestrates one uncertainty estimate for a density reading:
//!
//! ```text
//! DensityUncertaintyRequest ──validate──▶ DensityInputs
//!        (raw text / numbers)                 │
//!                                             ▼ contributors
//!            measured ⊕ calibration ⊕ resolution ⊕ drift
//!                                             │
//!                                             ▼ MonteCarloSimulator
//!                                      DensityEstimate
//!                                             │
//!                     ┌───────────────────────┴───────────────┐
//!                     ▼                                       ▼
//!           DensityUncertaintyResult                DensityUncertaintyReport
//!   {valor_medido, incertidumbre_expandida,        (+ interval, summary, bins)
//!    histograma_data}
//! ```
//!
//! Validation happens before any sampling: a rejected request never reaches
//! the engine.
//!
//! ## Usage Example
//!
//! ```rust
//! use gum_core::UncertaintyConfig;
//! use gum_density::{DensityInputs, DensityUncertaintyEstimator};
//!
//! let config = UncertaintyConfig::default().with_sample_count(20_000).with_seed(1);
//! let estimator = DensityUncertaintyEstimator::new(config).unwrap();
//!
//! let inputs = DensityInputs::new(0.5, 0.002, 0.0001, 0.0001).unwrap();
//! let result = estimator.estimate(&inputs).unwrap().to_result();
//!
//! assert_eq!(result.measured_value, 0.5);
//! assert!(result.expanded_uncertainty > 1e-3 && result.expanded_uncertainty < 1e-2);
//! assert_eq!(result.histogram_data.len(), 20_000);
//! ```

#![warn(missing_docs)]

pub mod contributors;
pub mod estimator;
pub mod request;
pub mod response;

pub use estimator::{DensityEstimate, DensityUncertaintyEstimator};
pub use request::{DensityInputs, DensityUncertaintyRequest, RawField, MAX_INPUT_MAGNITUDE};
pub use response::{DensityUncertaintyReport, DensityUncertaintyResult, ErrorResponse, HistogramBin};
