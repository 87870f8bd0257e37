//! Propagation parameters.
//!
//! The coverage factor and the confidence level are fixed by the density
//! contract (k = 2, 95 %). They live here, next to the sample count, so
//! callers pass them explicitly instead of relying on literals buried in the
//! computation.

use serde::{Deserialize, Serialize};

use crate::types::UncertaintyError;

/// Maximum number of Monte Carlo samples allowed per run.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Default coverage factor applied to the calibration limit.
pub const DEFAULT_COVERAGE_FACTOR: f64 = 2.0;

/// Default two-sided coverage probability.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Default Monte Carlo sample count.
pub const DEFAULT_SAMPLE_COUNT: usize = 100_000;

/// Default number of histogram bins for summarised output.
pub const DEFAULT_HISTOGRAM_BINS: usize = 50;

/// Parameters of one uncertainty estimation.
///
/// Deserialises from a TOML or JSON table; unspecified fields take their
/// defaults.
///
/// # Examples
///
/// ```rust
/// use gum_core::UncertaintyConfig;
///
/// let config = UncertaintyConfig::default();
/// assert_eq!(config.coverage_factor, 2.0);
/// assert_eq!(config.confidence, 0.95);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UncertaintyConfig {
    /// Coverage factor `k` dividing the calibration limit.
    pub coverage_factor: f64,
    /// Two-sided coverage probability in (0, 1).
    pub confidence: f64,
    /// Number of Monte Carlo samples.
    pub sample_count: usize,
    /// Optional base seed for reproducible runs.
    pub seed: Option<u64>,
    /// Bin count for summarised histograms.
    pub histogram_bins: usize,
    /// Whether sample generation runs on the rayon thread pool.
    pub parallel: bool,
}

impl Default for UncertaintyConfig {
    fn default() -> Self {
        Self {
            coverage_factor: DEFAULT_COVERAGE_FACTOR,
            confidence: DEFAULT_CONFIDENCE,
            sample_count: DEFAULT_SAMPLE_COUNT,
            seed: None,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            parallel: true,
        }
    }
}

impl UncertaintyConfig {
    /// Sets the sample count.
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Sets the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates every parameter.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - `coverage_factor` is not a positive finite number
    /// - `confidence` is outside (0, 1)
    /// - `sample_count` is 0 or greater than [`MAX_SAMPLES`]
    /// - `histogram_bins` is 0
    pub fn validate(&self) -> Result<(), UncertaintyError> {
        if !self.coverage_factor.is_finite() || self.coverage_factor <= 0.0 {
            return Err(UncertaintyError::invalid_parameter(
                "coverage_factor",
                format!("must be positive, got {}", self.coverage_factor),
            ));
        }
        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            return Err(UncertaintyError::invalid_parameter(
                "confidence",
                format!("must be in (0, 1), got {}", self.confidence),
            ));
        }
        if self.sample_count == 0 || self.sample_count > MAX_SAMPLES {
            return Err(UncertaintyError::invalid_parameter(
                "sample_count",
                format!(
                    "must be in range [1, {}], got {}",
                    MAX_SAMPLES, self.sample_count
                ),
            ));
        }
        if self.histogram_bins == 0 {
            return Err(UncertaintyError::invalid_parameter(
                "histogram_bins",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UncertaintyConfig::default();
        assert_eq!(config.coverage_factor, 2.0);
        assert_eq!(config.confidence, 0.95);
        assert_eq!(config.sample_count, 100_000);
        assert_eq!(config.seed, None);
        assert_eq!(config.histogram_bins, 50);
        assert!(config.parallel);
    }

    #[test]
    fn test_builder_methods() {
        let config = UncertaintyConfig::default()
            .with_sample_count(1000)
            .with_seed(7);
        assert_eq!(config.sample_count, 1000);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_confidence_bounds() {
        for bad in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let config = UncertaintyConfig {
                confidence: bad,
                ..UncertaintyConfig::default()
            };
            assert!(
                matches!(
                    config.validate(),
                    Err(UncertaintyError::InvalidParameter {
                        name: "confidence",
                        ..
                    })
                ),
                "confidence {} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_validate_sample_count() {
        assert!(UncertaintyConfig::default()
            .with_sample_count(0)
            .validate()
            .is_err());
        assert!(UncertaintyConfig::default()
            .with_sample_count(MAX_SAMPLES + 1)
            .validate()
            .is_err());
        assert!(UncertaintyConfig::default()
            .with_sample_count(MAX_SAMPLES)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_coverage_factor() {
        let config = UncertaintyConfig {
            coverage_factor: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_histogram_bins() {
        let config = UncertaintyConfig {
            histogram_bins: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
