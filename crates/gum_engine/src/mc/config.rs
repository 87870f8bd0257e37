//! Monte Carlo simulation configuration.
//!
//! This module provides [`SimulationConfig`] and its builder. The
//! configuration is immutable once built and validated.

use gum_core::config::DEFAULT_CONFIDENCE;
use gum_core::{UncertaintyConfig, MAX_SAMPLES};

use super::error::SimulationError;

/// Number of samples generated from one derived seed.
///
/// Fixed independently of the thread count so a seeded population is the
/// same on every machine.
pub const BLOCK_SIZE: usize = 8_192;

/// Monte Carlo simulation configuration.
///
/// # Examples
///
/// ```rust
/// use gum_engine::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .sample_count(100_000)
///     .confidence(0.95)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.sample_count(), 100_000);
/// assert_eq!(config.seed(), Some(42));
/// assert!(config.parallel());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    sample_count: usize,
    confidence: f64,
    seed: Option<u64>,
    parallel: bool,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of samples per run.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Returns the coverage probability.
    #[inline]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Returns the optional base seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns whether blocks are filled on the rayon pool.
    #[inline]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError` if:
    /// - `sample_count` is 0 or greater than [`MAX_SAMPLES`]
    /// - `confidence` is outside (0, 1)
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.sample_count == 0 || self.sample_count > MAX_SAMPLES {
            return Err(SimulationError::InvalidSampleCount(self.sample_count));
        }
        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            return Err(SimulationError::InvalidConfidence(self.confidence));
        }
        Ok(())
    }
}

impl TryFrom<&UncertaintyConfig> for SimulationConfig {
    type Error = SimulationError;

    fn try_from(config: &UncertaintyConfig) -> Result<Self, Self::Error> {
        let mut builder = SimulationConfig::builder()
            .sample_count(config.sample_count)
            .confidence(config.confidence)
            .parallel(config.parallel);
        if let Some(seed) = config.seed {
            builder = builder.seed(seed);
        }
        builder.build()
    }
}

/// Builder for [`SimulationConfig`].
///
/// `sample_count` is required; `confidence` defaults to 0.95, `parallel`
/// to `true`, and an absent seed means fresh entropy per run.
#[derive(Clone, Debug)]
pub struct SimulationConfigBuilder {
    sample_count: Option<usize>,
    confidence: f64,
    seed: Option<u64>,
    parallel: bool,
}

impl Default for SimulationConfigBuilder {
    fn default() -> Self {
        Self {
            sample_count: None,
            confidence: DEFAULT_CONFIDENCE,
            seed: None,
            parallel: true,
        }
    }
}

impl SimulationConfigBuilder {
    /// Sets the number of samples, in [1, 10_000_000].
    #[inline]
    pub fn sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = Some(sample_count);
        self
    }

    /// Sets the coverage probability, in (0, 1).
    #[inline]
    pub fn confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    /// Sets the base seed for reproducible populations.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets an optional base seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables parallel block generation.
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError` if `sample_count` is not set or any value
    /// is out of range.
    pub fn build(self) -> Result<SimulationConfig, SimulationError> {
        let sample_count = self
            .sample_count
            .ok_or(SimulationError::InvalidParameter {
                name: "sample_count",
                value: "must be specified".to_string(),
            })?;

        let config = SimulationConfig {
            sample_count,
            confidence: self.confidence,
            seed: self.seed,
            parallel: self.parallel,
        };

        config.validate()?;
        Ok(config)
    }
}
