//! Outcome of a Monte Carlo run.

use gum_core::UncertaintyError;
use serde::Serialize;

use crate::stats::{CoverageInterval, PopulationSummary, UncertaintyStatistics};

/// Simulated population with its extracted statistics.
///
/// `point_estimate` is the analytic sum of nominal values, not a statistic
/// of the samples.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationResult {
    /// Simulated outcomes, one per sample, in generation order.
    pub sample_population: Vec<f64>,
    /// Half-width of the coverage interval (never negative).
    pub expanded_uncertainty: f64,
    /// Sum of the nominal values of all quantities.
    pub point_estimate: f64,
    /// Coverage interval the expanded uncertainty was taken from.
    pub coverage_interval: CoverageInterval,
    /// Base seed the population was generated from.
    pub seed: u64,
}

impl SimulationResult {
    /// Number of simulated samples.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.sample_population.len()
    }

    /// Returns `true` when no contributor carried any spread.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.expanded_uncertainty == 0.0
    }

    /// Equal-width histogram of the population.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `bin_count` is 0.
    pub fn histogram(&self, bin_count: usize) -> Result<Vec<(f64, usize)>, UncertaintyError> {
        UncertaintyStatistics::histogram(&self.sample_population, bin_count)
    }

    /// Descriptive summary of the population.
    ///
    /// # Errors
    ///
    /// Never fails for a result produced by the simulator.
    pub fn summary(&self) -> Result<PopulationSummary, UncertaintyError> {
        UncertaintyStatistics::summary(&self.sample_population)
    }
}
