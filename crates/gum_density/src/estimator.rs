//! Density uncertainty estimator.

use gum_core::{UncertaintyConfig, UncertaintyError};
use gum_engine::mc::{MonteCarloSimulator, SimulationConfig, SimulationResult};
use tracing::{info, warn};

use crate::contributors::{build_quantities, combined_standard_uncertainty};
use crate::request::{DensityInputs, DensityUncertaintyRequest};
use crate::response::{DensityUncertaintyReport, DensityUncertaintyResult};

/// Estimates the expanded uncertainty of density readings.
///
/// Holds a validated [`UncertaintyConfig`] and the simulator built from it.
/// Instances are immutable and can be shared across threads.
#[derive(Clone, Debug)]
pub struct DensityUncertaintyEstimator {
    config: UncertaintyConfig,
    simulator: MonteCarloSimulator,
}

impl DensityUncertaintyEstimator {
    /// Creates an estimator.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the configuration is invalid.
    pub fn new(config: UncertaintyConfig) -> Result<Self, UncertaintyError> {
        config.validate()?;
        let simulator = MonteCarloSimulator::new(SimulationConfig::try_from(&config)?)?;
        Ok(Self { config, simulator })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &UncertaintyConfig {
        &self.config
    }

    /// Estimates the uncertainty of validated inputs.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the coverage factor scales the calibration limit out
    /// of range, otherwise `InvalidParameter` if the engine rejects its
    /// inputs, which only happens for a configuration defect.
    pub fn estimate(&self, inputs: &DensityInputs) -> Result<DensityEstimate, UncertaintyError> {
        let quantities = build_quantities(inputs, &self.config)?;
        let simulation = self.simulator.simulate(&quantities)?;

        info!(
            measured_value = inputs.measured_value,
            exact = inputs.has_no_uncertainty(),
            expanded_uncertainty = simulation.expanded_uncertainty,
            samples = simulation.sample_count(),
            seed = simulation.seed,
            "Density uncertainty estimated"
        );

        Ok(DensityEstimate {
            inputs: *inputs,
            standard_uncertainty: combined_standard_uncertainty(&quantities),
            coverage_factor: self.config.coverage_factor,
            simulation,
        })
    }

    /// Validates a raw request and estimates it.
    ///
    /// # Errors
    ///
    /// `InvalidInput` naming the offending field; nothing is simulated in
    /// that case.
    pub fn estimate_request(
        &self,
        request: &DensityUncertaintyRequest,
    ) -> Result<DensityEstimate, UncertaintyError> {
        let inputs = request.validate().inspect_err(|e| {
            warn!(field = ?e.field(), error = %e, "Rejected density request");
        })?;
        self.estimate(&inputs)
    }
}

/// Outcome of one estimate, before projection onto an output shape.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityEstimate {
    /// Validated inputs.
    pub inputs: DensityInputs,
    /// Root-sum-of-squares standard uncertainty of the contributors.
    pub standard_uncertainty: f64,
    /// Coverage factor the calibration limit was divided by.
    pub coverage_factor: f64,
    /// Engine output.
    pub simulation: SimulationResult,
}

impl DensityEstimate {
    /// Expanded uncertainty at the configured confidence.
    #[inline]
    pub fn expanded_uncertainty(&self) -> f64 {
        self.simulation.expanded_uncertainty
    }

    /// Wire result with the full population.
    pub fn to_result(&self) -> DensityUncertaintyResult {
        DensityUncertaintyResult {
            measured_value: self.inputs.measured_value,
            expanded_uncertainty: self.simulation.expanded_uncertainty,
            histogram_data: self.simulation.sample_population.clone(),
        }
    }

    /// Consumes the estimate into the wire result without copying samples.
    pub fn into_result(self) -> DensityUncertaintyResult {
        DensityUncertaintyResult {
            measured_value: self.inputs.measured_value,
            expanded_uncertainty: self.simulation.expanded_uncertainty,
            histogram_data: self.simulation.sample_population,
        }
    }

    /// Summarised report with a pre-binned histogram.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `bins` is 0.
    pub fn report(&self, bins: usize) -> Result<DensityUncertaintyReport, UncertaintyError> {
        let histogram = self.simulation.histogram(bins)?;
        let summary = self.simulation.summary()?;

        Ok(DensityUncertaintyReport {
            measured_value: self.inputs.measured_value,
            expanded_uncertainty: self.simulation.expanded_uncertainty,
            standard_uncertainty: self.standard_uncertainty,
            coverage_factor: self.coverage_factor,
            coverage_interval: self.simulation.coverage_interval,
            summary,
            histogram: histogram.into_iter().map(Into::into).collect(),
            sample_count: self.simulation.sample_count(),
            seed: self.simulation.seed,
        })
    }
}
