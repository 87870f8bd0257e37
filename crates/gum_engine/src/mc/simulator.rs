//! Monte Carlo simulator.
//!
//! Draws one sample from every independent term of every quantity, sums
//! them in order, and repeats for each sample of the population. The sample
//! axis is cut into [`BLOCK_SIZE`] blocks; block `b` draws from a
//! [`SimRng`] seeded with `derive_block_seed(base_seed, b)`. Blocks share
//! nothing but the immutable term list.

use std::time::Instant;

use gum_core::{Distribution, UncertainQuantity};
use rayon::prelude::*;
use tracing::debug;

use super::config::{SimulationConfig, BLOCK_SIZE};
use super::error::SimulationError;
use super::result::SimulationResult;
use crate::rng::{derive_block_seed, entropy_seed, SimRng};
use crate::stats::UncertaintyStatistics;

/// Monte Carlo propagation engine.
///
/// Stateless apart from its configuration: every call to
/// [`simulate`](MonteCarloSimulator::simulate) is independent and can run
/// concurrently with others.
///
/// # Examples
///
/// ```rust
/// use gum_core::{Distribution, UncertainQuantity};
/// use gum_engine::mc::MonteCarloSimulator;
///
/// let quantities = vec![
///     UncertainQuantity::exact(0.5),
///     UncertainQuantity::error_term(Distribution::centered_scaled(0.001).unwrap()),
/// ];
///
/// let a = MonteCarloSimulator::run(&quantities, 1_000, Some(3)).unwrap();
/// let b = MonteCarloSimulator::run(&quantities, 1_000, Some(3)).unwrap();
/// assert_eq!(a.sample_population, b.sample_population);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloSimulator {
    config: SimulationConfig,
}

impl MonteCarloSimulator {
    /// Creates a simulator.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError` if the configuration is invalid.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// One-shot run at the default 95 % coverage probability.
    ///
    /// # Errors
    ///
    /// `InvalidSampleCount` for a zero or oversized `sample_count`,
    /// `EmptyQuantities` for an empty slice, or the validation error of an
    /// invalid quantity.
    pub fn run(
        quantities: &[UncertainQuantity],
        sample_count: usize,
        seed: Option<u64>,
    ) -> Result<SimulationResult, SimulationError> {
        let config = SimulationConfig::builder()
            .sample_count(sample_count)
            .maybe_seed(seed)
            .build()?;
        MonteCarloSimulator::new(config)?.simulate(quantities)
    }

    /// Simulates the sum of `quantities`.
    ///
    /// # Errors
    ///
    /// `EmptyQuantities` for an empty slice, or the validation error of an
    /// invalid quantity. Nothing is sampled when an error is returned.
    pub fn simulate(
        &self,
        quantities: &[UncertainQuantity],
    ) -> Result<SimulationResult, SimulationError> {
        if quantities.is_empty() {
            return Err(SimulationError::EmptyQuantities);
        }
        for quantity in quantities {
            quantity.validate()?;
        }

        let terms: Vec<Distribution> = quantities
            .iter()
            .flat_map(|q| q.terms().iter().copied())
            .collect();
        let point_estimate = quantities
            .iter()
            .fold(0.0, |acc, q| acc + q.nominal_value());
        let expected_mean: f64 = terms.iter().map(Distribution::mean).sum();
        let seed = self.config.seed().unwrap_or_else(entropy_seed);

        let started = Instant::now();
        let sample_population = self.sample_population(&terms, seed);
        debug!(
            samples = sample_population.len(),
            terms = terms.len(),
            expected_mean,
            seed,
            parallel = self.config.parallel(),
            elapsed_ms = started.elapsed().as_secs_f64() * 1e3,
            "Population generated"
        );

        if terms.iter().all(Distribution::is_constant) {
            debug!(point_estimate, "All contributors exact; population is constant");
        }

        let coverage_interval =
            UncertaintyStatistics::coverage_interval(&sample_population, self.config.confidence())?;
        let expanded_uncertainty = UncertaintyStatistics::expanded_uncertainty_of(&coverage_interval);

        Ok(SimulationResult {
            sample_population,
            expanded_uncertainty,
            point_estimate,
            coverage_interval,
            seed,
        })
    }

    /// Generates the population for a flattened term list.
    fn sample_population(&self, terms: &[Distribution], base_seed: u64) -> Vec<f64> {
        let mut population = vec![0.0; self.config.sample_count()];

        let fill_block = |(block, chunk): (usize, &mut [f64])| {
            let mut rng = SimRng::from_seed(derive_block_seed(base_seed, block));
            for slot in chunk.iter_mut() {
                let mut total = 0.0;
                for term in terms {
                    total += term.sample(&mut rng);
                }
                *slot = total;
            }
        };

        if self.config.parallel() {
            population
                .par_chunks_mut(BLOCK_SIZE)
                .enumerate()
                .for_each(fill_block);
        } else {
            population
                .chunks_mut(BLOCK_SIZE)
                .enumerate()
                .for_each(fill_block);
        }

        population
    }
}
