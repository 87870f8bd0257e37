//! Descriptive summary of a population.

use gum_core::UncertaintyError;
use serde::{Deserialize, Serialize};

use super::quantile::check_population;
use super::UncertaintyStatistics;

/// Count, mean, sample standard deviation and extremes of a population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationSummary {
    /// Number of samples.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (n − 1 denominator; 0 for a single sample).
    pub std_dev: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
}

impl UncertaintyStatistics {
    /// Summarises `population`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the population is empty or holds a non-finite sample.
    pub fn summary(population: &[f64]) -> Result<PopulationSummary, UncertaintyError> {
        check_population(population)?;

        let count = population.len();
        let mean = population.iter().sum::<f64>() / count as f64;
        let std_dev = if count > 1 {
            let sum_sq: f64 = population.iter().map(|&x| (x - mean).powi(2)).sum();
            (sum_sq / (count - 1) as f64).sqrt()
        } else {
            0.0
        };
        let (min, max) = population
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });

        Ok(PopulationSummary {
            count,
            mean,
            std_dev,
            min,
            max,
        })
    }
}
