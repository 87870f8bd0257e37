//! Coverage interval and expanded uncertainty.

use gum_core::UncertaintyError;
use serde::{Deserialize, Serialize};

use super::quantile::{quantile_sorted, sorted_copy};
use super::UncertaintyStatistics;

/// Probabilistically symmetric coverage interval.
///
/// `lower` and `upper` are the `(1 − p)/2` and `(1 + p)/2` quantiles of the
/// population, so each tail holds `(1 − p)/2` of the samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageInterval {
    /// Coverage probability `p`.
    pub confidence: f64,
    /// Lower interval bound.
    pub lower: f64,
    /// Upper interval bound.
    pub upper: f64,
}

impl CoverageInterval {
    /// Half the interval width.
    ///
    /// Each bound is halved first so intervals wider than `f64::MAX` stay finite.
    #[inline]
    pub fn half_width(&self) -> f64 {
        0.5 * self.upper - 0.5 * self.lower
    }

    /// Returns `true` if `x` lies within the closed interval.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.lower && x <= self.upper
    }
}

impl UncertaintyStatistics {
    /// Coverage interval of `population` at probability `confidence`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `confidence` is outside (0, 1), the population
    /// is empty, or it holds a non-finite sample.
    pub fn coverage_interval(
        population: &[f64],
        confidence: f64,
    ) -> Result<CoverageInterval, UncertaintyError> {
        check_confidence(confidence)?;
        let sorted = sorted_copy(population)?;
        Ok(Self::coverage_interval_sorted(&sorted, confidence))
    }

    /// Coverage interval of an already ascending, validated population.
    pub(crate) fn coverage_interval_sorted(sorted: &[f64], confidence: f64) -> CoverageInterval {
        let tail = 0.5 * (1.0 - confidence);
        CoverageInterval {
            confidence,
            lower: quantile_sorted(sorted, tail),
            upper: quantile_sorted(sorted, 1.0 - tail),
        }
    }

    /// Expanded uncertainty of `population` at probability `confidence`.
    ///
    /// `U` is the half-width of the coverage interval. The reported value is
    /// `(U + U) / 2`, which equals `U`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`UncertaintyStatistics::coverage_interval`].
    pub fn expanded_uncertainty(population: &[f64], confidence: f64) -> Result<f64, UncertaintyError> {
        let interval = Self::coverage_interval(population, confidence)?;
        Ok(Self::expanded_uncertainty_of(&interval))
    }

    /// Expanded uncertainty of a computed coverage interval.
    #[inline]
    pub fn expanded_uncertainty_of(interval: &CoverageInterval) -> f64 {
        let u = interval.half_width();
        // TODO: confirm with the product owner whether distinct lower and
        // upper one-sided bounds were meant to be averaged here.
        u / 2.0 + u / 2.0
    }
}

fn check_confidence(confidence: f64) -> Result<(), UncertaintyError> {
    if confidence > 0.0 && confidence < 1.0 {
        Ok(())
    } else {
        Err(UncertaintyError::invalid_parameter(
            "confidence",
            format!("must be in (0, 1), got {}", confidence),
        ))
    }
}
