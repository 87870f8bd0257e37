//! Statistics extracted from a simulated population.
//!
//! [`UncertaintyStatistics`] groups the post-simulation computations:
//!
//! | Operation | Output |
//! |-----------|--------|
//! | [`coverage_interval`](UncertaintyStatistics::coverage_interval) | probabilistically symmetric interval at a confidence level |
//! | [`expanded_uncertainty`](UncertaintyStatistics::expanded_uncertainty) | half-width of that interval |
//! | [`histogram`](UncertaintyStatistics::histogram) | equal-width `(lower_bound, count)` bins |
//! | [`summary`](UncertaintyStatistics::summary) | count, mean, standard deviation, extremes |
//!
//! Quantiles interpolate linearly between order statistics at rank
//! `q · (n − 1)`. Every operation rejects an empty population and any
//! non-finite sample with `InvalidParameter`.

mod coverage;
mod histogram;
mod quantile;
mod summary;

pub use coverage::CoverageInterval;
pub use quantile::quantile_sorted;
pub use summary::PopulationSummary;

/// Namespace for population statistics.
///
/// # Examples
///
/// ```rust
/// use gum_engine::stats::UncertaintyStatistics;
///
/// let population: Vec<f64> = (0..=100).map(|i| i as f64).collect();
///
/// let interval = UncertaintyStatistics::coverage_interval(&population, 0.9).unwrap();
/// assert!((interval.lower - 5.0).abs() < 1e-12);
/// assert!((interval.upper - 95.0).abs() < 1e-12);
///
/// let u = UncertaintyStatistics::expanded_uncertainty(&population, 0.9).unwrap();
/// assert!((u - 45.0).abs() < 1e-12);
///
/// let bins = UncertaintyStatistics::histogram(&population, 10).unwrap();
/// assert_eq!(bins.iter().map(|&(_, count)| count).sum::<usize>(), 101);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UncertaintyStatistics;
