//! Equal-width histogram of a population.

use gum_core::UncertaintyError;

use super::quantile::check_population;
use super::UncertaintyStatistics;

impl UncertaintyStatistics {
    /// Partitions `population` into `bin_count` equal-width bins over `[min, max]`.
    ///
    /// Returns `(bin_lower_bound, count)` pairs in ascending order. Every
    /// sample lands in exactly one bin and the last bin includes `max`. A
    /// constant population puts every sample in the first bin; all bins then
    /// share the same lower bound.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `bin_count` is 0, the population is empty, or it
    /// holds a non-finite sample.
    pub fn histogram(
        population: &[f64],
        bin_count: usize,
    ) -> Result<Vec<(f64, usize)>, UncertaintyError> {
        if bin_count == 0 {
            return Err(UncertaintyError::invalid_parameter(
                "bin_count",
                "must be at least 1",
            ));
        }
        check_population(population)?;

        let (min, max) = population
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        let n = bin_count as f64;
        let span = max - min;
        // A span above f64::MAX is split before subtracting.
        let width = if span.is_finite() {
            span / n
        } else {
            max / n - min / n
        };

        let mut counts = vec![0usize; bin_count];
        for &x in population {
            counts[bin_index(x, min, width, bin_count)] += 1;
        }

        Ok(counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| (lower_bound(i, min, max, width, bin_count), count))
            .collect())
    }
}

#[inline]
fn bin_index(x: f64, min: f64, width: f64, bin_count: usize) -> usize {
    if width > 0.0 {
        let offset = x - min;
        let position = if offset.is_finite() {
            offset / width
        } else {
            x / width - min / width
        };
        (position as usize).min(bin_count - 1)
    } else {
        0
    }
}

/// Lower bound of bin `i`, measured from whichever end of the range keeps
/// the product `k · width` finite.
#[inline]
fn lower_bound(i: usize, min: f64, max: f64, width: f64, bin_count: usize) -> f64 {
    if i == 0 || width == 0.0 {
        return min;
    }
    let from_min = min + i as f64 * width;
    if from_min.is_finite() {
        from_min
    } else {
        max - (bin_count - i) as f64 * width
    }
}
