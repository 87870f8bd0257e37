//! Sorting and quantile interpolation.

use gum_core::UncertaintyError;

/// Sorted copy of `population`.
///
/// # Errors
///
/// `InvalidParameter` if the population is empty or holds a non-finite value.
pub(crate) fn sorted_copy(population: &[f64]) -> Result<Vec<f64>, UncertaintyError> {
    check_population(population)?;
    let mut sorted = population.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    Ok(sorted)
}

/// Rejects empty populations and non-finite samples.
pub(crate) fn check_population(population: &[f64]) -> Result<(), UncertaintyError> {
    if population.is_empty() {
        return Err(UncertaintyError::invalid_parameter(
            "population",
            "must contain at least one sample",
        ));
    }
    if let Some(index) = population.iter().position(|x| !x.is_finite()) {
        return Err(UncertaintyError::invalid_parameter(
            "population",
            format!(
                "sample {} is not finite ({})",
                index, population[index]
            ),
        ));
    }
    Ok(())
}

/// Linearly interpolated quantile of an ascending, non-empty slice.
///
/// `q` is clamped to [0, 1]; the rank is `q · (n − 1)`.
///
/// # Examples
///
/// ```rust
/// use gum_engine::stats::quantile_sorted;
///
/// let sorted = [1.0, 2.0, 3.0, 4.0];
/// assert!((quantile_sorted(&sorted, 0.25) - 1.75).abs() < 1e-12);
/// assert_eq!(quantile_sorted(&sorted, 1.0), 4.0);
/// ```
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let rank = q.clamp(0.0, 1.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (lower + 1).min(n - 1);
    let weight = rank - lower as f64;

    let a = sorted[lower];
    let b = sorted[upper];
    if weight == 0.0 {
        return a;
    }
    let gap = b - a;
    let value = if gap.is_finite() {
        a + gap * weight
    } else {
        a * (1.0 - weight) + b * weight
    };
    value.clamp(a, b)
}
