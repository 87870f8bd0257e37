//! Contributor business rules.
//!
//! | Input | Quantity | Distribution |
//! |-------|----------|--------------|
//! | measured value `v` | nominal `v` | exact |
//! | calibration `u_cal` | nominal 0 | Gaussian, σ = `u_cal / k` |
//! | resolution `u_res` | nominal 0 | uniform on `±u_res / 2` |
//! | drift `u_drift` | nominal 0 | uniform on `±u_drift / 2` |
//!
//! The calibration limit is an expanded uncertainty quoted at coverage factor
//! `k`; resolution and drift are full widths of a rectangular interval.

use gum_core::{Distribution, InputField, UncertainQuantity, UncertaintyConfig, UncertaintyError};

use crate::request::{DensityInputs, MAX_INPUT_MAGNITUDE};

/// Measured density as an exact quantity.
pub fn measured_quantity(value: f64) -> UncertainQuantity {
    UncertainQuantity::exact(value)
}

/// Calibration contributor.
///
/// # Errors
///
/// `InvalidParameter` if `coverage_factor` is not positive, `InvalidInput`
/// against the calibration field if `limit / coverage_factor` exceeds
/// [`MAX_INPUT_MAGNITUDE`].
pub fn calibration_contributor(
    limit: f64,
    coverage_factor: f64,
) -> Result<UncertainQuantity, UncertaintyError> {
    if !coverage_factor.is_finite() || coverage_factor <= 0.0 {
        return Err(UncertaintyError::invalid_parameter(
            "coverage_factor",
            format!("must be positive, got {}", coverage_factor),
        ));
    }
    let sigma = limit / coverage_factor;
    if sigma > MAX_INPUT_MAGNITUDE {
        return Err(UncertaintyError::invalid_input(
            InputField::Calibration,
            format!(
                "{:e} at k = {} gives a standard uncertainty above {:e}",
                limit, coverage_factor, MAX_INPUT_MAGNITUDE
            ),
        ));
    }
    let distribution = Distribution::centered_scaled(sigma)?;
    Ok(UncertainQuantity::error_term(distribution))
}

/// Resolution contributor: rectangular over the full width `width`.
///
/// # Errors
///
/// `InvalidParameter` if `width` is negative or not finite.
pub fn resolution_contributor(width: f64) -> Result<UncertainQuantity, UncertaintyError> {
    rectangular(width)
}

/// Drift contributor: rectangular over the full width `width`.
///
/// # Errors
///
/// `InvalidParameter` if `width` is negative or not finite.
pub fn drift_contributor(width: f64) -> Result<UncertainQuantity, UncertaintyError> {
    rectangular(width)
}

fn rectangular(width: f64) -> Result<UncertainQuantity, UncertaintyError> {
    let distribution = Distribution::uniform_symmetric(0.0, width / 2.0)?;
    Ok(UncertainQuantity::error_term(distribution))
}

/// Builds the four quantities of a density reading, in request order.
///
/// # Errors
///
/// `InvalidParameter` if the coverage factor in `config` is not positive,
/// `InvalidInput` if it scales the calibration limit out of range.
pub fn build_quantities(
    inputs: &DensityInputs,
    config: &UncertaintyConfig,
) -> Result<Vec<UncertainQuantity>, UncertaintyError> {
    Ok(vec![
        measured_quantity(inputs.measured_value),
        calibration_contributor(inputs.calibration, config.coverage_factor)?,
        resolution_contributor(inputs.resolution)?,
        drift_contributor(inputs.drift)?,
    ])
}

/// Analytic combined standard uncertainty of the contributors (root sum of
/// squares). Reported next to the simulated result as a cross-check.
pub fn combined_standard_uncertainty(quantities: &[UncertainQuantity]) -> f64 {
    quantities
        .iter()
        .flat_map(|q| q.terms().iter())
        .map(|d| d.standard_uncertainty().powi(2))
        .sum::<f64>()
        .sqrt()
}
