//! Output shapes.
//!
//! [`DensityUncertaintyResult`] is the wire contract. Its field names are
//! fixed and must not change:
//!
//! ```json
//! { "valor_medido": 0.5, "incertidumbre_expandida": 0.0021, "histograma_data": [ ... ] }
//! ```

use gum_core::{InputField, UncertaintyError};
use gum_engine::stats::{CoverageInterval, PopulationSummary};
use serde::{Deserialize, Serialize};

/// Result of one density uncertainty estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityUncertaintyResult {
    /// Echo of the measured density.
    #[serde(rename = "valor_medido")]
    pub measured_value: f64,
    /// Expanded uncertainty at the configured confidence (≥ 0).
    #[serde(rename = "incertidumbre_expandida")]
    pub expanded_uncertainty: f64,
    /// Full simulated population, in generation order.
    #[serde(rename = "histograma_data")]
    pub histogram_data: Vec<f64>,
}

/// One equal-width histogram bin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Lower bound of the bin.
    pub lower: f64,
    /// Samples in the bin.
    pub count: usize,
}

impl From<(f64, usize)> for HistogramBin {
    fn from((lower, count): (f64, usize)) -> Self {
        Self { lower, count }
    }
}

/// Summarised estimate: statistics and bins instead of the raw population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityUncertaintyReport {
    /// Echo of the measured density.
    #[serde(rename = "valor_medido")]
    pub measured_value: f64,
    /// Expanded uncertainty at the configured confidence.
    #[serde(rename = "incertidumbre_expandida")]
    pub expanded_uncertainty: f64,
    /// Root-sum-of-squares standard uncertainty of the contributors.
    pub standard_uncertainty: f64,
    /// Coverage factor applied to the calibration limit.
    pub coverage_factor: f64,
    /// Interval the expanded uncertainty was taken from.
    pub coverage_interval: CoverageInterval,
    /// Descriptive statistics of the population.
    pub summary: PopulationSummary,
    /// Pre-binned histogram.
    pub histogram: Vec<HistogramBin>,
    /// Number of simulated samples.
    pub sample_count: usize,
    /// Base seed, for replaying the run.
    pub seed: u64,
}

/// Structured error body.
///
/// `error` is `"invalid_input"` for caller mistakes and
/// `"invalid_parameter"` for configuration defects. `field` is omitted when
/// no single input is at fault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error category.
    pub error: String,
    /// Offending input field, for input errors.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub field: Option<InputField>,
    /// Human-readable message.
    pub message: String,
}

impl From<&UncertaintyError> for ErrorResponse {
    fn from(err: &UncertaintyError) -> Self {
        let error = if err.is_input_error() {
            "invalid_input"
        } else {
            "invalid_parameter"
        };
        Self {
            error: error.to_string(),
            field: err.field(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_wire_names() {
        let result = DensityUncertaintyResult {
            measured_value: 0.5,
            expanded_uncertainty: 0.0021,
            histogram_data: vec![0.5, 0.501],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "valor_medido": 0.5,
                "incertidumbre_expandida": 0.0021,
                "histograma_data": [0.5, 0.501]
            })
        );
    }

    #[test]
    fn test_result_deserialize() {
        let result: DensityUncertaintyResult = serde_json::from_str(
            r#"{"valor_medido": 1.0, "incertidumbre_expandida": 0.0, "histograma_data": []}"#,
        )
        .unwrap();
        assert_eq!(result.measured_value, 1.0);
        assert!(result.histogram_data.is_empty());
    }

    #[test]
    fn test_error_response_input() {
        let err = UncertaintyError::invalid_input(InputField::Calibration, "must be non-negative");
        let value = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(value["error"], "invalid_input");
        assert_eq!(value["field"], "incertidumbre_calibracion");
        assert_eq!(
            value["message"],
            "Invalid input for calibration uncertainty: must be non-negative"
        );
    }

    #[test]
    fn test_error_response_parameter_omits_field() {
        let err = UncertaintyError::invalid_parameter("sample_count", "must be positive");
        let value = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(value["error"], "invalid_parameter");
        assert!(value.get("field").is_none());
    }

    #[test]
    fn test_error_response_malformed_request_omits_field() {
        let err = UncertaintyError::malformed_request("request must be a JSON object");
        let value = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(value["error"], "invalid_input");
        assert!(value.get("field").is_none());
    }

    #[test]
    fn test_histogram_bin_from_tuple() {
        let bin = HistogramBin::from((0.25, 7));
        assert_eq!(bin.lower, 0.25);
        assert_eq!(bin.count, 7);
    }
}
