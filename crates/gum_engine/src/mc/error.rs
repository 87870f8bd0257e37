//! Error types for the Monte Carlo engine.
//!
//! Every variant is an internal contract violation: the orchestration passed
//! a parameter the engine cannot honour. They convert losslessly into
//! [`UncertaintyError::InvalidParameter`] for callers that only deal in the
//! shared taxonomy.

use gum_core::{UncertaintyError, MAX_SAMPLES};
use thiserror::Error;

/// Monte Carlo simulation error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Sample count outside [1, `MAX_SAMPLES`].
    #[error("Invalid sample count {0}: must be in range [1, {max}]", max = MAX_SAMPLES)]
    InvalidSampleCount(usize),

    /// Coverage probability outside (0, 1).
    #[error("Invalid confidence {0}: must be in (0, 1)")]
    InvalidConfidence(f64),

    /// No quantities to simulate.
    #[error("No uncertain quantities supplied")]
    EmptyQuantities,

    /// Required builder parameter missing or malformed.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// A quantity or the population failed validation.
    #[error(transparent)]
    Uncertainty(#[from] UncertaintyError),
}

impl From<SimulationError> for UncertaintyError {
    fn from(err: SimulationError) -> Self {
        match err {
            SimulationError::InvalidSampleCount(count) => UncertaintyError::invalid_parameter(
                "sample_count",
                format!("must be in range [1, {}], got {}", MAX_SAMPLES, count),
            ),
            SimulationError::InvalidConfidence(confidence) => UncertaintyError::invalid_parameter(
                "confidence",
                format!("must be in (0, 1), got {}", confidence),
            ),
            SimulationError::EmptyQuantities => {
                UncertaintyError::invalid_parameter("quantities", "must not be empty")
            }
            SimulationError::InvalidParameter { name, value } => {
                UncertaintyError::invalid_parameter(name, value)
            }
            SimulationError::Uncertainty(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_error_display() {
        let err = SimulationError::InvalidSampleCount(0);
        assert!(err.to_string().contains("Invalid sample count 0"));

        let err = SimulationError::InvalidConfidence(1.5);
        assert!(err.to_string().contains("1.5"));

        assert_eq!(
            SimulationError::EmptyQuantities.to_string(),
            "No uncertain quantities supplied"
        );
    }

    #[test]
    fn test_converts_to_invalid_parameter() {
        let err: UncertaintyError = SimulationError::InvalidSampleCount(0).into();
        assert!(matches!(
            err,
            UncertaintyError::InvalidParameter {
                name: "sample_count",
                ..
            }
        ));

        let err: UncertaintyError = SimulationError::EmptyQuantities.into();
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_inner_error_passes_through() {
        let inner = UncertaintyError::invalid_parameter("half_width", "negative");
        let err: UncertaintyError = SimulationError::from(inner.clone()).into();
        assert_eq!(err, inner);
    }
}
