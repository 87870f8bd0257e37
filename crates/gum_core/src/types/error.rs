//! Error types for structured error handling.
//!
//! This module provides:
//! - `InputField`: The caller-facing input categories of a density reading
//! - `UncertaintyError`: Errors raised by validation and by the propagation engine
//!
//! Two failure families exist. `InvalidInput` and `MalformedRequest` are
//! caused by the caller (a missing, malformed, or negative reading, or a
//! document that is not a request at all) and are reported back as a
//! structured message. `InvalidParameter` signals a contract violation inside
//! the orchestration (zero sample count, confidence outside (0, 1)) and is
//! never clamped or retried.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Input category of a density uncertainty request.
///
/// The serialised form matches the field names used on the wire.
///
/// # Examples
/// ```
/// use gum_core::InputField;
///
/// assert_eq!(InputField::Calibration.wire_name(), "incertidumbre_calibracion");
/// assert_eq!(format!("{}", InputField::Drift), "drift uncertainty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputField {
    /// The measured density itself.
    #[serde(rename = "valor_medido")]
    MeasuredValue,
    /// Calibration uncertainty limit.
    #[serde(rename = "incertidumbre_calibracion")]
    Calibration,
    /// Instrument resolution (full width).
    #[serde(rename = "incertidumbre_resolucion")]
    Resolution,
    /// Instrument drift (full width).
    #[serde(rename = "incertidumbre_deriva")]
    Drift,
}

impl InputField {
    /// All input fields in request order.
    pub const ALL: [InputField; 4] = [
        InputField::MeasuredValue,
        InputField::Calibration,
        InputField::Resolution,
        InputField::Drift,
    ];

    /// Field name as it appears in request and response payloads.
    pub fn wire_name(&self) -> &'static str {
        match self {
            InputField::MeasuredValue => "valor_medido",
            InputField::Calibration => "incertidumbre_calibracion",
            InputField::Resolution => "incertidumbre_resolucion",
            InputField::Drift => "incertidumbre_deriva",
        }
    }

    /// Whether the field is an uncertainty and therefore must be non-negative.
    pub fn requires_non_negative(&self) -> bool {
        !matches!(self, InputField::MeasuredValue)
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::MeasuredValue => write!(f, "measured value"),
            InputField::Calibration => write!(f, "calibration uncertainty"),
            InputField::Resolution => write!(f, "resolution uncertainty"),
            InputField::Drift => write!(f, "drift uncertainty"),
        }
    }
}

/// Categorised uncertainty propagation errors.
///
/// # Variants
/// - `InvalidInput`: caller supplied a missing, non-numeric, or negative value
/// - `MalformedRequest`: the request document as a whole could not be read
/// - `InvalidParameter`: internal contract violation (programming defect)
///
/// # Examples
/// ```
/// use gum_core::{InputField, UncertaintyError};
///
/// let err = UncertaintyError::invalid_input(InputField::Calibration, "must be non-negative");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid input for calibration uncertainty: must be non-negative"
/// );
/// assert_eq!(err.field(), Some(InputField::Calibration));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UncertaintyError {
    /// Caller-supplied value rejected before any simulation ran.
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput {
        /// Offending input category
        field: InputField,
        /// Human-readable reason
        reason: String,
    },

    /// Request document unreadable as a whole; no single field is at fault.
    #[error("Malformed request: {reason}")]
    MalformedRequest {
        /// Human-readable reason
        reason: String,
    },

    /// Internal parameter outside its contract.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the violation
        reason: String,
    },
}

impl UncertaintyError {
    /// Create an input validation error.
    pub fn invalid_input(field: InputField, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Create a whole-document request error.
    pub fn malformed_request(reason: impl Into<String>) -> Self {
        Self::MalformedRequest {
            reason: reason.into(),
        }
    }

    /// Create an internal parameter error.
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Input field that caused the error, if caller-facing.
    pub fn field(&self) -> Option<InputField> {
        match self {
            Self::InvalidInput { field, .. } => Some(*field),
            Self::MalformedRequest { .. } | Self::InvalidParameter { .. } => None,
        }
    }

    /// Returns `true` for caller-facing validation failures.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::MalformedRequest { .. }
        )
    }
}
