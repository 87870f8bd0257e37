//! Request parsing and input validation.
//!
//! Readings arrive as form text or JSON values. Each of the four fields is
//! parsed on its own so a failure names the field category that caused it:
//!
//! | Field | Wire name | Constraint |
//! |-------|-----------|------------|
//! | measured value | `valor_medido` | finite, `|v| ≤ MAX_INPUT_MAGNITUDE` |
//! | calibration | `incertidumbre_calibracion` | finite, `0 ≤ v ≤ MAX_INPUT_MAGNITUDE` |
//! | resolution | `incertidumbre_resolucion` | finite, `0 ≤ v ≤ MAX_INPUT_MAGNITUDE` |
//! | drift | `incertidumbre_deriva` | finite, `0 ≤ v ≤ MAX_INPUT_MAGNITUDE` |

use gum_core::{InputField, UncertaintyError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Largest accepted magnitude of any input.
///
/// Samples, their sum and the squared deviations of the summary statistics
/// all stay finite for inputs below this bound at any permitted sample count.
pub const MAX_INPUT_MAGNITUDE: f64 = 1e100;

/// A field value as received: a JSON number or a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    /// Numeric JSON value.
    Number(f64),
    /// Form or string value, parsed on validation.
    Text(String),
}

impl From<f64> for RawField {
    fn from(value: f64) -> Self {
        RawField::Number(value)
    }
}

impl From<&str> for RawField {
    fn from(value: &str) -> Self {
        RawField::Text(value.to_string())
    }
}

/// Unvalidated density uncertainty request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DensityUncertaintyRequest {
    /// Measured density.
    #[serde(rename = "valor_medido", default)]
    pub measured_value: Option<RawField>,
    /// Calibration uncertainty limit.
    #[serde(rename = "incertidumbre_calibracion", default)]
    pub calibration: Option<RawField>,
    /// Resolution uncertainty (full width).
    #[serde(rename = "incertidumbre_resolucion", default)]
    pub resolution: Option<RawField>,
    /// Drift uncertainty (full width).
    #[serde(rename = "incertidumbre_deriva", default)]
    pub drift: Option<RawField>,
}

impl DensityUncertaintyRequest {
    /// Builds a request from four form values.
    pub fn from_text(measured: &str, calibration: &str, resolution: &str, drift: &str) -> Self {
        Self {
            measured_value: Some(measured.into()),
            calibration: Some(calibration.into()),
            resolution: Some(resolution.into()),
            drift: Some(drift.into()),
        }
    }

    /// Parses a JSON object.
    ///
    /// Unknown keys are ignored. Any field holding something other than a
    /// number, a string, or `null` is reported against that field.
    ///
    /// # Errors
    ///
    /// `MalformedRequest` if the document is not a JSON object, or
    /// `InvalidInput` against the first field with an unusable value.
    pub fn from_json(json: &str) -> Result<Self, UncertaintyError> {
        let value: Value = serde_json::from_str(json).map_err(|e| {
            UncertaintyError::malformed_request(format!("request is not valid JSON: {}", e))
        })?;
        let object = value
            .as_object()
            .ok_or_else(|| UncertaintyError::malformed_request("request must be a JSON object"))?;

        let extract = |field: InputField| -> Result<Option<RawField>, UncertaintyError> {
            match object.get(field.wire_name()) {
                None | Some(Value::Null) => Ok(None),
                Some(Value::Number(n)) => n.as_f64().map(|x| Some(RawField::Number(x))).ok_or_else(
                    || UncertaintyError::invalid_input(field, "number is not representable"),
                ),
                Some(Value::String(s)) => Ok(Some(RawField::Text(s.clone()))),
                Some(other) => Err(UncertaintyError::invalid_input(
                    field,
                    format!("expected a number, got {}", json_kind(other)),
                )),
            }
        };

        Ok(Self {
            measured_value: extract(InputField::MeasuredValue)?,
            calibration: extract(InputField::Calibration)?,
            resolution: extract(InputField::Resolution)?,
            drift: extract(InputField::Drift)?,
        })
    }

    /// Raw value of `field`.
    pub fn raw(&self, field: InputField) -> Option<&RawField> {
        match field {
            InputField::MeasuredValue => self.measured_value.as_ref(),
            InputField::Calibration => self.calibration.as_ref(),
            InputField::Resolution => self.resolution.as_ref(),
            InputField::Drift => self.drift.as_ref(),
        }
    }

    /// Parses and validates every field.
    ///
    /// # Errors
    ///
    /// `InvalidInput` naming the first offending field, in request order.
    pub fn validate(&self) -> Result<DensityInputs, UncertaintyError> {
        let value = |field: InputField| parse_field(field, self.raw(field));

        Ok(DensityInputs {
            measured_value: value(InputField::MeasuredValue)?,
            calibration: value(InputField::Calibration)?,
            resolution: value(InputField::Resolution)?,
            drift: value(InputField::Drift)?,
        })
    }
}

/// Parses one field and applies its constraint.
///
/// # Errors
///
/// `InvalidInput` for a missing, blank, non-numeric, non-finite or
/// out-of-range value, and for a negative uncertainty.
pub fn parse_field(field: InputField, raw: Option<&RawField>) -> Result<f64, UncertaintyError> {
    let value = match raw {
        None => return Err(UncertaintyError::invalid_input(field, "value is required")),
        Some(RawField::Number(x)) => *x,
        Some(RawField::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(UncertaintyError::invalid_input(field, "value is required"));
            }
            trimmed.parse::<f64>().map_err(|_| {
                UncertaintyError::invalid_input(field, format!("'{}' is not a number", trimmed))
            })?
        }
    };
    check_value(field, value)
}

fn check_value(field: InputField, value: f64) -> Result<f64, UncertaintyError> {
    if !value.is_finite() {
        return Err(UncertaintyError::invalid_input(field, "value must be finite"));
    }
    if value.abs() > MAX_INPUT_MAGNITUDE {
        return Err(UncertaintyError::invalid_input(
            field,
            format!("magnitude must not exceed {:e}, got {:e}", MAX_INPUT_MAGNITUDE, value),
        ));
    }
    if field.requires_non_negative() && value < 0.0 {
        return Err(UncertaintyError::invalid_input(
            field,
            format!("must be non-negative, got {}", value),
        ));
    }
    Ok(value)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Validated readings of one density measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityInputs {
    /// Measured density.
    pub measured_value: f64,
    /// Calibration uncertainty limit (expanded, at the coverage factor).
    pub calibration: f64,
    /// Resolution uncertainty (full width).
    pub resolution: f64,
    /// Drift uncertainty (full width).
    pub drift: f64,
}

impl DensityInputs {
    /// Creates validated inputs from numbers.
    ///
    /// # Errors
    ///
    /// `InvalidInput` naming the first offending field.
    pub fn new(
        measured_value: f64,
        calibration: f64,
        resolution: f64,
        drift: f64,
    ) -> Result<Self, UncertaintyError> {
        Ok(Self {
            measured_value: check_value(InputField::MeasuredValue, measured_value)?,
            calibration: check_value(InputField::Calibration, calibration)?,
            resolution: check_value(InputField::Resolution, resolution)?,
            drift: check_value(InputField::Drift, drift)?,
        })
    }

    /// Returns `true` if every uncertainty input is zero.
    pub fn has_no_uncertainty(&self) -> bool {
        self.calibration == 0.0 && self.resolution == 0.0 && self.drift == 0.0
    }
}
