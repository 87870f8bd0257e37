//! Compute command implementation
//!
//! Estimates the expanded uncertainty of one density reading and writes the
//! result as JSON.

use std::io::{Read, Write};
use std::path::Path;

use gum_density::{
    DensityUncertaintyEstimator, DensityUncertaintyReport, DensityUncertaintyRequest,
    DensityUncertaintyResult, RawField,
};
use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Where the reading comes from
#[derive(Debug, Clone, PartialEq)]
pub enum RequestSource {
    /// Values given on the command line, kept as raw text
    Values {
        measured: Option<String>,
        calibration: Option<String>,
        resolution: Option<String>,
        drift: Option<String>,
    },
    /// JSON request file, or `-` for stdin
    File(String),
}

/// Output options
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Append a summary and a pre-binned histogram
    pub summary: bool,
    /// Pretty-print the JSON
    pub pretty: bool,
}

#[derive(Serialize)]
struct ComputeOutput {
    #[serde(flatten)]
    result: DensityUncertaintyResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<DensityUncertaintyReport>,
}

/// Run the compute command
pub fn run<W: Write>(
    source: &RequestSource,
    config: &CliConfig,
    options: OutputOptions,
    out: &mut W,
) -> Result<()> {
    let request = load_request(source)?;
    let estimator = DensityUncertaintyEstimator::new(config.uncertainty.clone())?;
    let estimate = estimator.estimate_request(&request)?;

    let summary = if options.summary {
        Some(estimate.report(config.uncertainty.histogram_bins)?)
    } else {
        None
    };
    if let Some(report) = &summary {
        info!(
            mean = report.summary.mean,
            std_dev = report.summary.std_dev,
            lower = report.coverage_interval.lower,
            upper = report.coverage_interval.upper,
            "Population summary"
        );
    }

    let output = ComputeOutput {
        result: estimate.into_result(),
        summary,
    };
    write_json(out, &output, options.pretty)
}

fn load_request(source: &RequestSource) -> Result<DensityUncertaintyRequest> {
    match source {
        RequestSource::Values {
            measured,
            calibration,
            resolution,
            drift,
        } => {
            let raw = |value: &Option<String>| value.as_deref().map(RawField::from);
            Ok(DensityUncertaintyRequest {
                measured_value: raw(measured),
                calibration: raw(calibration),
                resolution: raw(resolution),
                drift: raw(drift),
            })
        }
        RequestSource::File(path) => {
            let text = read_input(path)?;
            Ok(DensityUncertaintyRequest::from_json(&text)?)
        }
    }
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    if !Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Serialise `value` to `out` followed by a newline
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use gum_core::{InputField, UncertaintyError};
    use serde_json::Value;

    fn config(samples: usize) -> CliConfig {
        let mut config = CliConfig::default();
        config.uncertainty.sample_count = samples;
        config.uncertainty.seed = Some(42);
        config
    }

    fn values(m: &str, c: &str, r: &str, d: &str) -> RequestSource {
        RequestSource::Values {
            measured: Some(m.to_string()),
            calibration: Some(c.to_string()),
            resolution: Some(r.to_string()),
            drift: Some(d.to_string()),
        }
    }

    fn run_to_json(source: &RequestSource, config: &CliConfig, options: OutputOptions) -> Value {
        let mut out: Vec<u8> = Vec::new();
        run(source, config, options, &mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_compute_from_values() {
        let json = run_to_json(
            &values("0.5", "0.002", "0.0001", "0.0001"),
            &config(10_000),
            OutputOptions::default(),
        );

        assert_eq!(json["valor_medido"], 0.5);
        assert_eq!(json["histograma_data"].as_array().unwrap().len(), 10_000);
        assert!(json["incertidumbre_expandida"].as_f64().unwrap() > 0.0);
        assert!(json.get("summary").is_none());
    }

    #[test]
    fn test_compute_with_summary() {
        let mut config = config(10_000);
        config.uncertainty.histogram_bins = 12;
        let json = run_to_json(
            &values("0.5", "0.002", "0.0001", "0.0001"),
            &config,
            OutputOptions {
                summary: true,
                pretty: true,
            },
        );

        let summary = &json["summary"];
        assert_eq!(summary["histogram"].as_array().unwrap().len(), 12);
        assert_eq!(summary["sample_count"], 10_000);
        assert_eq!(summary["seed"], 42);
        assert_relative_eq!(
            summary["incertidumbre_expandida"].as_f64().unwrap(),
            json["incertidumbre_expandida"].as_f64().unwrap()
        );
    }

    #[test]
    fn test_compute_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"valor_medido": 1.0, "incertidumbre_calibracion": 0,
                "incertidumbre_resolucion": 0, "incertidumbre_deriva": 0}}"#
        )
        .unwrap();

        let source = RequestSource::File(file.path().display().to_string());
        let json = run_to_json(&source, &config(100), OutputOptions::default());
        assert_eq!(json["incertidumbre_expandida"], 0.0);
        assert!(json["histograma_data"]
            .as_array()
            .unwrap()
            .iter()
            .all(|x| x.as_f64() == Some(1.0)));
    }

    #[test]
    fn test_missing_value_names_field() {
        let source = RequestSource::Values {
            measured: Some("0.5".to_string()),
            calibration: None,
            resolution: Some("0".to_string()),
            drift: Some("0".to_string()),
        };
        let err = run(&source, &config(10), OutputOptions::default(), &mut Vec::<u8>::new()).unwrap_err();
        assert_eq!(
            err.as_uncertainty().and_then(UncertaintyError::field),
            Some(InputField::Calibration)
        );
    }

    #[test]
    fn test_negative_uncertainty_writes_nothing() {
        let mut out: Vec<u8> = Vec::new();
        let err = run(
            &values("0.5", "0.002", "-0.0001", "0.0001"),
            &config(10),
            OutputOptions::default(),
            &mut out,
        )
        .unwrap_err();
        assert!(out.is_empty());
        assert_eq!(
            err.as_uncertainty().and_then(UncertaintyError::field),
            Some(InputField::Resolution)
        );
    }

    #[test]
    fn test_missing_file() {
        let source = RequestSource::File("/nonexistent/request.json".to_string());
        let err = run(&source, &config(10), OutputOptions::default(), &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }
}
