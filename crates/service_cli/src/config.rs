//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.
//!
//! A configuration file looks like:
//!
//! ```toml
//! log_level = "info"
//!
//! [uncertainty]
//! coverage_factor = 2.0
//! confidence = 0.95
//! sample_count = 100000
//! histogram_bins = 50
//! parallel = true
//! ```

use gum_core::{UncertaintyConfig, UncertaintyError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "GUM_";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),

    #[error(transparent)]
    Invalid(#[from] UncertaintyError),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Propagation parameters
    pub uncertainty: UncertaintyConfig,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}{}={:?} is not valid", ENV_PREFIX, key, value)))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::EnvError(format!(
            "{}{}={:?} is not a boolean",
            ENV_PREFIX, key, value
        ))),
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply `GUM_*` overrides. `lookup` maps an unprefixed key such as
    /// `SAMPLE_COUNT` to its value.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(v) = lookup("SAMPLE_COUNT") {
            self.uncertainty.sample_count = parse_env("SAMPLE_COUNT", &v)?;
        }
        if let Some(v) = lookup("SEED") {
            self.uncertainty.seed = Some(parse_env("SEED", &v)?);
        }
        if let Some(v) = lookup("CONFIDENCE") {
            self.uncertainty.confidence = parse_env("CONFIDENCE", &v)?;
        }
        if let Some(v) = lookup("COVERAGE_FACTOR") {
            self.uncertainty.coverage_factor = parse_env("COVERAGE_FACTOR", &v)?;
        }
        if let Some(v) = lookup("HISTOGRAM_BINS") {
            self.uncertainty.histogram_bins = parse_env("HISTOGRAM_BINS", &v)?;
        }
        if let Some(v) = lookup("PARALLEL") {
            self.uncertainty.parallel = parse_bool("PARALLEL", &v)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.uncertainty.validate()?;
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        } else if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(samples) = cli.sample_count {
            self.uncertainty.sample_count = samples;
        }
        if let Some(seed) = cli.seed {
            self.uncertainty.seed = Some(seed);
        }
        if let Some(confidence) = cli.confidence {
            self.uncertainty.confidence = confidence;
        }
        if let Some(k) = cli.coverage_factor {
            self.uncertainty.coverage_factor = k;
        }
        if let Some(bins) = cli.histogram_bins {
            self.uncertainty.histogram_bins = bins;
        }
        if cli.sequential {
            self.uncertainty.parallel = false;
        }
        Ok(())
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Debug logging unless a level is given
    pub verbose: bool,
    /// Sample count override
    pub sample_count: Option<usize>,
    /// Seed override
    pub seed: Option<u64>,
    /// Confidence override
    pub confidence: Option<f64>,
    /// Coverage factor override
    pub coverage_factor: Option<f64>,
    /// Histogram bin override
    pub histogram_bins: Option<usize>,
    /// Disable parallel sampling
    pub sequential: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |key| {
        std::env::var(format!("{}{}", ENV_PREFIX, key)).ok()
    })
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = if let Some(config_path) = &cli.config_file {
        CliConfig::from_file(config_path)?
    } else {
        CliConfig::default()
    };

    config.apply_env_with(lookup)?;
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.uncertainty, UncertaintyConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Trace), "trace");
        assert_eq!(format!("{}", LogLevel::Error), "error");
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"

            [uncertainty]
            coverage_factor = 3.0
            confidence = 0.99
            sample_count = 5000
            seed = 17
            histogram_bins = 20
            parallel = false
        "#;

        let config = CliConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.uncertainty.coverage_factor, 3.0);
        assert_eq!(config.uncertainty.confidence, 0.99);
        assert_eq!(config.uncertainty.sample_count, 5000);
        assert_eq!(config.uncertainty.seed, Some(17));
        assert_eq!(config.uncertainty.histogram_bins, 20);
        assert!(!config.uncertainty.parallel);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let toml_str = r#"
            [uncertainty]
            sample_count = 9000
        "#;

        let config = CliConfig::from_toml(toml_str).unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.uncertainty.sample_count, 9000);
        assert_eq!(config.uncertainty.coverage_factor, 2.0);
        assert_eq!(config.uncertainty.seed, None);
    }

    #[test]
    fn test_toml_rejects_invalid_values() {
        assert!(matches!(
            CliConfig::from_toml("log_level = \"loud\""),
            Err(ConfigError::FileError(_))
        ));
        assert!(matches!(
            CliConfig::from_toml("[uncertainty]\nconfidence = 1.5"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = CliConfig::default();
        config.uncertainty.seed = Some(5);
        let text = toml::to_string(&config).unwrap();
        assert_eq!(CliConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_env_with(env(&[
                ("LOG_LEVEL", "info"),
                ("SAMPLE_COUNT", "2500"),
                ("SEED", "11"),
                ("CONFIDENCE", "0.9"),
                ("COVERAGE_FACTOR", "2.5"),
                ("HISTOGRAM_BINS", "10"),
                ("PARALLEL", "false"),
            ]))
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.uncertainty.sample_count, 2500);
        assert_eq!(config.uncertainty.seed, Some(11));
        assert_eq!(config.uncertainty.confidence, 0.9);
        assert_eq!(config.uncertainty.coverage_factor, 2.5);
        assert_eq!(config.uncertainty.histogram_bins, 10);
        assert!(!config.uncertainty.parallel);
    }

    #[test]
    fn test_env_rejects_garbage() {
        let mut config = CliConfig::default();
        let err = config
            .apply_env_with(env(&[("SAMPLE_COUNT", "lots")]))
            .unwrap_err();
        assert!(err.to_string().contains("GUM_SAMPLE_COUNT"));

        assert!(config
            .apply_env_with(env(&[("PARALLEL", "maybe")]))
            .is_err());
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            log_level: Some("error".to_string()),
            sample_count: Some(1234),
            seed: Some(9),
            confidence: Some(0.99),
            coverage_factor: Some(3.0),
            histogram_bins: Some(7),
            sequential: true,
            ..Default::default()
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.uncertainty.sample_count, 1234);
        assert_eq!(config.uncertainty.seed, Some(9));
        assert_eq!(config.uncertainty.confidence, 0.99);
        assert_eq!(config.uncertainty.coverage_factor, 3.0);
        assert_eq!(config.uncertainty.histogram_bins, 7);
        assert!(!config.uncertainty.parallel);
    }

    #[test]
    fn test_verbose_yields_to_explicit_level() {
        let mut config = CliConfig::default();
        config
            .merge_with_cli(&CliArgs {
                verbose: true,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);

        config
            .merge_with_cli(&CliArgs {
                verbose: true,
                log_level: Some("trace".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Trace);
    }

    #[test]
    fn test_precedence_cli_over_env_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[uncertainty]\nsample_count = 100\nseed = 1\nhistogram_bins = 5").unwrap();

        let cli = CliArgs {
            config_file: Some(file.path().to_path_buf()),
            seed: Some(3),
            ..Default::default()
        };
        let config =
            build_config_with(&cli, env(&[("SAMPLE_COUNT", "200"), ("SEED", "2")])).unwrap();

        assert_eq!(config.uncertainty.histogram_bins, 5);
        assert_eq!(config.uncertainty.sample_count, 200);
        assert_eq!(config.uncertainty.seed, Some(3));
    }

    #[test]
    fn test_build_config_with_defaults() {
        let config = build_config_with(&CliArgs::default(), env(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_build_config_validates_merged_result() {
        let cli = CliArgs {
            sample_count: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            build_config_with(&cli, env(&[])),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/gum.toml")),
            ..Default::default()
        };
        assert!(matches!(
            build_config_with(&cli, env(&[])),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidLogLevel("bad".to_string());
        assert!(err.to_string().contains("Invalid log level"));

        let err = ConfigError::EnvError("GUM_SEED".to_string());
        assert!(err.to_string().contains("Environment variable error"));
    }
}
