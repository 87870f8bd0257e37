//! Check command implementation
//!
//! Prints the effective configuration and runs a small self-check of the
//! simulation engine.

use std::io::Write;

use gum_density::{DensityInputs, DensityUncertaintyEstimator};
use tracing::info;

use crate::config::CliConfig;
use crate::{CliError, Result};

const SELF_CHECK_SAMPLES: usize = 1_000;
const SELF_CHECK_SEED: u64 = 0;

/// Run the check command
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    writeln!(out, "# gum {}", env!("CARGO_PKG_VERSION"))?;
    out.write_all(toml::to_string_pretty(config)?.as_bytes())?;

    self_check(config)?;
    info!("Self-check passed");
    Ok(())
}

/// Runs two fixed readings through the configured engine: one without any
/// spread, which must collapse onto the measured value, and one with spread.
fn self_check(config: &CliConfig) -> Result<()> {
    let mut parameters = config.uncertainty.clone();
    parameters.sample_count = SELF_CHECK_SAMPLES;
    parameters.seed = Some(SELF_CHECK_SEED);
    let estimator = DensityUncertaintyEstimator::new(parameters)?;

    let exact = estimator.estimate(&DensityInputs::new(1.0, 0.0, 0.0, 0.0)?)?;
    if exact.expanded_uncertainty() != 0.0
        || exact.simulation.sample_population.iter().any(|&x| x != 1.0)
    {
        return Err(CliError::CheckFailed(
            "zero-uncertainty reading produced spread".to_string(),
        ));
    }

    let spread = estimator.estimate(&DensityInputs::new(1.0, 0.002, 0.0001, 0.0001)?)?;
    if spread.expanded_uncertainty() <= 0.0 {
        return Err(CliError::CheckFailed(format!(
            "expected positive expanded uncertainty, got {}",
            spread.expanded_uncertainty()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_prints_config() {
        let mut config = CliConfig::default();
        config.uncertainty.sample_count = 2_000;

        let mut out: Vec<u8> = Vec::new();
        run(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# gum "));
        let body: CliConfig = toml::from_str(&text).unwrap();
        assert_eq!(body, config);
    }

    #[test]
    fn test_self_check_with_sequential_engine() {
        let mut config = CliConfig::default();
        config.uncertainty.parallel = false;
        assert!(self_check(&config).is_ok());
    }
}
