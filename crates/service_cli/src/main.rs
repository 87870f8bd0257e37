//! gum CLI - Density Measurement Uncertainty
//!
//! Operational entry point for Monte Carlo uncertainty estimation of density
//! readings.
//!
//! # Commands
//!
//! - `gum compute --measured <v> --calibration <v> --resolution <v> --drift <v>` -
//!   Estimate the expanded uncertainty of one reading
//! - `gum compute --input <file.json>` - Same, from a JSON request
//! - `gum check` - Print the effective configuration and self-check the engine
//!
//! Results are written to stdout as JSON. Logs go to stderr. A rejected
//! request prints `{"error": ..., "field": ..., "message": ...}` and exits
//! with status 2.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use gum_density::ErrorResponse;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::compute::{OutputOptions, RequestSource};
use config::{build_config, CliArgs};

/// Exit status for rejected requests and invalid parameters
const EXIT_INVALID: u8 = 2;

/// Density measurement uncertainty CLI
#[derive(Parser)]
#[command(name = "gum")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(flatten)]
    simulation: SimulationArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Propagation overrides shared by every command
#[derive(Args)]
struct SimulationArgs {
    /// Number of Monte Carlo samples
    #[arg(short = 'n', long = "samples", global = true)]
    samples: Option<usize>,

    /// Base seed for a reproducible population
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Coverage probability in (0, 1)
    #[arg(long, global = true)]
    confidence: Option<f64>,

    /// Coverage factor applied to the calibration limit
    #[arg(short = 'k', long, global = true)]
    coverage_factor: Option<f64>,

    /// Histogram bins for --summary
    #[arg(long, global = true)]
    histogram_bins: Option<usize>,

    /// Generate samples on the calling thread only
    #[arg(long, global = true)]
    sequential: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the expanded uncertainty of a density reading
    Compute {
        /// Measured density (valor_medido)
        #[arg(short, long, allow_hyphen_values = true, conflicts_with = "input")]
        measured: Option<String>,

        /// Calibration uncertainty limit (incertidumbre_calibracion)
        #[arg(long, allow_hyphen_values = true, conflicts_with = "input")]
        calibration: Option<String>,

        /// Resolution uncertainty (incertidumbre_resolucion)
        #[arg(long, allow_hyphen_values = true, conflicts_with = "input")]
        resolution: Option<String>,

        /// Drift uncertainty (incertidumbre_deriva)
        #[arg(long, allow_hyphen_values = true, conflicts_with = "input")]
        drift: Option<String>,

        /// JSON request file, or - for stdin
        #[arg(short, long, value_name = "FILE")]
        input: Option<String>,

        /// Append a summary and a pre-binned histogram
        #[arg(long)]
        summary: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Check system configuration and the simulation engine
    Check,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            verbose: cli.verbose,
            sample_count: cli.simulation.samples,
            seed: cli.simulation.seed,
            confidence: cli.simulation.confidence,
            coverage_factor: cli.simulation.coverage_factor,
            histogram_bins: cli.simulation.histogram_bins,
            sequential: cli.simulation.sequential,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    debug!(
        log_level = %config.log_level,
        sample_count = config.uncertainty.sample_count,
        seed = ?config.uncertainty.seed,
        parallel = config.uncertainty.parallel,
        "Configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Compute {
            measured,
            calibration,
            resolution,
            drift,
            input,
            summary,
            pretty,
        } => {
            let source = match input {
                Some(path) => RequestSource::File(path),
                None => RequestSource::Values {
                    measured,
                    calibration,
                    resolution,
                    drift,
                },
            };
            commands::compute::run(&source, &config, OutputOptions { summary, pretty }, &mut out)
        }
        Commands::Check => commands::check::run(&config, &mut out),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let err = match run(cli) {
        Ok(()) => return Ok(ExitCode::SUCCESS),
        Err(err) => err,
    };

    if let Some(rejection) = err.as_uncertainty() {
        let body = ErrorResponse::from(rejection);
        let mut out = std::io::stdout().lock();
        serde_json::to_writer(&mut out, &body)?;
        writeln!(out)?;
        return Ok(ExitCode::from(EXIT_INVALID));
    }
    Err(err.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_overrides_reach_config_args() {
        let cli = Cli::try_parse_from([
            "gum", "compute", "--measured", "0.5", "--calibration", "0.002", "--resolution",
            "0.0001", "--drift", "0.0001", "--samples", "500", "--seed", "7", "--sequential",
        ])
        .unwrap();
        let args = CliArgs::from(&cli);
        assert_eq!(args.sample_count, Some(500));
        assert_eq!(args.seed, Some(7));
        assert!(args.sequential);
    }

    #[test]
    fn test_negative_values_parse_as_text() {
        let cli =
            Cli::try_parse_from(["gum", "compute", "--measured", "-1.5", "--calibration", "-2"])
                .unwrap();
        match cli.command {
            Commands::Compute {
                measured,
                calibration,
                ..
            } => {
                assert_eq!(measured.as_deref(), Some("-1.5"));
                assert_eq!(calibration.as_deref(), Some("-2"));
            }
            Commands::Check => panic!("expected compute"),
        }
    }

    #[test]
    fn test_input_conflicts_with_values() {
        assert!(Cli::try_parse_from(["gum", "compute", "--input", "r.json", "--measured", "1"])
            .is_err());
    }
}
