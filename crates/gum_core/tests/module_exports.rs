//! Integration tests for module exports.
//!
//! Verifies that public modules and types are reachable both through the
//! crate-root re-exports and through their absolute module paths.

use gum_core::{Distribution, InputField, UncertainQuantity, UncertaintyConfig, UncertaintyError};

/// Test that the distribution module is accessible via absolute path.
#[test]
fn test_distribution_module_exports() {
    use gum_core::distribution::Distribution as ModuleDistribution;

    let dist: ModuleDistribution = Distribution::centered_scaled(0.5).unwrap();
    assert_eq!(dist.standard_uncertainty(), 0.5);
}

/// Test that the quantity and config modules are accessible via absolute path.
#[test]
fn test_quantity_and_config_exports() {
    use gum_core::config::{DEFAULT_CONFIDENCE, DEFAULT_COVERAGE_FACTOR, MAX_SAMPLES};
    use gum_core::quantity::UncertainQuantity as ModuleQuantity;

    let q: ModuleQuantity = UncertainQuantity::exact(1.0);
    assert_eq!(q.nominal_value(), 1.0);

    let config = UncertaintyConfig::default();
    assert_eq!(config.confidence, DEFAULT_CONFIDENCE);
    assert_eq!(config.coverage_factor, DEFAULT_COVERAGE_FACTOR);
    assert!(config.sample_count <= MAX_SAMPLES);
}

/// Test that error types are accessible via absolute path.
#[test]
fn test_error_exports() {
    use gum_core::types::error::UncertaintyError as ModuleError;

    let err: ModuleError = UncertaintyError::invalid_input(InputField::Drift, "missing");
    assert_eq!(err.field(), Some(InputField::Drift));
}

/// Building the density contributors from core types alone.
#[test]
fn test_compose_density_contributors() {
    let measured = UncertainQuantity::exact(0.5);
    let calibration = UncertainQuantity::error_term(Distribution::centered_scaled(0.001).unwrap());
    let resolution =
        UncertainQuantity::error_term(Distribution::uniform_symmetric(0.0, 0.00005).unwrap());
    let drift =
        UncertainQuantity::error_term(Distribution::uniform_symmetric(0.0, 0.00005).unwrap());

    let composite = measured + calibration + resolution + drift;

    assert_eq!(composite.nominal_value(), 0.5);
    assert_eq!(composite.terms().len(), 4);
    assert!(composite.validate().is_ok());
}
