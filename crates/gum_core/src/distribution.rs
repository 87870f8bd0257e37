//! Random-variable models for measurement error contributors.
//!
//! This module provides [`Distribution`], the closed set of probability
//! models a contributor may follow:
//!
//! | Variant | Sample | Standard uncertainty |
//! |---------|--------|----------------------|
//! | `Degenerate(v)` | `v` | `0` |
//! | `UniformSymmetric { center, half_width }` | `U[center - a, center + a]` | `a / √3` |
//! | `CenteredScaled { standard_uncertainty }` | `u · Z`, `Z ~ N(0, 1)` | `u` |
//!
//! The standard uncertainty is the analytic one-sigma spread of the model and
//! is independent of any sampling noise. It exists so simulated populations
//! can be checked against the model they were drawn from.
//!
//! Sampling is generic over [`rand::Rng`] so the engine can drive it with its
//! own seeded generator.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::types::UncertaintyError;

/// Probability model of a single uncertainty term.
///
/// Use the checked constructors ([`Distribution::uniform_symmetric`],
/// [`Distribution::centered_scaled`]) for caller-derived parameters; the
/// engine re-validates every term with [`Distribution::validate`] before it
/// draws a single sample.
///
/// # Examples
///
/// ```rust
/// use gum_core::Distribution;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let uniform = Distribution::uniform_symmetric(1.0, 0.5).unwrap();
/// assert!((uniform.standard_uncertainty() - 0.5 / 3f64.sqrt()).abs() < 1e-15);
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let x = uniform.sample(&mut rng);
/// assert!((0.5..=1.5).contains(&x));
///
/// assert!(Distribution::centered_scaled(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    /// Point mass: every sample equals the value.
    Degenerate(f64),

    /// Uniform density over `[center - half_width, center + half_width]`.
    UniformSymmetric {
        /// Midpoint of the support
        center: f64,
        /// Half the width of the support
        half_width: f64,
    },

    /// Zero-mean normal with the given standard deviation.
    CenteredScaled {
        /// Standard deviation of the normal kernel
        standard_uncertainty: f64,
    },
}

impl Distribution {
    /// Point mass at `value`.
    #[inline]
    pub fn degenerate(value: f64) -> Self {
        Distribution::Degenerate(value)
    }

    /// Symmetric uniform distribution.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `half_width` is negative or either
    /// argument is not finite.
    pub fn uniform_symmetric(center: f64, half_width: f64) -> Result<Self, UncertaintyError> {
        let dist = Distribution::UniformSymmetric { center, half_width };
        dist.validate()?;
        Ok(dist)
    }

    /// Zero-mean normal distribution with standard deviation `standard_uncertainty`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `standard_uncertainty` is negative or not finite.
    pub fn centered_scaled(standard_uncertainty: f64) -> Result<Self, UncertaintyError> {
        let dist = Distribution::CenteredScaled {
            standard_uncertainty,
        };
        dist.validate()?;
        Ok(dist)
    }

    /// Checks the variant's parameters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the offending parameter.
    pub fn validate(&self) -> Result<(), UncertaintyError> {
        match *self {
            Distribution::Degenerate(value) => {
                if !value.is_finite() {
                    return Err(UncertaintyError::invalid_parameter(
                        "value",
                        format!("degenerate value must be finite, got {}", value),
                    ));
                }
            }
            Distribution::UniformSymmetric { center, half_width } => {
                if !center.is_finite() {
                    return Err(UncertaintyError::invalid_parameter(
                        "center",
                        format!("must be finite, got {}", center),
                    ));
                }
                if !half_width.is_finite() || half_width < 0.0 {
                    return Err(UncertaintyError::invalid_parameter(
                        "half_width",
                        format!("must be finite and non-negative, got {}", half_width),
                    ));
                }
            }
            Distribution::CenteredScaled {
                standard_uncertainty,
            } => {
                if !standard_uncertainty.is_finite() || standard_uncertainty < 0.0 {
                    return Err(UncertaintyError::invalid_parameter(
                        "standard_uncertainty",
                        format!(
                            "must be finite and non-negative, got {}",
                            standard_uncertainty
                        ),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Draws a single sample.
    ///
    /// Zero-width and zero-spread variants return their centre exactly and
    /// a `Degenerate` variant never touches the generator.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match *self {
            Distribution::Degenerate(value) => value,
            Distribution::UniformSymmetric { center, half_width } => {
                let u: f64 = rng.gen();
                center + half_width * (2.0 * u - 1.0)
            }
            Distribution::CenteredScaled {
                standard_uncertainty,
            } => {
                let z: f64 = rng.sample(StandardNormal);
                standard_uncertainty * z
            }
        }
    }

    /// Analytic standard uncertainty (one-sigma spread) of the model.
    #[inline]
    pub fn standard_uncertainty(&self) -> f64 {
        match *self {
            Distribution::Degenerate(_) => 0.0,
            Distribution::UniformSymmetric { half_width, .. } => half_width / 3f64.sqrt(),
            Distribution::CenteredScaled {
                standard_uncertainty,
            } => standard_uncertainty,
        }
    }

    /// Analytic mean of the model.
    #[inline]
    pub fn mean(&self) -> f64 {
        match *self {
            Distribution::Degenerate(value) => value,
            Distribution::UniformSymmetric { center, .. } => center,
            Distribution::CenteredScaled { .. } => 0.0,
        }
    }

    /// Returns `true` if every sample is the same value.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.standard_uncertainty() == 0.0
    }
}
