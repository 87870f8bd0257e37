//! Uncertain quantities: a nominal value paired with its error model.
//!
//! An [`UncertainQuantity`] is an immutable value object. Composing two of
//! them with [`UncertainQuantity::combine`] adds the nominal values and keeps
//! the independent distribution terms side by side. There is deliberately no
//! closed-form addition of distributions: the convolution of the terms only
//! exists as the population the Monte Carlo engine draws from them.

use std::ops::Add;

use crate::distribution::Distribution;
use crate::types::UncertaintyError;

/// Value plus probability model.
///
/// # Examples
///
/// ```rust
/// use gum_core::{Distribution, UncertainQuantity};
///
/// let reading = UncertainQuantity::exact(998.2);
/// let drift = UncertainQuantity::error_term(
///     Distribution::uniform_symmetric(0.0, 0.05).unwrap(),
/// );
///
/// let composite = reading + drift;
/// assert_eq!(composite.nominal_value(), 998.2);
/// assert_eq!(composite.terms().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UncertainQuantity {
    nominal_value: f64,
    terms: Vec<Distribution>,
}

impl UncertainQuantity {
    /// Creates an elementary quantity from a nominal value and one distribution.
    pub fn new(nominal_value: f64, distribution: Distribution) -> Self {
        Self {
            nominal_value,
            terms: vec![distribution],
        }
    }

    /// A zero-uncertainty quantity whose samples always equal `value`.
    pub fn exact(value: f64) -> Self {
        Self::new(value, Distribution::degenerate(value))
    }

    /// A pure error contributor: nominal value 0.
    pub fn error_term(distribution: Distribution) -> Self {
        Self::new(0.0, distribution)
    }

    /// Deterministic point value.
    #[inline]
    pub fn nominal_value(&self) -> f64 {
        self.nominal_value
    }

    /// Independent distribution terms, in composition order.
    #[inline]
    pub fn terms(&self) -> &[Distribution] {
        &self.terms
    }

    /// The distribution of an elementary quantity.
    ///
    /// Composite quantities have no single distribution until simulated,
    /// so this returns `None` for them.
    pub fn distribution(&self) -> Option<&Distribution> {
        match self.terms.as_slice() {
            [single] => Some(single),
            _ => None,
        }
    }

    /// Returns `true` if no term carries any spread.
    pub fn is_exact(&self) -> bool {
        self.terms.iter().all(Distribution::is_constant)
    }

    /// Composes two independent quantities.
    ///
    /// The nominal value of the result is the sum of both nominal values;
    /// its distribution terms are those of `self` followed by those of `other`.
    pub fn combine(&self, other: &UncertainQuantity) -> UncertainQuantity {
        let mut terms = Vec::with_capacity(self.terms.len() + other.terms.len());
        terms.extend_from_slice(&self.terms);
        terms.extend_from_slice(&other.terms);
        UncertainQuantity {
            nominal_value: self.nominal_value + other.nominal_value,
            terms,
        }
    }

    /// Validates every term.
    ///
    /// # Errors
    ///
    /// Returns the first `InvalidParameter` found, or one naming
    /// `nominal_value` if the nominal value is not finite.
    pub fn validate(&self) -> Result<(), UncertaintyError> {
        if !self.nominal_value.is_finite() {
            return Err(UncertaintyError::invalid_parameter(
                "nominal_value",
                format!("must be finite, got {}", self.nominal_value),
            ));
        }
        self.terms.iter().try_for_each(Distribution::validate)
    }
}

impl Add for UncertainQuantity {
    type Output = UncertainQuantity;

    fn add(self, rhs: UncertainQuantity) -> UncertainQuantity {
        self.combine(&rhs)
    }
}

impl Add<&UncertainQuantity> for &UncertainQuantity {
    type Output = UncertainQuantity;

    fn add(self, rhs: &UncertainQuantity) -> UncertainQuantity {
        self.combine(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(half_width: f64) -> UncertainQuantity {
        UncertainQuantity::error_term(Distribution::uniform_symmetric(0.0, half_width).unwrap())
    }

    #[test]
    fn test_exact_quantity() {
        let q = UncertainQuantity::exact(0.5);
        assert_eq!(q.nominal_value(), 0.5);
        assert_eq!(q.distribution(), Some(&Distribution::Degenerate(0.5)));
        assert!(q.is_exact());
    }

    #[test]
    fn test_combine_sums_nominal_values() {
        let a = UncertainQuantity::new(1.0, Distribution::degenerate(1.0));
        let b = UncertainQuantity::new(2.5, Distribution::degenerate(2.5));
        let c = a.combine(&b);
        assert_eq!(c.nominal_value(), 3.5);
        assert_eq!(c.terms().len(), 2);
        assert_eq!(c.distribution(), None);
    }

    #[test]
    fn test_combine_preserves_term_order() {
        let measured = UncertainQuantity::exact(0.5);
        let composite = &(&measured + &uniform(0.1)) + &uniform(0.2);

        assert_eq!(composite.terms()[0], Distribution::Degenerate(0.5));
        assert_eq!(
            composite.terms()[2],
            Distribution::UniformSymmetric {
                center: 0.0,
                half_width: 0.2
            }
        );
    }

    #[test]
    fn test_combine_leaves_operands_untouched() {
        let a = uniform(0.1);
        let b = uniform(0.2);
        let _ = a.combine(&b);
        assert_eq!(a.terms().len(), 1);
        assert_eq!(b.terms().len(), 1);
    }

    #[test]
    fn test_is_exact_with_spread() {
        let composite = UncertainQuantity::exact(1.0) + uniform(0.1);
        assert!(!composite.is_exact());

        let zeroed = UncertainQuantity::exact(1.0) + uniform(0.0);
        assert!(zeroed.is_exact());
    }

    #[test]
    fn test_validate_rejects_invalid_term() {
        let q = UncertainQuantity::error_term(Distribution::CenteredScaled {
            standard_uncertainty: -1.0,
        });
        assert!(q.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_nominal() {
        let q = UncertainQuantity::new(f64::NAN, Distribution::centered_scaled(0.1).unwrap());
        assert!(matches!(
            q.validate(),
            Err(UncertaintyError::InvalidParameter {
                name: "nominal_value",
                ..
            })
        ));
    }
}
