//! Stateless element-wise transformations.
//!
//! A [`SimpleTransform`] needs no statistics, so it is both the
//! transformation and its own bound transformer.

use super::TransformerKind;
use crate::transform::error::{Result, TransformError};
use crate::transform::statistics::FeatureStatistics;
use crate::transform::traits::{Transformation, Transformer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Constant-operand and unary operations on a single value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimpleTransform {
    /// `x + c`
    Add(f64),
    /// `x - c`
    Sub(f64),
    /// `x * c`
    Mul(f64),
    /// `x / c`; a zero divisor is rejected when the transformer is created.
    Div(f64),
    /// `e^x`
    Exp,
    /// Natural logarithm.
    Log,
    /// `1` for strictly positive values, `0` otherwise.
    Binarise,
    /// Clamp into `[min, max]`.
    Threshold { min: f64, max: f64 },
}

impl SimpleTransform {
    pub fn add(operand: f64) -> Self {
        SimpleTransform::Add(operand)
    }

    pub fn sub(operand: f64) -> Self {
        SimpleTransform::Sub(operand)
    }

    pub fn mul(operand: f64) -> Self {
        SimpleTransform::Mul(operand)
    }

    pub fn div(operand: f64) -> Self {
        SimpleTransform::Div(operand)
    }

    pub fn exp() -> Self {
        SimpleTransform::Exp
    }

    pub fn log() -> Self {
        SimpleTransform::Log
    }

    pub fn binarise() -> Self {
        SimpleTransform::Binarise
    }

    pub fn threshold(min: f64, max: f64) -> Self {
        SimpleTransform::Threshold { min, max }
    }
}

impl Transformation for SimpleTransform {
    fn name(&self) -> &'static str {
        Transformer::name(self)
    }

    fn requires_statistics(&self) -> bool {
        false
    }

    fn validate(&self) -> Result<()> {
        match *self {
            SimpleTransform::Div(c) if c == 0.0 => Err(TransformError::DivisionByZero),
            SimpleTransform::Threshold { min, max } if min.is_nan() || max.is_nan() => {
                Err(TransformError::InvalidParameter(
                    "threshold bounds must not be NaN".to_string(),
                ))
            }
            SimpleTransform::Threshold { min, max } if min > max => {
                Err(TransformError::InvalidParameter(format!(
                    "threshold min ({}) must not exceed max ({})",
                    min, max
                )))
            }
            _ => Ok(()),
        }
    }

    fn create_transformer(&self, _stats: Option<&FeatureStatistics>) -> Result<TransformerKind> {
        self.validate()?;
        Ok(TransformerKind::Simple(*self))
    }
}

impl Transformer for SimpleTransform {
    fn name(&self) -> &'static str {
        match self {
            SimpleTransform::Add(_) => "add",
            SimpleTransform::Sub(_) => "sub",
            SimpleTransform::Mul(_) => "mul",
            SimpleTransform::Div(_) => "div",
            SimpleTransform::Exp => "exp",
            SimpleTransform::Log => "log",
            SimpleTransform::Binarise => "binarise",
            SimpleTransform::Threshold { .. } => "threshold",
        }
    }

    fn transform(&self, value: f64) -> f64 {
        match *self {
            SimpleTransform::Add(c) => value + c,
            SimpleTransform::Sub(c) => value - c,
            SimpleTransform::Mul(c) => value * c,
            SimpleTransform::Div(c) => value / c,
            SimpleTransform::Exp => value.exp(),
            SimpleTransform::Log => value.ln(),
            SimpleTransform::Binarise => {
                if value > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            SimpleTransform::Threshold { min, max } => value.clamp(min, max),
        }
    }
}

impl fmt::Display for SimpleTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimpleTransform::Add(c)
            | SimpleTransform::Sub(c)
            | SimpleTransform::Mul(c)
            | SimpleTransform::Div(c) => write!(f, "{}({})", Transformer::name(self), c),
            SimpleTransform::Threshold { min, max } => write!(f, "threshold({}, {})", min, max),
            _ => write!(f, "{}", Transformer::name(self)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_operations() {
        assert_eq!(SimpleTransform::add(5.0).transform(1.0), 6.0);
        assert_eq!(SimpleTransform::sub(5.0).transform(1.0), -4.0);
        assert_eq!(SimpleTransform::mul(5.0).transform(2.0), 10.0);
        assert_eq!(SimpleTransform::div(5.0).transform(10.0), 2.0);
    }

    #[test]
    fn test_unary_operations() {
        assert_eq!(SimpleTransform::exp().transform(0.0), 1.0);
        assert_eq!(SimpleTransform::log().transform(1.0), 0.0);
        assert_eq!(SimpleTransform::binarise().transform(0.3), 1.0);
        assert_eq!(SimpleTransform::binarise().transform(0.0), 0.0);
        assert_eq!(SimpleTransform::binarise().transform(-2.0), 0.0);
    }

    #[test]
    fn test_threshold_clamps() {
        let t = SimpleTransform::threshold(-1.0, 1.0);
        assert_eq!(t.transform(-3.0), -1.0);
        assert_eq!(t.transform(0.5), 0.5);
        assert_eq!(t.transform(3.0), 1.0);
    }

    #[test]
    fn test_div_by_zero_rejected_at_construction() {
        let div = SimpleTransform::div(0.0);
        assert!(matches!(div.validate(), Err(TransformError::DivisionByZero)));
        assert!(matches!(
            div.create_transformer(None),
            Err(TransformError::DivisionByZero)
        ));
        // negative zero is still zero
        assert!(SimpleTransform::div(-0.0).validate().is_err());
    }

    #[test]
    fn test_inverted_threshold_rejected() {
        let t = SimpleTransform::threshold(2.0, 1.0);
        assert!(matches!(
            t.validate(),
            Err(TransformError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_nan_threshold_bound_rejected() {
        for t in [
            SimpleTransform::threshold(f64::NAN, 1.0),
            SimpleTransform::threshold(0.0, f64::NAN),
        ] {
            assert!(matches!(
                t.validate(),
                Err(TransformError::InvalidParameter(_))
            ));
            assert!(t.create_transformer(None).is_err());
        }
    }

    #[test]
    fn test_stateless_ignores_statistics() {
        let add = SimpleTransform::add(1.0);
        assert!(!add.requires_statistics());
        let stats = FeatureStatistics::from_values([100.0, 200.0]);
        let with = add.create_transformer(Some(&stats)).unwrap();
        let without = add.create_transformer(None).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_display() {
        assert_eq!(SimpleTransform::add(5.0).to_string(), "add(5)");
        assert_eq!(SimpleTransform::div(2.5).to_string(), "div(2.5)");
        assert_eq!(SimpleTransform::log().to_string(), "log");
        assert_eq!(
            SimpleTransform::threshold(0.0, 1.0).to_string(),
            "threshold(0, 1)"
        );
    }

    #[test]
    fn test_json_form() {
        let json = serde_json::to_string(&SimpleTransform::add(5.0)).unwrap();
        assert_eq!(json, r#"{"add":5.0}"#);
        let parsed: SimpleTransform = serde_json::from_str(r#""binarise""#).unwrap();
        assert_eq!(parsed, SimpleTransform::Binarise);
    }
}
