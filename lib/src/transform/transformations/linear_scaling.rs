//! Linear (min-max) scaling.
//!
//! Rescales each value into a target range using the observed extremes:
//! ```text
//! x_scaled = target_min + (x - x_min) / (x_max - x_min) * (target_max - target_min)
//! ```
//! A constant feature (`x_max == x_min`) maps every value to `target_min`.
//!
//! # Example
//! ```ignore
//! let scaling = LinearScalingTransformation::with_range(-1.0, 1.0)?;
//! let transformer = scaling.create_transformer(Some(&stats))?;
//! let scaled = transformer.transform(value);
//! ```

use super::{require_stats, TransformerKind};
use crate::transform::error::{Result, TransformError};
use crate::transform::statistics::FeatureStatistics;
use crate::transform::traits::{Transformation, Transformer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Min-max scaling into `[target_min, target_max]` (default `[0, 1]`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearScalingTransformation {
    /// Lower end of the target range.
    pub target_min: f64,
    /// Upper end of the target range.
    pub target_max: f64,
}

impl Default for LinearScalingTransformation {
    fn default() -> Self {
        Self {
            target_min: 0.0,
            target_max: 1.0,
        }
    }
}

impl LinearScalingTransformation {
    /// Scale into `[0, 1]`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scale into `[target_min, target_max]`.
    ///
    /// # Errors
    /// Returns [`TransformError::InvalidParameter`] unless both bounds are
    /// finite and `target_max > target_min`.
    pub fn with_range(target_min: f64, target_max: f64) -> Result<Self> {
        let scaling = Self {
            target_min,
            target_max,
        };
        scaling.validate()?;
        Ok(scaling)
    }
}

impl Transformation for LinearScalingTransformation {
    fn name(&self) -> &'static str {
        "LinearScaling"
    }

    fn requires_statistics(&self) -> bool {
        true
    }

    fn validate(&self) -> Result<()> {
        if !self.target_min.is_finite() || !self.target_max.is_finite() {
            return Err(TransformError::InvalidParameter(format!(
                "linear scaling range must be finite, got [{}, {}]",
                self.target_min, self.target_max
            )));
        }
        if self.target_max <= self.target_min {
            return Err(TransformError::InvalidParameter(format!(
                "linear scaling target_max ({}) must be greater than target_min ({})",
                self.target_max, self.target_min
            )));
        }
        Ok(())
    }

    fn create_transformer(&self, stats: Option<&FeatureStatistics>) -> Result<TransformerKind> {
        self.validate()?;
        let stats = require_stats(self, stats)?;
        Ok(TransformerKind::LinearScaling(LinearScalingTransformer {
            observed_min: stats.min(),
            observed_max: stats.max(),
            target_min: self.target_min,
            target_max: self.target_max,
        }))
    }
}

/// Bound min-max scaler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearScalingTransformer {
    observed_min: f64,
    observed_max: f64,
    target_min: f64,
    target_max: f64,
}

impl LinearScalingTransformer {
    /// Minimum observed while fitting.
    pub fn observed_min(&self) -> f64 {
        self.observed_min
    }

    /// Maximum observed while fitting.
    pub fn observed_max(&self) -> f64 {
        self.observed_max
    }

    /// Target range.
    pub fn target_range(&self) -> (f64, f64) {
        (self.target_min, self.target_max)
    }
}

impl Transformer for LinearScalingTransformer {
    fn name(&self) -> &'static str {
        "LinearScaling"
    }

    fn transform(&self, value: f64) -> f64 {
        let range = self.observed_max - self.observed_min;
        if range == 0.0 {
            return self.target_min;
        }
        self.target_min + (value - self.observed_min) / range * (self.target_max - self.target_min)
    }
}

impl fmt::Display for LinearScalingTransformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LinearScaling([{}, {}] -> [{}, {}])",
            self.observed_min, self.observed_max, self.target_min, self.target_max
        )
    }
}
