//! Mean/standard-deviation standardisation.
//!
//! ```text
//! z = (x - mean) / std * target_stddev + target_mean
//! ```
//! `std` is the sample standard deviation observed while fitting. A feature
//! with zero spread maps every value to `target_mean`.

use super::{require_stats, TransformerKind};
use crate::transform::error::{Result, TransformError};
use crate::transform::statistics::FeatureStatistics;
use crate::transform::traits::{Transformation, Transformer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rescale to a target mean and standard deviation (default 0 and 1).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeanStdStandardizer {
    pub target_mean: f64,
    pub target_stddev: f64,
}

impl Default for MeanStdStandardizer {
    fn default() -> Self {
        Self {
            target_mean: 0.0,
            target_stddev: 1.0,
        }
    }
}

impl MeanStdStandardizer {
    /// Standardise to zero mean and unit variance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Standardise to the given mean and standard deviation.
    pub fn with_target(target_mean: f64, target_stddev: f64) -> Result<Self> {
        let standardizer = Self {
            target_mean,
            target_stddev,
        };
        standardizer.validate()?;
        Ok(standardizer)
    }
}

impl Transformation for MeanStdStandardizer {
    fn name(&self) -> &'static str {
        "MeanStd"
    }

    fn requires_statistics(&self) -> bool {
        true
    }

    fn validate(&self) -> Result<()> {
        if !self.target_mean.is_finite() {
            return Err(TransformError::InvalidParameter(format!(
                "target mean must be finite, got {}",
                self.target_mean
            )));
        }
        if !(self.target_stddev.is_finite() && self.target_stddev > 0.0) {
            return Err(TransformError::InvalidParameter(format!(
                "target standard deviation must be positive, got {}",
                self.target_stddev
            )));
        }
        Ok(())
    }

    fn create_transformer(&self, stats: Option<&FeatureStatistics>) -> Result<TransformerKind> {
        self.validate()?;
        let stats = require_stats(self, stats)?;
        Ok(TransformerKind::MeanStd(MeanStdTransformer {
            observed_mean: stats.mean(),
            observed_stddev: stats.std_dev(),
            target_mean: self.target_mean,
            target_stddev: self.target_stddev,
        }))
    }
}

/// Bound standardiser.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeanStdTransformer {
    observed_mean: f64,
    observed_stddev: f64,
    target_mean: f64,
    target_stddev: f64,
}

impl MeanStdTransformer {
    pub fn observed_mean(&self) -> f64 {
        self.observed_mean
    }

    pub fn observed_stddev(&self) -> f64 {
        self.observed_stddev
    }
}

impl Transformer for MeanStdTransformer {
    fn name(&self) -> &'static str {
        "MeanStd"
    }

    fn transform(&self, value: f64) -> f64 {
        if self.observed_stddev == 0.0 {
            return self.target_mean;
        }
        (value - self.observed_mean) / self.observed_stddev * self.target_stddev
            + self.target_mean
    }
}

impl fmt::Display for MeanStdTransformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MeanStd(mean={}, std={} -> mean={}, std={})",
            self.observed_mean, self.observed_stddev, self.target_mean, self.target_stddev
        )
    }
}
