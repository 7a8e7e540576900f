//! Discretisation into numbered bins.
//!
//! The bound transformer stores the upper edge of every bin and maps a value
//! to the 1-based index of the first bin whose edge is `>= value`. Values
//! beyond the last edge fall into the last bin.
//!
//! | Kind | Edges |
//! |------|-------|
//! | [`BinningKind::EqualWidth`] | `min + (i + 1) * (max - min) / n` |
//! | [`BinningKind::EqualFrequency`] | sorted observations at the `(i + 1) / n` quantiles |
//! | [`BinningKind::StdDevs`] | `mean + (i + 1 - n / 2) * std`, last edge `+inf` |

use super::{require_stats, TransformerKind};
use crate::transform::error::{Result, TransformError};
use crate::transform::statistics::FeatureStatistics;
use crate::transform::traits::{Transformation, Transformer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How bin edges are derived from the statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinningKind {
    EqualWidth,
    EqualFrequency,
    StdDevs,
}

/// Replace each value with the number of the bin it falls into.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinningTransformation {
    pub kind: BinningKind,
    pub num_bins: usize,
}

impl BinningTransformation {
    pub fn equal_width(num_bins: usize) -> Self {
        Self {
            kind: BinningKind::EqualWidth,
            num_bins,
        }
    }

    pub fn equal_frequency(num_bins: usize) -> Self {
        Self {
            kind: BinningKind::EqualFrequency,
            num_bins,
        }
    }

    /// `num_bins` must be even; bins are one standard deviation wide, centred on the mean.
    pub fn std_devs(num_bins: usize) -> Self {
        Self {
            kind: BinningKind::StdDevs,
            num_bins,
        }
    }

    fn edges(&self, stats: &FeatureStatistics) -> Result<Vec<f64>> {
        let n = self.num_bins;
        let mut edges = match self.kind {
            BinningKind::EqualWidth => {
                let width = stats.range() / n as f64;
                (0..n)
                    .map(|i| stats.min() + width * (i + 1) as f64)
                    .collect::<Vec<_>>()
            }
            BinningKind::EqualFrequency => {
                let values = stats.values().ok_or_else(|| {
                    TransformError::InvalidParameter(
                        "equal-frequency binning requires retained values".to_string(),
                    )
                })?;
                if values.is_empty() {
                    return Err(TransformError::EmptyData(
                        "equal-frequency binning over zero observations".to_string(),
                    ));
                }
                let len = values.len();
                (0..n)
                    .map(|i| values[((i + 1) * len).div_ceil(n) - 1])
                    .collect()
            }
            BinningKind::StdDevs => {
                let std = stats.std_dev();
                let half = (n / 2) as f64;
                (0..n)
                    .map(|i| stats.mean() + ((i + 1) as f64 - half) * std)
                    .collect()
            }
        };
        if let Some(last) = edges.last_mut() {
            *last = match self.kind {
                BinningKind::StdDevs => f64::INFINITY,
                _ => stats.max(),
            };
        }
        Ok(edges)
    }
}

impl Transformation for BinningTransformation {
    fn name(&self) -> &'static str {
        "Binning"
    }

    fn requires_statistics(&self) -> bool {
        true
    }

    fn retains_values(&self) -> bool {
        self.kind == BinningKind::EqualFrequency
    }

    fn validate(&self) -> Result<()> {
        if self.num_bins == 0 {
            return Err(TransformError::InvalidParameter(
                "binning needs at least one bin".to_string(),
            ));
        }
        if self.kind == BinningKind::StdDevs && self.num_bins % 2 != 0 {
            return Err(TransformError::InvalidParameter(format!(
                "standard-deviation binning needs an even number of bins, got {}",
                self.num_bins
            )));
        }
        Ok(())
    }

    fn create_transformer(&self, stats: Option<&FeatureStatistics>) -> Result<TransformerKind> {
        self.validate()?;
        let stats = require_stats(self, stats)?;
        Ok(TransformerKind::Binning(BinningTransformer {
            kind: self.kind,
            edges: self.edges(stats)?,
        }))
    }
}

/// Bound binning transformer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinningTransformer {
    kind: BinningKind,
    edges: Vec<f64>,
}

impl BinningTransformer {
    /// Upper edge of each bin.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn num_bins(&self) -> usize {
        self.edges.len()
    }
}

impl Transformer for BinningTransformer {
    fn name(&self) -> &'static str {
        "Binning"
    }

    fn transform(&self, value: f64) -> f64 {
        let index = self.edges.partition_point(|&edge| edge < value);
        (index.min(self.edges.len().saturating_sub(1)) + 1) as f64
    }
}

impl fmt::Display for BinningTransformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Binning({:?}, edges={:?})", self.kind, self.edges)
    }
}
