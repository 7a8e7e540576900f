//! Concrete transformations and their bound transformers.
//!
//! | Transformation | Statistics | Bound as |
//! |----------------|------------|----------|
//! | [`LinearScalingTransformation`] | min, max | [`LinearScalingTransformer`] |
//! | [`SimpleTransform`] | none | itself |
//! | [`MeanStdStandardizer`] | mean, std | [`MeanStdTransformer`] |
//! | [`BinningTransformation`] | min/max, mean/std or sorted values | [`BinningTransformer`] |
//!
//! [`TransformationKind`] and [`TransformerKind`] close over these variants so
//! that configurations and compiled maps can be stored, compared and serialised.

pub mod binning;
pub mod linear_scaling;
pub mod simple;
pub mod standardizer;

pub use binning::{BinningKind, BinningTransformation, BinningTransformer};
pub use linear_scaling::{LinearScalingTransformation, LinearScalingTransformer};
pub use simple::SimpleTransform;
pub use standardizer::{MeanStdStandardizer, MeanStdTransformer};

use crate::transform::error::{Result, TransformError};
use crate::transform::statistics::FeatureStatistics;
use crate::transform::traits::{Transformation, Transformer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Any supported transformation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformationKind {
    LinearScaling(LinearScalingTransformation),
    Simple(SimpleTransform),
    MeanStd(MeanStdStandardizer),
    Binning(BinningTransformation),
}

impl TransformationKind {
    fn inner(&self) -> &dyn Transformation {
        match self {
            TransformationKind::LinearScaling(t) => t,
            TransformationKind::Simple(t) => t,
            TransformationKind::MeanStd(t) => t,
            TransformationKind::Binning(t) => t,
        }
    }
}

impl Transformation for TransformationKind {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn requires_statistics(&self) -> bool {
        self.inner().requires_statistics()
    }

    fn retains_values(&self) -> bool {
        self.inner().retains_values()
    }

    fn validate(&self) -> Result<()> {
        self.inner().validate()
    }

    fn create_transformer(&self, stats: Option<&FeatureStatistics>) -> Result<TransformerKind> {
        self.inner().create_transformer(stats)
    }
}

impl From<LinearScalingTransformation> for TransformationKind {
    fn from(t: LinearScalingTransformation) -> Self {
        TransformationKind::LinearScaling(t)
    }
}

impl From<SimpleTransform> for TransformationKind {
    fn from(t: SimpleTransform) -> Self {
        TransformationKind::Simple(t)
    }
}

impl From<MeanStdStandardizer> for TransformationKind {
    fn from(t: MeanStdStandardizer) -> Self {
        TransformationKind::MeanStd(t)
    }
}

impl From<BinningTransformation> for TransformationKind {
    fn from(t: BinningTransformation) -> Self {
        TransformationKind::Binning(t)
    }
}

/// Any bound transformer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformerKind {
    LinearScaling(LinearScalingTransformer),
    Simple(SimpleTransform),
    MeanStd(MeanStdTransformer),
    Binning(BinningTransformer),
}

impl Transformer for TransformerKind {
    fn name(&self) -> &'static str {
        match self {
            TransformerKind::LinearScaling(t) => t.name(),
            TransformerKind::Simple(t) => Transformer::name(t),
            TransformerKind::MeanStd(t) => t.name(),
            TransformerKind::Binning(t) => t.name(),
        }
    }

    fn transform(&self, value: f64) -> f64 {
        match self {
            TransformerKind::LinearScaling(t) => t.transform(value),
            TransformerKind::Simple(t) => t.transform(value),
            TransformerKind::MeanStd(t) => t.transform(value),
            TransformerKind::Binning(t) => t.transform(value),
        }
    }
}

impl fmt::Display for TransformerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformerKind::LinearScaling(t) => fmt::Display::fmt(t, f),
            TransformerKind::Simple(t) => fmt::Display::fmt(t, f),
            TransformerKind::MeanStd(t) => fmt::Display::fmt(t, f),
            TransformerKind::Binning(t) => fmt::Display::fmt(t, f),
        }
    }
}

/// Apply `chain` left to right: `chain[n-1](...chain[1](chain[0](value)))`.
pub fn apply_chain(chain: &[TransformerKind], value: f64) -> f64 {
    chain.iter().fold(value, |acc, t| t.transform(acc))
}

/// Unwrap the statistics a statistics-driven transformation was handed.
pub(crate) fn require_stats<'a, T: Transformation + ?Sized>(
    transformation: &T,
    stats: Option<&'a FeatureStatistics>,
) -> Result<&'a FeatureStatistics> {
    match stats {
        Some(stats) if stats.count() > 0 => Ok(stats),
        Some(_) => Err(TransformError::EmptyData(format!(
            "{} bound to statistics with no observations",
            transformation.name()
        ))),
        None => Err(TransformError::InvalidParameter(format!(
            "{} requires feature statistics",
            transformation.name()
        ))),
    }
}
