//! Core traits for transformations.
//!
//! This module defines the two central traits:
//! - [`Transformation`]: declarative description of a numeric operation. It may
//!   need dataset statistics before it can be bound.
//! - [`Transformer`]: a bound, immutable instance ready to map one value to another.

use crate::transform::error::Result;
use crate::transform::statistics::FeatureStatistics;
use crate::transform::transformations::TransformerKind;

/// Declarative specification of a per-feature numeric operation.
///
/// # Example
/// ```rust
/// use feature_transforms::transform::{
///     FeatureStatistics, LinearScalingTransformation, Transformation, Transformer,
/// };
///
/// let scaling = LinearScalingTransformation::new();
/// assert!(scaling.requires_statistics());
///
/// let stats = FeatureStatistics::from_values([0.0, 5.0, 10.0]);
/// let transformer = scaling.create_transformer(Some(&stats)).unwrap();
/// assert_eq!(transformer.transform(5.0), 0.5);
/// ```
pub trait Transformation {
    /// Short name used in logs and `Display` output.
    fn name(&self) -> &'static str;

    /// Whether binding needs a statistics pass over the dataset.
    fn requires_statistics(&self) -> bool;

    /// Whether the statistics pass must retain every observed value.
    fn retains_values(&self) -> bool {
        false
    }

    /// Check the configured parameters without binding.
    ///
    /// # Errors
    /// Returns [`TransformError`](crate::transform::TransformError) for
    /// configurations that could never produce a valid transformer.
    fn validate(&self) -> Result<()>;

    /// Bind this transformation to concrete parameters.
    ///
    /// Stateless transformations ignore `stats`. Statistics-driven ones fail
    /// with `InvalidParameter` when `stats` is `None`.
    fn create_transformer(&self, stats: Option<&FeatureStatistics>) -> Result<TransformerKind>;
}

/// A bound transformation: a pure `f64 -> f64` function.
///
/// Implementations hold no interior mutability and are safe to share across
/// threads and reuse across examples.
pub trait Transformer: Send + Sync {
    /// Short name used in logs and `Display` output.
    fn name(&self) -> &'static str;

    /// Map one value.
    fn transform(&self, value: f64) -> f64;
}
