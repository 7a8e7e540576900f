//! Per-feature transformation pipelines.
//!
//! The pipeline has three phases, each completing before the next begins:
//!
//! 1. **Collect**: [`StatisticsCollector`] scans the dataset for the
//!    statistics the configured transformations need.
//! 2. **Compile**: [`TransformationMap::compile`] binds every
//!    [`Transformation`] to those statistics, producing a [`TransformerMap`].
//! 3. **Apply**: [`TransformerMap::transform_dataset`] maps every feature of
//!    every example through its transformer chain into a new dataset.
//!
//! # Available Transformations
//!
//! | Transformation | Statistics | Description |
//! |----------------|------------|-------------|
//! | [`LinearScalingTransformation`] | yes | Min-max scaling into a target range |
//! | [`SimpleTransform`] | no | add/sub/mul/div by a constant, exp, log, binarise, threshold |
//! | [`MeanStdStandardizer`] | yes | Rescale to a target mean and standard deviation |
//! | [`BinningTransformation`] | yes | Equal-width, equal-frequency or std-dev bins |
//!
//! # Example
//!
//! ```rust
//! use feature_transforms::dataset::{Dataset, Example, InMemoryDataset};
//! use feature_transforms::transform::{
//!     LinearScalingTransformation, SimpleTransform, TransformationMap,
//! };
//!
//! let mut train = InMemoryDataset::new();
//! for v in [0.0, 2.0, 4.0] {
//!     train.add(Example::from_arrays((), &["F0"], &[v]).unwrap());
//! }
//!
//! let map = TransformationMap::new().with_global(vec![
//!     LinearScalingTransformation::new().into(),
//!     SimpleTransform::mul(5.0).into(),
//!     SimpleTransform::sub(2.5).into(),
//! ]);
//!
//! let transformers = map.compile(&train).unwrap();
//! let scaled = transformers.transform_dataset(&train);
//! assert_eq!(scaled.len(), train.len());
//! assert_eq!(scaled.examples()[0].value_of("F0"), Some(-2.5));
//! ```

pub mod error;
pub mod statistics;
pub mod traits;
pub mod transformation_map;
pub mod transformations;
pub mod transformer_map;

pub use error::{Result, TransformError};
pub use statistics::{FeatureStatistics, StatisticsCollector, StatisticsRequest, StatisticsSnapshot};
pub use traits::{Transformation, Transformer};
pub use transformation_map::{CompileOptions, FeatureListPolicy, TransformationMap};
pub use transformations::{
    apply_chain, BinningKind, BinningTransformation, BinningTransformer,
    LinearScalingTransformation, LinearScalingTransformer, MeanStdStandardizer,
    MeanStdTransformer, SimpleTransform, TransformationKind, TransformerKind,
};
pub use transformer_map::TransformerMap;
