//! # feature-transforms
//!
//! Statistics-driven, per-feature numeric transformation pipelines for
//! datasets of named features.
//!
//! ## Core Design Principles
//!
//! - **Declarative configuration**: a [`TransformationMap`] describes what to
//!   do (a global list plus per-feature lists) without touching data.
//! - **Fit/apply separation**: compiling a map against a dataset produces an
//!   immutable [`TransformerMap`] that can be reused on other datasets.
//! - **Immutable in, immutable out**: applying a map returns a new dataset and
//!   never mutates its input.
//! - **Serializable**: configurations and compiled maps are `serde` types and
//!   can be persisted through [`serialization::SerializableParams`].
//!
//! ## Quick Start
//!
//! ```rust
//! use feature_transforms::dataset::{Example, InMemoryDataset};
//! use feature_transforms::transform::{LinearScalingTransformation, TransformationMap};
//!
//! let mut dataset = InMemoryDataset::new();
//! dataset.add(Example::from_arrays("yes", &["age", "income"], &[20.0, 1000.0]).unwrap());
//! dataset.add(Example::from_arrays("no", &["age", "income"], &[60.0, 3000.0]).unwrap());
//!
//! let map = TransformationMap::new().with_global(vec![LinearScalingTransformation::new().into()]);
//! let transformers = map.compile(&dataset).unwrap();
//! let scaled = transformers.transform_dataset(&dataset);
//!
//! assert_eq!(scaled.get(1).unwrap().value_of("age"), Some(1.0));
//! assert_eq!(scaled.get(0).unwrap().output(), &"yes");
//! ```
//!
//! ## Module Structure
//!
//! - `dataset`: `Feature`, `Example`, the `Dataset` trait and `InMemoryDataset`
//! - `transform`: transformations, statistics collection, compilation and application
//! - `serialization`: byte and file persistence

/// Named-feature dataset abstractions.
pub mod dataset;

/// Transformation configuration, statistics, compilation and application.
pub mod transform;

/// Persistence of configurations and compiled maps.
pub mod serialization;

pub use dataset::{Dataset, Example, Feature, InMemoryDataset};
pub use transform::{
    TransformError, TransformationKind, TransformationMap, TransformerKind, TransformerMap,
};
