//! Dataset abstractions for named-feature data.
//!
//! This module provides the [`Dataset`] trait consumed by the transformation
//! engine, together with the [`Example`] and [`Feature`] value types.
//!
//! # Core Concepts
//!
//! - **Feature**: A `(name, value)` pair. Immutable once constructed.
//! - **Example**: An ordered list of features plus an opaque output (label).
//! - **Dataset**: An ordered list of examples. Examples need not share the
//!   same features; the union of names forms the dataset's feature universe.
//!
//! # Example
//!
//! ```rust
//! use feature_transforms::dataset::{Dataset, Example, InMemoryDataset};
//!
//! let mut dataset = InMemoryDataset::new();
//! dataset.add(Example::from_arrays("a", &["F0", "F1"], &[1.0, 2.0]).unwrap());
//! dataset.add(Example::from_arrays("b", &["F0"], &[3.0]).unwrap());
//!
//! assert_eq!(dataset.len(), 2);
//! assert_eq!(dataset.feature_names(), vec!["F0".to_string(), "F1".to_string()]);
//! ```

use crate::transform::error::{Result, TransformError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub mod memory;
pub use self::memory::InMemoryDataset;

/// A named numeric measurement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    name: String,
    value: f64,
}

impl Feature {
    /// Create a new feature.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Feature name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Feature value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns a copy of this feature carrying `value` under the same name.
    pub fn with_value(&self, value: f64) -> Self {
        Self {
            name: self.name.clone(),
            value,
        }
    }
}

/// An ordered sequence of features with an opaque output value.
///
/// Feature names are not required to be unique within an example; every
/// occurrence is treated as an independent value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Example<O> {
    output: O,
    features: Vec<Feature>,
}

impl<O> Example<O> {
    /// Create an example from an output and its features.
    pub fn new(output: O, features: Vec<Feature>) -> Self {
        Self { output, features }
    }

    /// Create an example from parallel name and value slices.
    ///
    /// # Errors
    /// Returns [`TransformError::InvalidParameter`] if the slices differ in length.
    pub fn from_arrays<S: AsRef<str>>(output: O, names: &[S], values: &[f64]) -> Result<Self> {
        if names.len() != values.len() {
            return Err(TransformError::InvalidParameter(format!(
                "{} feature names but {} values",
                names.len(),
                values.len()
            )));
        }
        let features = names
            .iter()
            .zip(values)
            .map(|(name, &value)| Feature::new(name.as_ref(), value))
            .collect();
        Ok(Self { output, features })
    }

    /// The output (label) carried by this example.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Features in insertion order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Iterate over the features in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    /// Number of features in this example.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the example has no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Value of the first feature called `name`, if present.
    pub fn value_of(&self, name: &str) -> Option<f64> {
        self.features
            .iter()
            .find(|f| f.name() == name)
            .map(Feature::value)
    }

    /// Whether the example contains a feature called `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.features.iter().any(|f| f.name() == name)
    }

    /// Append a feature.
    pub fn add(&mut self, feature: Feature) {
        self.features.push(feature);
    }
}

impl<'a, O> IntoIterator for &'a Example<O> {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}

/// Abstract interface for an in-memory, ordered collection of examples.
///
/// The transformation engine only reads datasets through this trait and
/// builds transformed copies with [`Dataset::from_examples`], so callers get
/// back the same concrete type they passed in.
pub trait Dataset: Sized {
    /// Opaque output (label) type, passed through untouched.
    type Output: Clone;

    /// Examples in dataset order.
    fn examples(&self) -> &[Example<Self::Output>];

    /// Build a dataset of this type from examples.
    fn from_examples(examples: Vec<Example<Self::Output>>) -> Self;

    /// Number of examples.
    fn len(&self) -> usize {
        self.examples().len()
    }

    /// Checks whether the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distinct feature names in order of first appearance.
    fn feature_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for example in self.examples() {
            for feature in example {
                if seen.insert(feature.name()) {
                    names.push(feature.name().to_string());
                }
            }
        }
        names
    }
}
