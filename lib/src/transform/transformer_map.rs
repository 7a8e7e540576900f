//! Compiled, ready-to-apply transformers keyed by feature name.

use crate::dataset::{Dataset, Example};
use crate::transform::transformations::{apply_chain, TransformerKind};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Ordered transformer chains per feature name.
///
/// Built once by [`TransformationMap::compile`](crate::transform::TransformationMap::compile)
/// and never mutated afterwards. The same map can be applied to the dataset
/// it was compiled from and to any other dataset sharing its feature names,
/// which keeps train and test data on the same scale.
///
/// Features without an entry pass through unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformerMap {
    transformers: BTreeMap<String, Vec<TransformerKind>>,
}

impl TransformerMap {
    pub fn new(transformers: BTreeMap<String, Vec<TransformerKind>>) -> Self {
        Self { transformers }
    }

    /// The chain for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&[TransformerKind]> {
        self.transformers.get(name).map(Vec::as_slice)
    }

    /// Number of features with a chain.
    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }

    /// Feature names with a chain, sorted.
    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.transformers.keys().map(String::as_str)
    }

    /// Apply the chain for `name` to `value`; identity when `name` has no chain.
    pub fn transform_value(&self, name: &str, value: f64) -> f64 {
        match self.transformers.get(name) {
            Some(chain) => apply_chain(chain, value),
            None => value,
        }
    }

    /// Transform every feature of `example`, keeping names, order and output.
    pub fn transform_example<O: Clone>(&self, example: &Example<O>) -> Example<O> {
        let features = example
            .iter()
            .map(|f| f.with_value(self.transform_value(f.name(), f.value())))
            .collect();
        Example::new(example.output().clone(), features)
    }

    /// Transform every example, returning a new dataset of the same type.
    ///
    /// The input dataset is left untouched.
    pub fn transform_dataset<D: Dataset>(&self, dataset: &D) -> D {
        debug!(
            examples = dataset.len(),
            features = self.len(),
            "transforming dataset"
        );
        let examples = dataset
            .examples()
            .iter()
            .map(|e| self.transform_example(e))
            .collect();
        D::from_examples(examples)
    }

    /// [`TransformerMap::transform_dataset`] spread across the rayon thread pool.
    ///
    /// Output order matches input order.
    pub fn par_transform_dataset<D>(&self, dataset: &D) -> D
    where
        D: Dataset,
        D::Output: Send + Sync,
    {
        debug!(
            examples = dataset.len(),
            features = self.len(),
            "transforming dataset in parallel"
        );
        let examples = dataset
            .examples()
            .par_iter()
            .map(|e| self.transform_example(e))
            .collect();
        D::from_examples(examples)
    }
}

impl fmt::Display for TransformerMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TransformerMap({} features)", self.transformers.len())?;
        for (name, chain) in &self.transformers {
            let rendered: Vec<String> = chain.iter().map(ToString::to_string).collect();
            writeln!(f, "  {}: [{}]", name, rendered.join(", "))?;
        }
        Ok(())
    }
}
