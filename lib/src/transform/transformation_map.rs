//! Declarative transformation configuration and its compilation.
//!
//! A [`TransformationMap`] pairs a global list of transformations, applied to
//! every feature, with per-feature lists. [`TransformationMap::compile`] binds
//! it to a dataset's statistics and returns a [`TransformerMap`].
//!
//! # Per-feature lists
//!
//! [`FeatureListPolicy`] decides how a per-feature list combines with the
//! global list:
//! - [`FeatureListPolicy::Replace`] (default): the per-feature list is used
//!   instead of the global list.
//! - [`FeatureListPolicy::Prepend`]: the per-feature list runs first, then the
//!   global list.
//!
//! # Statistics
//!
//! Statistics are gathered from the original dataset before any transformer
//! is applied to it. A statistics-driven transformation at position `k` in a
//! chain observes values after the `k` transformers bound before it, so
//! `[add(5), LinearScaling]` still lands in the scaling target range. One
//! collection pass runs per statistics-driven position.
//!
//! # Example
//! ```rust
//! use feature_transforms::dataset::{Example, InMemoryDataset};
//! use feature_transforms::transform::{
//!     LinearScalingTransformation, SimpleTransform, TransformationMap,
//! };
//!
//! let mut dataset = InMemoryDataset::new();
//! dataset.add(Example::from_arrays((), &["F0", "F1"], &[0.0, 10.0]).unwrap());
//! dataset.add(Example::from_arrays((), &["F0", "F1"], &[4.0, 20.0]).unwrap());
//!
//! let map = TransformationMap::new()
//!     .with_global(vec![LinearScalingTransformation::new().into()])
//!     .with_feature("F1", vec![SimpleTransform::div(10.0).into()]);
//!
//! let transformers = map.compile(&dataset).unwrap();
//! assert_eq!(transformers.transform_value("F0", 2.0), 0.5);
//! assert_eq!(transformers.transform_value("F1", 20.0), 2.0);
//! ```

use crate::dataset::Dataset;
use crate::transform::error::{Result, TransformError};
use crate::transform::statistics::{StatisticsCollector, StatisticsRequest};
use crate::transform::traits::Transformation;
use crate::transform::transformations::{TransformationKind, TransformerKind};
use crate::transform::transformer_map::TransformerMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, trace, warn};

/// How a per-feature list combines with the global list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureListPolicy {
    /// Per-feature list is applied instead of the global list.
    #[default]
    Replace,
    /// Per-feature list is applied first, followed by the global list.
    Prepend,
}

/// Options for [`TransformationMap::compile_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Observe a zero for every example that lacks a feature (sparse semantics).
    pub include_implicit_zeros: bool,
}

/// Global transformations plus per-feature lists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformationMap {
    #[serde(default)]
    global: Vec<TransformationKind>,
    #[serde(default)]
    feature_specific: HashMap<String, Vec<TransformationKind>>,
    #[serde(default)]
    policy: FeatureListPolicy,
}

/// Compilation progress for one feature.
struct ChainState<'a> {
    name: String,
    chain: Vec<&'a TransformationKind>,
    bound: Vec<TransformerKind>,
}

impl<'a> ChainState<'a> {
    fn next(&self) -> Option<&'a TransformationKind> {
        self.chain.get(self.bound.len()).copied()
    }

    /// Bind transformations until the chain ends or one needs statistics.
    fn bind_stateless(&mut self) -> Result<()> {
        while let Some(t) = self.next() {
            if t.requires_statistics() {
                break;
            }
            let transformer = t.create_transformer(None)?;
            trace!(feature = %self.name, transformer = %transformer, "bound transformer");
            self.bound.push(transformer);
        }
        Ok(())
    }
}

impl TransformationMap {
    /// Empty map: compiles to a map that leaves every feature unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map with a global list and per-feature lists, using [`FeatureListPolicy::Replace`].
    pub fn from_parts(
        global: Vec<TransformationKind>,
        feature_specific: HashMap<String, Vec<TransformationKind>>,
    ) -> Self {
        Self {
            global,
            feature_specific,
            policy: FeatureListPolicy::default(),
        }
    }

    /// Set the global list.
    pub fn with_global(mut self, global: Vec<TransformationKind>) -> Self {
        self.global = global;
        self
    }

    /// Set the list for one feature.
    pub fn with_feature(
        mut self,
        name: impl Into<String>,
        transformations: Vec<TransformationKind>,
    ) -> Self {
        self.feature_specific.insert(name.into(), transformations);
        self
    }

    /// Set how per-feature lists combine with the global list.
    pub fn with_policy(mut self, policy: FeatureListPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn global(&self) -> &[TransformationKind] {
        &self.global
    }

    pub fn feature_specific(&self) -> &HashMap<String, Vec<TransformationKind>> {
        &self.feature_specific
    }

    pub fn policy(&self) -> FeatureListPolicy {
        self.policy
    }

    /// The ordered list that applies to `name`.
    pub fn transformations_for(&self, name: &str) -> Vec<&TransformationKind> {
        match (self.feature_specific.get(name), self.policy) {
            (Some(specific), FeatureListPolicy::Replace) => specific.iter().collect(),
            (Some(specific), FeatureListPolicy::Prepend) => {
                specific.iter().chain(self.global.iter()).collect()
            }
            (None, _) => self.global.iter().collect(),
        }
    }

    /// Check every configured transformation without a dataset.
    ///
    /// # Errors
    /// The first configuration error found, e.g.
    /// [`TransformError::DivisionByZero`] for `div(0)`.
    pub fn validate(&self) -> Result<()> {
        self.global
            .iter()
            .chain(self.feature_specific.values().flatten())
            .try_for_each(|t| t.validate())
    }

    /// Parse a map from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the map as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Bind the map to `dataset`'s statistics.
    ///
    /// # Errors
    /// - Configuration errors from [`TransformationMap::validate`].
    /// - [`TransformError::MissingStatistics`] when a statistics-driven
    ///   transformation targets a feature that never appears in `dataset`.
    /// - [`TransformError::EmptyData`] when statistics are needed but
    ///   `dataset` has no examples.
    pub fn compile<D: Dataset>(&self, dataset: &D) -> Result<TransformerMap> {
        self.compile_with(dataset, CompileOptions::default())
    }

    /// [`TransformationMap::compile`] with explicit options.
    pub fn compile_with<D: Dataset>(
        &self,
        dataset: &D,
        options: CompileOptions,
    ) -> Result<TransformerMap> {
        self.validate()?;

        let mut names = dataset.feature_names();
        let observed: HashSet<&str> = names.iter().map(String::as_str).collect();
        let mut unobserved: Vec<&String> = self
            .feature_specific
            .keys()
            .filter(|name| !observed.contains(name.as_str()))
            .collect();
        unobserved.sort();
        for name in &unobserved {
            warn!(feature = %name, "feature-specific transformations name a feature absent from the dataset");
        }
        names.extend(unobserved.into_iter().cloned());

        let mut states: Vec<ChainState<'_>> = names
            .into_iter()
            .filter_map(|name| {
                let chain = self.transformations_for(&name);
                (!chain.is_empty()).then(|| ChainState {
                    name,
                    chain,
                    bound: Vec::new(),
                })
            })
            .collect();

        let needs_statistics = states
            .iter()
            .any(|s| s.chain.iter().any(|t| t.requires_statistics()));
        if needs_statistics && dataset.is_empty() {
            return Err(TransformError::EmptyData(
                "cannot collect feature statistics from an empty dataset".to_string(),
            ));
        }

        let collector =
            StatisticsCollector::new().with_implicit_zeros(options.include_implicit_zeros);
        let mut rounds = 0usize;
        loop {
            for state in states.iter_mut() {
                state.bind_stateless()?;
            }

            let waiting: Vec<usize> = states
                .iter()
                .enumerate()
                .filter(|(_, s)| s.next().is_some())
                .map(|(i, _)| i)
                .collect();
            if waiting.is_empty() {
                break;
            }
            rounds += 1;

            let snapshot = {
                let requests: HashMap<&str, StatisticsRequest<'_>> = waiting
                    .iter()
                    .map(|&i| {
                        let state = &states[i];
                        let retain = state.next().is_some_and(|t| t.retains_values());
                        (
                            state.name.as_str(),
                            StatisticsRequest::new(&state.bound).retain_values(retain),
                        )
                    })
                    .collect();
                collector.collect(dataset, &requests)
            };
            debug!(
                round = rounds,
                requested = waiting.len(),
                observed = snapshot.len(),
                "collected feature statistics"
            );

            for i in waiting {
                let state = &mut states[i];
                let Some(t) = state.next() else { continue };
                let stats =
                    snapshot
                        .get(&state.name)
                        .ok_or_else(|| TransformError::MissingStatistics {
                            feature: state.name.clone(),
                        })?;
                let transformer = t.create_transformer(Some(stats))?;
                trace!(feature = %state.name, transformer = %transformer, "bound transformer");
                state.bound.push(transformer);
            }
        }

        let transformers: BTreeMap<String, Vec<TransformerKind>> =
            states.into_iter().map(|s| (s.name, s.bound)).collect();
        debug!(
            features = transformers.len(),
            rounds, "compiled transformer map"
        );
        Ok(TransformerMap::new(transformers))
    }
}
