//! Per-feature statistics collection.
//!
//! A [`StatisticsCollector`] walks a dataset once and accumulates a
//! [`FeatureStatistics`] for every requested feature name. Each request may
//! carry a prefix of already-bound transformers: observed values are pushed
//! through that prefix before being accumulated, so a statistics-driven
//! transformation sitting later in a chain sees the values it will actually
//! receive at apply time. With an empty prefix the statistics describe the
//! raw feature values.
//!
//! Mean and variance use Welford's online update:
//! ```text
//! delta  = x - mean
//! mean  += delta / n
//! m2    += delta * (x - mean)
//! var    = m2 / (n - 1)
//! ```

use crate::dataset::Dataset;
use crate::transform::transformations::{apply_chain, TransformerKind};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// Statistics keyed by feature name. Features that were never observed have no entry.
pub type StatisticsSnapshot = HashMap<String, FeatureStatistics>;

/// Sufficient statistics for a single feature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureStatistics {
    count: u64,
    min: f64,
    max: f64,
    mean: f64,
    m2: f64,
    /// Observed values, kept only when a transformation needs them (sorted after collection).
    values: Option<Vec<f64>>,
}

impl Default for FeatureStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureStatistics {
    /// Empty statistics that do not retain individual values.
    pub fn new() -> Self {
        Self {
            count: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            mean: 0.0,
            m2: 0.0,
            values: None,
        }
    }

    /// Empty statistics that also retain every observed value.
    pub fn retaining_values() -> Self {
        Self {
            values: Some(Vec::new()),
            ..Self::new()
        }
    }

    /// Build finished statistics from a sequence of values (values are retained).
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let mut stats = Self::retaining_values();
        for v in values {
            stats.observe(v);
        }
        stats.finish();
        stats
    }

    /// Record one observation.
    pub fn observe(&mut self, value: f64) {
        self.count += 1;
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
        if let Some(values) = self.values.as_mut() {
            values.push(value);
        }
    }

    /// Record the same observation `n` times.
    pub fn observe_repeated(&mut self, value: f64, n: u64) {
        for _ in 0..n {
            self.observe(value);
        }
    }

    fn finish(&mut self) {
        if let Some(values) = self.values.as_mut() {
            values.sort_by(f64::total_cmp);
        }
    }

    /// Number of observations.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Smallest observed value (`+inf` when nothing was observed).
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest observed value (`-inf` when nothing was observed).
    pub fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Arithmetic mean of the observations.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample variance; zero with fewer than two observations.
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    /// Sample standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Sorted observations, if they were retained.
    pub fn values(&self) -> Option<&[f64]> {
        self.values.as_deref()
    }
}

/// What to collect for one feature.
#[derive(Clone, Copy, Debug, Default)]
pub struct StatisticsRequest<'a> {
    prefix: &'a [TransformerKind],
    retain_values: bool,
}

impl<'a> StatisticsRequest<'a> {
    /// Request statistics over values passed through `prefix`.
    pub fn new(prefix: &'a [TransformerKind]) -> Self {
        Self {
            prefix,
            retain_values: false,
        }
    }

    /// Request statistics over raw values.
    pub fn raw() -> Self {
        Self::new(&[])
    }

    /// Also keep every observed value.
    pub fn retain_values(mut self, retain: bool) -> Self {
        self.retain_values = retain;
        self
    }

    fn empty_statistics(&self) -> FeatureStatistics {
        if self.retain_values {
            FeatureStatistics::retaining_values()
        } else {
            FeatureStatistics::new()
        }
    }
}

/// Single-pass accumulator of per-feature statistics.
#[derive(Clone, Debug, Default)]
pub struct StatisticsCollector {
    include_implicit_zeros: bool,
}

impl StatisticsCollector {
    /// Create a collector that only observes explicitly present features.
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat a requested feature missing from an example as an observed zero.
    ///
    /// Only applies to features observed explicitly at least once.
    pub fn with_implicit_zeros(mut self, include: bool) -> Self {
        self.include_implicit_zeros = include;
        self
    }

    /// Collect raw-value statistics for `names`.
    pub fn collect_raw<D: Dataset>(&self, dataset: &D, names: &[&str]) -> StatisticsSnapshot {
        let requests: HashMap<&str, StatisticsRequest<'_>> = names
            .iter()
            .map(|&name| (name, StatisticsRequest::raw()))
            .collect();
        self.collect(dataset, &requests)
    }

    /// Collect statistics for every requested feature in one pass over `dataset`.
    pub fn collect<D: Dataset>(
        &self,
        dataset: &D,
        requests: &HashMap<&str, StatisticsRequest<'_>>,
    ) -> StatisticsSnapshot {
        let mut accumulators: HashMap<&str, FeatureStatistics> = HashMap::new();
        let mut missing: HashMap<&str, u64> = HashMap::new();

        for example in dataset.examples() {
            let mut present: HashSet<&str> = HashSet::new();
            for feature in example {
                let Some((&name, request)) = requests.get_key_value(feature.name()) else {
                    continue;
                };
                let value = apply_chain(request.prefix, feature.value());
                accumulators
                    .entry(name)
                    .or_insert_with(|| request.empty_statistics())
                    .observe(value);
                if self.include_implicit_zeros {
                    present.insert(name);
                }
            }
            if self.include_implicit_zeros {
                for &name in requests.keys() {
                    if !present.contains(name) {
                        *missing.entry(name).or_insert(0) += 1;
                    }
                }
            }
        }

        for (name, count) in missing {
            if let Some(stats) = accumulators.get_mut(name) {
                let zero = apply_chain(requests[name].prefix, 0.0);
                stats.observe_repeated(zero, count);
                trace!(feature = name, count, "observed implicit zeros");
            }
        }

        accumulators
            .into_iter()
            .map(|(name, mut stats)| {
                stats.finish();
                (name.to_string(), stats)
            })
            .collect()
    }
}
