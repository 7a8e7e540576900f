//! Benchmark utilities for feature-transforms.
//!
//! Provides deterministic synthetic datasets and the transformation maps the
//! criterion benches compile and apply.

use feature_transforms::dataset::{Example, Feature, InMemoryDataset};
use feature_transforms::transform::{
    LinearScalingTransformation, MeanStdStandardizer, SimpleTransform, TransformationMap,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Name of the `index`-th synthetic feature.
pub fn feature_name(index: usize) -> String {
    format!("F{index}")
}

/// Generate `n_examples` examples over `n_features` features.
///
/// Each feature is present with probability `density`; `1.0` gives a dense
/// dataset. Feature `j` is drawn from `[-j, 10 * (j + 1))` so every feature
/// has a different range.
pub fn synthetic_dataset(
    n_examples: usize,
    n_features: usize,
    density: f64,
    seed: u64,
) -> InMemoryDataset<u32> {
    let names: Vec<String> = (0..n_features).map(feature_name).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut dataset = InMemoryDataset::with_capacity(n_examples);
    for i in 0..n_examples {
        let features = names
            .iter()
            .enumerate()
            .filter_map(|(j, name)| {
                let present = density >= 1.0 || rng.gen_bool(density.max(0.0));
                let lo = -(j as f64);
                let hi = 10.0 * (j as f64 + 1.0);
                let value = rng.gen_range(lo..hi);
                present.then(|| Feature::new(name.clone(), value))
            })
            .collect();
        dataset.add(Example::new((i % 2) as u32, features));
    }
    dataset
}

/// Global linear scaling only.
pub fn scaling_map() -> TransformationMap {
    TransformationMap::new().with_global(vec![LinearScalingTransformation::new().into()])
}

/// Two statistics-driven stages per feature plus arithmetic around them.
pub fn staged_map() -> TransformationMap {
    TransformationMap::new().with_global(vec![
        SimpleTransform::add(5.0).into(),
        LinearScalingTransformation::new().into(),
        SimpleTransform::mul(3.0).into(),
        MeanStdStandardizer::new().into(),
    ])
}

/// Global scaling with a stateless override on every other feature.
pub fn override_map(n_features: usize) -> TransformationMap {
    (0..n_features)
        .step_by(2)
        .fold(scaling_map(), |map, j| {
            map.with_feature(feature_name(j), vec![SimpleTransform::div(5.0).into()])
        })
}
