//! End-to-end scaling scenarios over a small dense dataset.

use feature_transforms::dataset::{Dataset, Example, InMemoryDataset};
use feature_transforms::transform::{
    FeatureListPolicy, LinearScalingTransformation, SimpleTransform, TransformError,
    TransformationKind, TransformationMap,
};

const FEATURE_NAMES: [&str; 10] = ["F0", "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9"];

fn generate_dense_dataset() -> InMemoryDataset<&'static str> {
    let rows: [[f64; 10]; 10] = [
        [1.0; 10],
        [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
        [0.5; 10],
        [0.0; 10],
        [10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0],
        [2.0; 10],
        [10.0; 10],
        [1.0, 5.0, 1.0, 5.0, 1.0, 5.0, 1.0, 5.0, 1.0, 5.0],
        [5.0, 1.0, 5.0, 1.0, 5.0, 1.0, 5.0, 1.0, 5.0, 1.0],
        [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
    ];
    rows.iter()
        .map(|row| Example::from_arrays("UNK", &FEATURE_NAMES, row).unwrap())
        .collect()
}

/// Every transformed value of `name` (or every feature when `None`) lies in `(min, max)` up to 1e-12.
fn assert_scaled_within(
    original: &InMemoryDataset<&'static str>,
    transformed: &InMemoryDataset<&'static str>,
    min: f64,
    max: f64,
    only: Option<&[&str]>,
) {
    assert_eq!(original.len(), transformed.len());
    for (orig, trans) in original.iter().zip(transformed.iter()) {
        assert_eq!(orig.len(), trans.len(), "transformed not the same size as original");
        assert_eq!(orig.output(), trans.output());
        for (of, tf) in orig.iter().zip(trans.iter()) {
            assert_eq!(of.name(), tf.name());
            if only.is_some_and(|names| !names.contains(&tf.name())) {
                continue;
            }
            assert!(
                tf.value() > min - 1e-12 && tf.value() < max + 1e-12,
                "{} = {} outside [{}, {}]",
                tf.name(),
                tf.value(),
                min,
                max
            );
        }
    }
}

fn run_global(global: Vec<TransformationKind>, min: f64, max: f64) {
    let dataset = generate_dense_dataset();
    let map = TransformationMap::new().with_global(global);
    let transformers = map.compile(&dataset).unwrap();
    let transformed = transformers.transform_dataset(&dataset);
    assert_scaled_within(&dataset, &transformed, min, max, None);
}

#[test]
fn test_global_linear_scaling_simple() {
    run_global(vec![LinearScalingTransformation::new().into()], 0.0, 1.0);
}

#[test]
fn test_global_linear_scaling_add() {
    run_global(
        vec![SimpleTransform::add(5.0).into(), LinearScalingTransformation::new().into()],
        0.0,
        1.0,
    );
}

#[test]
fn test_global_linear_scaling_sub() {
    run_global(
        vec![SimpleTransform::sub(5.0).into(), LinearScalingTransformation::new().into()],
        0.0,
        1.0,
    );
}

#[test]
fn test_global_linear_scaling_chain() {
    run_global(
        vec![
            SimpleTransform::add(5.0).into(),
            SimpleTransform::sub(10.0).into(),
            LinearScalingTransformation::new().into(),
        ],
        0.0,
        1.0,
    );
}

#[test]
fn test_global_linear_scaling_inverted_chain() {
    run_global(
        vec![
            LinearScalingTransformation::new().into(),
            SimpleTransform::mul(5.0).into(),
            SimpleTransform::sub(2.5).into(),
        ],
        -2.5,
        2.5,
    );
}

#[test]
fn test_global_linear_scaling_range() {
    run_global(
        vec![LinearScalingTransformation::with_range(-5.0, 5.0).unwrap().into()],
        -5.0,
        5.0,
    );
}

#[test]
fn test_extremes_hit_target_bounds() {
    let dataset = generate_dense_dataset();
    let map = TransformationMap::new()
        .with_global(vec![LinearScalingTransformation::with_range(-5.0, 5.0).unwrap().into()]);
    let transformed = map.compile(&dataset).unwrap().transform_dataset(&dataset);

    // Row 3 holds the minimum (0) and row 6 the maximum (10) of every feature.
    for name in FEATURE_NAMES {
        assert_eq!(transformed.get(3).unwrap().value_of(name), Some(-5.0));
        assert_eq!(transformed.get(6).unwrap().value_of(name), Some(5.0));
    }
}

#[test]
fn test_feature_specific_replaces_global() {
    let dataset = generate_dense_dataset();
    let map = TransformationMap::new()
        .with_global(vec![LinearScalingTransformation::new().into()])
        .with_feature("F0", vec![SimpleTransform::add(5.0).into()])
        .with_feature("F9", vec![SimpleTransform::div(5.0).into()]);
    let transformed = map.compile(&dataset).unwrap().transform_dataset(&dataset);

    assert_scaled_within(&dataset, &transformed, 0.0, 1.0, Some(&FEATURE_NAMES[1..9]));
    for (orig, trans) in dataset.iter().zip(transformed.iter()) {
        let f0 = orig.value_of("F0").unwrap();
        let f9 = orig.value_of("F9").unwrap();
        assert_eq!(trans.value_of("F0"), Some(f0 + 5.0));
        assert_eq!(trans.value_of("F9"), Some(f9 / 5.0));
    }
}

#[test]
fn test_feature_specific_prepended_to_global() {
    let dataset = generate_dense_dataset();
    let map = TransformationMap::new()
        .with_global(vec![LinearScalingTransformation::new().into()])
        .with_feature("F0", vec![SimpleTransform::add(5.0).into()])
        .with_feature("F9", vec![SimpleTransform::div(5.0).into()])
        .with_policy(FeatureListPolicy::Prepend);
    let transformed = map.compile(&dataset).unwrap().transform_dataset(&dataset);

    assert_scaled_within(&dataset, &transformed, 0.0, 1.0, None);
}

#[test]
fn test_constant_feature_maps_to_target_min() {
    let mut dataset = InMemoryDataset::new();
    for v in [1.0, 2.0, 3.0] {
        dataset.add(Example::from_arrays("UNK", &["constant", "varying"], &[7.0, v]).unwrap());
    }
    let map = TransformationMap::new()
        .with_global(vec![LinearScalingTransformation::with_range(-1.0, 1.0).unwrap().into()]);
    let transformed = map.compile(&dataset).unwrap().transform_dataset(&dataset);

    for example in transformed.iter() {
        assert_eq!(example.value_of("constant"), Some(-1.0));
        assert!(example.value_of("varying").unwrap().is_finite());
    }
}

#[test]
fn test_compiled_map_reused_on_unseen_data() {
    let train = generate_dense_dataset();
    let map = TransformationMap::new().with_global(vec![LinearScalingTransformation::new().into()]);
    let transformers = map.compile(&train).unwrap();

    let test: InMemoryDataset<&'static str> = std::iter::once(
        Example::from_arrays("UNK", &["F0", "F5"], &[20.0, 5.0]).unwrap(),
    )
    .collect();
    let transformed = transformers.transform_dataset(&test);

    // Out-of-range values extrapolate rather than clamp.
    assert_eq!(transformed.get(0).unwrap().value_of("F0"), Some(2.0));
    assert_eq!(transformed.get(0).unwrap().value_of("F5"), Some(0.5));
}

#[test]
fn test_compile_is_deterministic() {
    let dataset = generate_dense_dataset();
    let map = TransformationMap::new()
        .with_global(vec![
            SimpleTransform::add(5.0).into(),
            LinearScalingTransformation::new().into(),
        ])
        .with_feature("F3", vec![SimpleTransform::log().into()]);

    let first = map.compile(&dataset).unwrap();
    let second = map.compile(&dataset).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.transform_dataset(&dataset),
        second.par_transform_dataset(&dataset)
    );
}

#[test]
fn test_division_by_zero_rejected() {
    let dataset = generate_dense_dataset();
    let map = TransformationMap::new().with_global(vec![SimpleTransform::div(0.0).into()]);
    assert!(matches!(map.validate(), Err(TransformError::DivisionByZero)));
    assert!(matches!(map.compile(&dataset), Err(TransformError::DivisionByZero)));
}

#[test]
fn test_json_configured_map() {
    let json = r#"{
        "global": [{"linear_scaling": {"target_min": -1.0, "target_max": 1.0}}],
        "feature_specific": {"F0": [{"simple": {"mul": 2.0}}]},
        "policy": "prepend"
    }"#;
    let map = TransformationMap::from_json(json).unwrap();
    let dataset = generate_dense_dataset();
    let transformed = map.compile(&dataset).unwrap().transform_dataset(&dataset);
    assert_scaled_within(&dataset, &transformed, -1.0, 1.0, None);
}
