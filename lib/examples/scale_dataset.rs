//! End-to-end example: configure, compile and apply a transformation map.
//!
//! This example demonstrates:
//! - Loading a `TransformationMap` from JSON
//! - Feature-specific overrides alongside a global chain
//! - Reusing train statistics on test data
//! - Persisting the compiled `TransformerMap`
//!
//! Run with: RUST_LOG=debug cargo run --example scale_dataset

use feature_transforms::dataset::{Dataset, Example, InMemoryDataset};
use feature_transforms::serialization::SerializableParams;
use feature_transforms::transform::{TransformationMap, TransformerMap};
use std::error::Error;
use tracing_subscriber::EnvFilter;

const FEATURES: [&str; 3] = ["sqft", "bedrooms", "age"];

const CONFIG: &str = r#"{
    "global": [
        {"linear_scaling": {"target_min": 0.0, "target_max": 1.0}}
    ],
    "feature_specific": {
        "age": [
            {"simple": {"add": 1.0}},
            {"simple": "log"},
            {"mean_std": {"target_mean": 0.0, "target_stddev": 1.0}}
        ]
    }
}"#;

fn print_dataset(title: &str, dataset: &InMemoryDataset<f64>) {
    println!("{title}");
    for example in dataset.iter() {
        let row: Vec<String> = example
            .iter()
            .map(|f| format!("{}={:>8.4}", f.name(), f.value()))
            .collect();
        println!("  price={:>9.0}  {}", example.output(), row.join("  "));
    }
    println!();
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Feature Scaling Pipeline ===\n");

    // 1. Training data: [sqft, bedrooms, age] -> price
    let train_rows: [([f64; 3], f64); 6] = [
        ([1500.0, 3.0, 12.0], 310_000.0),
        ([2000.0, 4.0, 3.0], 450_000.0),
        ([1200.0, 2.0, 40.0], 180_000.0),
        ([1800.0, 3.0, 8.0], 390_000.0),
        ([2500.0, 5.0, 1.0], 610_000.0),
        ([1100.0, 2.0, 55.0], 150_000.0),
    ];
    let mut train = InMemoryDataset::with_capacity(train_rows.len());
    for (values, price) in &train_rows {
        train.add(Example::from_arrays(*price, &FEATURES, values)?);
    }
    print_dataset("Training data (raw):", &train);

    // 2. Configuration
    let map = TransformationMap::from_json(CONFIG)?;
    map.validate()?;

    // 3. Compile against the training data
    let transformers = map.compile(&train)?;
    println!("{transformers}");

    let scaled_train = transformers.transform_dataset(&train);
    print_dataset("Training data (transformed):", &scaled_train);

    // 4. Apply the same transformers to unseen data
    let mut test = InMemoryDataset::new();
    test.add(Example::from_arrays(0.0, &FEATURES, &[1650.0, 3.0, 20.0])?);
    test.add(Example::from_arrays(0.0, &FEATURES, &[3000.0, 6.0, 0.0])?);
    let scaled_test = transformers.par_transform_dataset(&test);
    print_dataset("Test data (transformed with training statistics):", &scaled_test);

    // 5. Persist and reload
    let path = std::env::temp_dir().join("scale_dataset_transformers.bin");
    transformers.save_to_file(&path)?;
    let loaded = TransformerMap::load_from_file(&path)?;
    assert_eq!(loaded.transform_dataset(&test), scaled_test);
    println!(
        "Reloaded {} feature chains from {}; {} test examples reproduce identically.",
        loaded.len(),
        path.display(),
        test.len()
    );
    std::fs::remove_file(&path)?;

    Ok(())
}
