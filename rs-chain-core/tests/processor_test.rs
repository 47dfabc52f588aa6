//! Integration tests for the memoizing `DataProcessor`.

mod common;

use common::mapping;
use rs_chain_core::processor::data_processor::DataProcessor;
use rs_chain_core::processor::fingerprint::Fingerprint;
use rs_chain_core::processor::transformer::Transformer;
use rs_chain_core::value::Value;

#[test]
fn test_mapping_sample_is_scaled() {
    let mut processor = DataProcessor::new();
    let input = mapping(&[
        ("alpha", Value::from(10)),
        ("beta", Value::from(20.5)),
        ("gamma", Value::from(30)),
    ]);
    let expected = mapping(&[
        ("alpha", Value::from(50)),
        ("beta", Value::from(102.5)),
        ("gamma", Value::from(150)),
    ]);

    assert_eq!(processor.process(&input), &expected);
}

#[test]
fn test_sequence_sample_is_unchanged() {
    let mut processor = DataProcessor::new();
    let input = Value::from(vec![1, 2, 3, 4, 5]);

    assert_eq!(processor.process(&input), &input);
}

#[test]
fn test_memoization_is_idempotent() {
    let mut processor = DataProcessor::new();
    let input = mapping(&[("a", Value::from(1)), ("b", Value::from(2))]);

    let first = processor.process(&input).clone();
    let second = processor.process(&input).clone();

    assert_eq!(first, second);
    assert_eq!(processor.iteration_count(), 2);
    assert_eq!(processor.history(), &[Fingerprint::of(&input)]);
}

#[test]
fn test_reordered_mapping_shares_fingerprint() {
    let forward = mapping(&[("a", Value::from(1)), ("b", Value::from(2))]);
    let backward = mapping(&[("b", Value::from(2)), ("a", Value::from(1))]);

    assert_eq!(Fingerprint::of(&forward), Fingerprint::of(&backward));

    let mut processor = DataProcessor::new();
    processor.process(&forward);
    processor.process(&backward);
    assert_eq!(processor.history().len(), 1);
}

#[test]
fn test_demo_samples() {
    // Same samples as the driver: two mappings, two sequences
    let samples = [
        mapping(&[("alpha", Value::from(10)), ("beta", Value::from(20.5)), ("gamma", Value::from(30))]),
        mapping(&[("alpha", Value::from(18)), ("beta", Value::from(25.5)), ("gamma", Value::from(35))]),
        Value::from((1..=10).collect::<Vec<i64>>()),
        Value::from(vec![11, 22, 33, 44, 55]),
    ];

    let mut processor = DataProcessor::new();
    for sample in &samples {
        processor.process(sample);
    }
    for sample in &samples {
        processor.process(sample);
    }

    assert_eq!(processor.iteration_count(), 8);
    assert_eq!(processor.history().len(), 4);
    assert_eq!(processor.len(), 4);
}

#[test]
fn test_scalar_input_round_trips_through_cache() {
    let mut processor = DataProcessor::new();
    let input = Value::from("opaque");

    assert_eq!(processor.process(&input), &input);
    assert!(processor.contains(&input));
}

#[test]
fn test_custom_transformer() {
    let mut processor = DataProcessor::with_transformer(Transformer { factor: 10, exponent: 3 });

    assert_eq!(processor.process(&Value::from(vec![2])), &Value::from(vec![8]));
    assert_eq!(
        processor.process(&mapping(&[("x", Value::from(1.5))])),
        &mapping(&[("x", Value::from(15.0))])
    );
}
