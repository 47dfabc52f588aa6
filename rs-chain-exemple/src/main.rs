use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use rs_chain_core::DEFAULT_SEED;
use rs_chain_core::model::transition_model::TransitionModel;
use rs_chain_core::processor::data_processor::DataProcessor;
use rs_chain_core::value::Value;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Verbosity is driven by RUST_LOG (ex. RUST_LOG=debug shows cache hits/misses)
    env_logger::init();

    // Memoizing processor with the default transform (x5 on mappings, x^1 on sequences)
    let mut processor = DataProcessor::new();

    let samples: Vec<Value> = vec![
        serde_json::from_value(json!({"alpha": 10, "beta": 20.5, "gamma": 30}))?,
        serde_json::from_value(json!({"alpha": 18, "beta": 25.5, "gamma": 35}))?,
        serde_json::from_value(json!([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]))?,
        serde_json::from_value(json!([11, 22, 33, 44, 55]))?,
    ];

    for sample in &samples {
        let result = processor.process(sample);
        println!("Processed: {}", serde_json::to_string(result)?);
    }

    // Transition model trained on a small integer sequence
    let mut chain = TransitionModel::new();
    let training_data: [i64; 14] = [1, 2, 3, 2, 3, 4, 3, 4, 5, 4, 5, 1, 2, 3];
    chain.train(&training_data);

    // Seeded generator: the walk is reproducible
    let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
    let generated = chain.generate(1, 20, &mut rng);
    println!("Markov chain: {:?}", generated);
    info!("P(3 -> 3) = {}, P(1 -> 2) = {}", chain.probability(&3, &3), chain.probability(&1, &2));

    let fibs = fibonacci_sequence(24);
    let primes = prime_sieve(202);

    println!("Fibonacci: {:?}", fibs);
    println!("Primes up to 202: {:?}", primes);
    match compute_statistics(&fibs) {
        Some(stats) => println!("Stats: {}", stats),
        None => println!("Stats: none"),
    }
    println!("Processor iterations: {}", processor.iteration_count());

    Ok(())
}

/// First `n` Fibonacci numbers, starting at 1, 1.
fn fibonacci_sequence(n: usize) -> Vec<u64> {
    let (mut a, mut b) = (1u64, 1u64);
    let mut sequence = Vec::with_capacity(n);
    for _ in 0..n {
        sequence.push(a);
        (a, b) = (b, a + b);
    }
    sequence
}

/// Primes strictly below `limit`.
fn prime_sieve(limit: usize) -> Vec<usize> {
    let mut sieve = vec![true; limit];
    for flag in sieve.iter_mut().take(2) {
        *flag = false;
    }
    let mut i = 2;
    while i * i < limit {
        if sieve[i] {
            for j in (i * i..limit).step_by(i) {
                sieve[j] = false;
            }
        }
        i += 1;
    }
    sieve.iter().enumerate().filter(|(_, is_prime)| **is_prime).map(|(i, _)| i).collect()
}

/// Count, mean, variance, standard deviation, min and max of `values`.
fn compute_statistics(values: &[u64]) -> Option<serde_json::Value> {
    let min = *values.iter().min()?;
    let max = *values.iter().max()?;
    let n = values.len() as f64;
    let mean = values.iter().map(|&x| x as f64).sum::<f64>() / n;
    let variance = values.iter().map(|&x| (x as f64 - mean).powi(2)).sum::<f64>() / n;
    Some(json!({
        "count": values.len(),
        "mean": mean,
        "variance": variance,
        "std_dev": variance.sqrt(),
        "min": min,
        "max": max,
    }))
}
