//! Common helpers shared across integration tests.

use rs_chain_core::value::{Mapping, Value};

/// Builds a mapping value from `(key, value)` pairs, keeping their order.
pub fn mapping(entries: &[(&str, Value)]) -> Value {
    entries.iter().cloned().collect::<Mapping>().into()
}

/// Training sequence used by the demo driver.
pub const TRAINING: [i64; 14] = [1, 2, 3, 2, 3, 4, 3, 4, 5, 4, 5, 1, 2, 3];
