use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Default multiplier applied to numeric mapping values.
pub const DEFAULT_FACTOR: i64 = 5;

/// Default exponent applied to numeric sequence elements.
///
/// An exponent of 1 leaves the elements unchanged.
pub const DEFAULT_EXPONENT: u32 = 1;

/// Transformation applied by the `DataProcessor` on a cache miss.
///
/// # Behavior
/// - Mapping: every numeric value is multiplied by `factor`; other values
///   pass through. Keys and their order are preserved.
/// - Sequence: non-numeric elements are dropped; numeric ones are raised to
///   `exponent`.
/// - Scalar: returned unchanged.
///
/// # Notes
/// - Integer results that overflow `i64` are promoted to `Float`.
/// - The transform never fails: unsupported elements are passed through or
///   filtered out.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Transformer {
	/// Multiplier for numeric mapping values.
	pub factor: i64,

	/// Exponent for numeric sequence elements.
	pub exponent: u32,
}

impl Default for Transformer {
	fn default() -> Self {
		Self { factor: DEFAULT_FACTOR, exponent: DEFAULT_EXPONENT }
	}
}

impl Transformer {
	/// Applies the transformation to `input`, producing a new value.
	pub fn transform(&self, input: &Value) -> Value {
		match input {
			Value::Map(mapping) => Value::Map(mapping.iter().map(|(key, value)| (key, self.scale(value))).collect()),
			Value::List(items) => Value::List(items.iter().filter(|item| item.is_numeric()).map(|item| self.raise(item)).collect()),
			scalar => scalar.clone(),
		}
	}

	fn scale(&self, value: &Value) -> Value {
		match value {
			Value::Int(i) => match i.checked_mul(self.factor) {
				Some(scaled) => Value::Int(scaled),
				None => Value::Float(*i as f64 * self.factor as f64),
			},
			Value::Float(x) => Value::Float(x * self.factor as f64),
			other => other.clone(),
		}
	}

	fn raise(&self, value: &Value) -> Value {
		let exponent = i32::try_from(self.exponent).unwrap_or(i32::MAX);
		match value {
			Value::Int(i) => match i.checked_pow(self.exponent) {
				Some(raised) => Value::Int(raised),
				None => Value::Float((*i as f64).powi(exponent)),
			},
			Value::Float(x) => Value::Float(x.powi(exponent)),
			other => other.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::Mapping;

	#[test]
	fn scales_numeric_mapping_values() {
		let input: Mapping = [
			("alpha", Value::from(10)),
			("beta", Value::from(20.5)),
			("gamma", Value::from(30)),
		]
		.into_iter()
		.collect();
		let Value::Map(output) = Transformer::default().transform(&input.into()) else {
			panic!("expected a mapping");
		};
		assert_eq!(output.keys().collect::<Vec<_>>(), vec!["alpha", "beta", "gamma"]);
		assert_eq!(output.get("alpha"), Some(&Value::Int(50)));
		assert_eq!(output.get("beta"), Some(&Value::Float(102.5)));
		assert_eq!(output.get("gamma"), Some(&Value::Int(150)));
	}

	#[test]
	fn mapping_passes_non_numeric_through() {
		let input: Mapping = [
			("name", Value::from("x")),
			("flag", Value::from(true)),
			("list", Value::from(vec![1, 2])),
			("none", Value::Null),
		]
		.into_iter()
		.collect();
		let input = Value::from(input);
		assert_eq!(Transformer::default().transform(&input), input);
	}

	#[test]
	fn sequence_keeps_numeric_elements_only() {
		let input = Value::List(vec![
			Value::from(1),
			Value::from("skip"),
			Value::from(2.5),
			Value::from(false),
			Value::Null,
			Value::from(vec![3]),
			Value::from(4),
		]);
		let expected = Value::List(vec![Value::from(1), Value::from(2.5), Value::from(4)]);
		assert_eq!(Transformer::default().transform(&input), expected);
	}

	#[test]
	fn default_exponent_is_identity() {
		let input = Value::from(vec![1, 2, 3, 4, 5]);
		assert_eq!(Transformer::default().transform(&input), input);
	}

	#[test]
	fn scalars_are_unchanged() {
		let transformer = Transformer::default();
		for scalar in [Value::Null, Value::from(7), Value::from(1.5), Value::from("text"), Value::from(true)] {
			assert_eq!(transformer.transform(&scalar), scalar);
		}
	}

	#[test]
	fn custom_constants() {
		let transformer = Transformer { factor: 2, exponent: 2 };
		assert_eq!(transformer.transform(&Value::from(vec![3])), Value::from(vec![9]));
		let input: Mapping = [("a", 4)].into_iter().collect();
		let expected: Mapping = [("a", 8)].into_iter().collect();
		assert_eq!(transformer.transform(&input.into()), Value::from(expected));
	}

	#[test]
	fn integer_overflow_promotes_to_float() {
		let input: Mapping = [("big", Value::from(i64::MAX))].into_iter().collect();
		let Value::Map(output) = Transformer::default().transform(&input.into()) else {
			panic!("expected a mapping");
		};
		assert_eq!(output.get("big"), Some(&Value::Float(i64::MAX as f64 * 5.0)));
	}
}
