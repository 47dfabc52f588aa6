use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::debug;

use super::fingerprint::Fingerprint;
use super::transformer::Transformer;
use crate::value::Value;

/// Memoizing transformer keyed by content fingerprint.
///
/// Each call to `process` fingerprints its input. A known fingerprint
/// returns the stored result; an unknown one runs the `Transformer`,
/// stores the result and records the fingerprint in the history.
///
/// # Invariants
/// - `history` holds exactly one entry per cache miss, in call order
/// - `iteration_count` counts every call, hit or miss
/// - The cache never shrinks: there is no eviction, memory grows with the
///   number of distinct inputs
///
/// Not synchronized: callers sharing an instance across threads must
/// serialize access themselves.
#[derive(Debug, Default)]
pub struct DataProcessor {
	transformer: Transformer,
	cache: HashMap<Fingerprint, Value>,
	history: Vec<Fingerprint>,
	iteration_count: u64,
}

impl DataProcessor {
	/// Creates an empty processor using the default `Transformer`.
	pub fn new() -> Self {
		Self::with_transformer(Transformer::default())
	}

	/// Creates an empty processor using a custom `Transformer`.
	pub fn with_transformer(transformer: Transformer) -> Self {
		Self {
			transformer,
			cache: HashMap::new(),
			history: Vec::new(),
			iteration_count: 0,
		}
	}

	/// Returns the transformed value for `input`, computing it only once
	/// per distinct canonical form.
	///
	/// # Behavior
	/// - Increments the iteration counter unconditionally.
	/// - Hit: returns the stored result, history untouched.
	/// - Miss: transforms `input`, stores the result, appends the
	///   fingerprint to the history.
	pub fn process(&mut self, input: &Value) -> &Value {
		self.iteration_count += 1;
		match self.cache.entry(Fingerprint::of(input)) {
			Entry::Occupied(entry) => {
				debug!("cache hit {} (iteration {})", entry.key(), self.iteration_count);
				entry.into_mut()
			}
			Entry::Vacant(entry) => {
				debug!("cache miss {} (iteration {})", entry.key(), self.iteration_count);
				self.history.push(entry.key().clone());
				entry.insert(self.transformer.transform(input))
			}
		}
	}

	/// Number of `process` calls so far.
	pub fn iteration_count(&self) -> u64 {
		self.iteration_count
	}

	/// Fingerprints of every cache miss, in call order.
	pub fn history(&self) -> &[Fingerprint] {
		&self.history
	}

	/// Returns the cached result stored under `fingerprint`.
	pub fn get(&self, fingerprint: &Fingerprint) -> Option<&Value> {
		self.cache.get(fingerprint)
	}

	/// Returns `true` if a value with the same canonical form was already processed.
	pub fn contains(&self, input: &Value) -> bool {
		self.cache.contains_key(&Fingerprint::of(input))
	}

	pub fn transformer(&self) -> &Transformer {
		&self.transformer
	}

	/// Number of cached results.
	pub fn len(&self) -> usize {
		self.cache.len()
	}

	pub fn is_empty(&self) -> bool {
		self.cache.is_empty()
	}
}
