use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Input (and output) value handled by the `DataProcessor`.
///
/// A value is either a mapping, an ordered sequence, or an opaque scalar.
/// Only `Int` and `Float` count as numeric: booleans, text and `Null`
/// are carried through (or filtered out) by the transform untouched.
///
/// Serialized untagged, so a mapping is a JSON object, a sequence an
/// array, and scalars their JSON counterpart.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Value {
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	Text(String),
	List(Vec<Value>),
	Map(Mapping),
}

impl Value {
	/// Returns `true` for `Int` and `Float`.
	pub fn is_numeric(&self) -> bool {
		matches!(self, Value::Int(_) | Value::Float(_))
	}

	/// Returns `true` for every variant that is neither a mapping nor a sequence.
	pub fn is_scalar(&self) -> bool {
		!matches!(self, Value::List(_) | Value::Map(_))
	}

	/// Renders the canonical textual form of this value.
	///
	/// Mapping entries are sorted by key (at every nesting level), so two
	/// mappings holding the same pairs render identically whatever their
	/// insertion order. Sequences keep their order.
	///
	/// # Format
	/// - `Null` → `null`, booleans → `true` / `false`
	/// - integers in decimal, floats with their shortest round-trip form (`20.5`, `30.0`)
	/// - text quoted and escaped (`"abc"`)
	/// - sequences as `[a, b, c]`
	/// - mappings as `[("a", 1), ("b", 2)]`
	pub fn canonical(&self) -> String {
		Canonical(self).to_string()
	}
}

/// Display adapter writing the canonical form of a `Value`.
struct Canonical<'a>(&'a Value);

impl fmt::Display for Canonical<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.0 {
			Value::Null => f.write_str("null"),
			Value::Bool(b) => write!(f, "{}", b),
			Value::Int(i) => write!(f, "{}", i),
			Value::Float(x) => write!(f, "{:?}", x),
			Value::Text(s) => write!(f, "{:?}", s),
			Value::List(items) => {
				f.write_str("[")?;
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}", Canonical(item))?;
				}
				f.write_str("]")
			}
			Value::Map(mapping) => {
				f.write_str("[")?;
				for (i, (key, value)) in mapping.sorted_entries().into_iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "({:?}, {})", key, Canonical(value))?;
				}
				f.write_str("]")
			}
		}
	}
}

/// Insertion-ordered mapping from string keys to values.
///
/// Keys are unique: inserting an existing key replaces its value in place
/// and keeps the original position. Equality ignores order, like the
/// fingerprint does.
#[derive(Clone, Debug, Default)]
pub struct Mapping {
	entries: Vec<(String, Value)>,
}

impl Mapping {
	pub fn new() -> Self {
		Self { entries: Vec::new() }
	}

	/// Inserts a key/value pair, returning the previous value for `key` if any.
	pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
		let key = key.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(k, _)| *k == key) {
			Some((_, existing)) => Some(std::mem::replace(existing, value)),
			None => {
				self.entries.push((key, value));
				None
			}
		}
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(k, _)| k.as_str())
	}

	fn sorted_entries(&self) -> Vec<(&str, &Value)> {
		let mut sorted: Vec<(&str, &Value)> = self.iter().collect();
		sorted.sort_by(|a, b| a.0.cmp(b.0));
		sorted
	}
}

impl PartialEq for Mapping {
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut mapping = Mapping::new();
		for (key, value) in iter {
			mapping.insert(key, value);
		}
		mapping
	}
}

impl Serialize for Mapping {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_map(self.iter())
	}
}

impl<'de> Deserialize<'de> for Mapping {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		struct MappingVisitor;

		impl<'de> Visitor<'de> for MappingVisitor {
			type Value = Mapping;

			fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str("a map with string keys")
			}

			fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Mapping, A::Error> {
				let mut mapping = Mapping::new();
				while let Some((key, value)) = access.next_entry::<String, Value>()? {
					mapping.insert(key, value);
				}
				Ok(mapping)
			}
		}

		deserializer.deserialize_map(MappingVisitor)
	}
}

impl From<Mapping> for Value {
	fn from(mapping: Mapping) -> Self {
		Value::Map(mapping)
	}
}

impl<T: Into<Value>> From<Vec<T>> for Value {
	fn from(items: Vec<T>) -> Self {
		Value::List(items.into_iter().map(Into::into).collect())
	}
}

impl From<i64> for Value {
	fn from(i: i64) -> Self {
		Value::Int(i)
	}
}

impl From<i32> for Value {
	fn from(i: i32) -> Self {
		Value::Int(i64::from(i))
	}
}

impl From<f64> for Value {
	fn from(x: f64) -> Self {
		Value::Float(x)
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Value::Bool(b)
	}
}

impl From<&str> for Value {
	fn from(s: &str) -> Self {
		Value::Text(s.to_owned())
	}
}

impl From<String> for Value {
	fn from(s: String) -> Self {
		Value::Text(s)
	}
}
