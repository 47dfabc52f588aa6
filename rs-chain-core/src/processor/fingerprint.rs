use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::value::Value;

/// Number of hexadecimal characters kept from the digest.
pub const FINGERPRINT_LEN: usize = 12;

/// Short content key identifying the canonical form of a `Value`.
///
/// The fingerprint is the first `FINGERPRINT_LEN` lowercase hex characters
/// of the SHA-256 digest of `Value::canonical`. It is a cache key only:
/// truncation leaves no integrity guarantee.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(String);

impl Fingerprint {
	/// Computes the fingerprint of a value from its canonical text.
	pub fn of(value: &Value) -> Self {
		Self::of_text(&value.canonical())
	}

	/// Computes the fingerprint of an already canonicalized text.
	pub fn of_text(text: &str) -> Self {
		let mut hex = format!("{:x}", Sha256::digest(text.as_bytes()));
		hex.truncate(FINGERPRINT_LEN);
		Self(hex)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Fingerprint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::Mapping;

	#[test]
	fn truncates_sha256_hex() {
		// sha256("abc") = ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad
		assert_eq!(Fingerprint::of_text("abc").as_str(), "ba7816bf8f01");
	}

	#[test]
	fn fixed_length_lowercase_hex() {
		for value in [Value::Null, Value::from(vec![1, 2, 3]), Value::from("hello")] {
			let fingerprint = Fingerprint::of(&value);
			assert_eq!(fingerprint.as_str().len(), FINGERPRINT_LEN);
			assert!(fingerprint.as_str().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
		}
	}

	#[test]
	fn mapping_order_does_not_matter() {
		let forward: Mapping = [("a", 1), ("b", 2)].into_iter().collect();
		let backward: Mapping = [("b", 2), ("a", 1)].into_iter().collect();
		assert_eq!(Fingerprint::of(&forward.into()), Fingerprint::of(&backward.into()));
	}

	#[test]
	fn different_content_different_fingerprint() {
		assert_ne!(Fingerprint::of(&Value::from(vec![1, 2])), Fingerprint::of(&Value::from(vec![2, 1])));
	}
}
