//! Content-addressed memoization.
//!
//! - Fingerprints (`Fingerprint`) computed from a value's canonical text
//! - The transformation applied on a miss (`Transformer`)
//! - The memoizing cache itself (`DataProcessor`)

/// Memoizing cache keyed by fingerprint, with miss history and call counter.
pub mod data_processor;

/// Truncated SHA-256 fingerprint of a canonical value.
pub mod fingerprint;

/// Mapping/sequence/scalar transformation and its constants.
pub mod transformer;
