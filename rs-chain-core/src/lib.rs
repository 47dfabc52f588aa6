//! Memoization and Markov-chain primitives.
//!
//! This crate provides two independent components:
//! - A content-addressed memoizing transformer (`DataProcessor`) that
//!   fingerprints its input and computes each distinct transformation once
//! - A first-order transition model (`TransitionModel`) trained on observed
//!   sequences and sampled by weighted random walk
//!
//! Both are plain owned structs, single-threaded, and grow without bound:
//! nothing is evicted.

/// Input values and their canonical textual form.
pub mod value;

/// Fingerprinting, transformation and the memoizing cache.
pub mod processor;

/// Transition model and walk configuration.
pub mod model;

/// Configuration errors.
pub mod error;

/// Seed used by the demo driver for reproducible walks.
pub const DEFAULT_SEED: u64 = 44;
