//! Top-level module for the transition model.
//!
//! This module provides a first-order stochastic state-transition model:
//! - The trainable model itself (`TransitionModel`)
//! - Walk parameters (`WalkConfig`)
//! - Internal per-source state management (`State`)

/// First-order transition model over arbitrary hashable states.
///
/// Handles sequence training, transition counting, probability queries,
/// weighted random walks and model merging.
pub mod transition_model;

/// Internal representation of a single source state.
///
/// Tracks outgoing transitions in first-observation order and supports
/// cumulative selection. This module is not exposed publicly.
mod state;

/// Walk parameters: step offset and draw floor.
pub mod walk_config;
