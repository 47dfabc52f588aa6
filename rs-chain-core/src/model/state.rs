use serde::{Deserialize, Serialize};

/// Represents a source state in a transition model.
///
/// A `State` stores every observed transition from its `key` to a
/// destination, together with the number of times it was observed.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate transition occurrences during training
/// - Select a destination from a cumulative draw
/// - Merge with another state having the same key
///
/// ## Invariants
/// - All transitions belong to the same `key`
/// - Each destination appears once, with a strictly positive count
/// - Destinations keep the order in which they were first observed
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct State<S> {
	/// Source state.
	key: S,
	/// Outgoing transitions in first-observation order.
	/// Example: [(3, 42), (5, 3)]
	transitions: Vec<(S, usize)>,
}

impl<S: PartialEq + Clone> State<S> {
	/// Creates a new empty state for the given source.
	pub fn new(key: S) -> Self {
		Self { key, transitions: Vec::new() }
	}

	/// Records an occurrence of a transition toward `next`.
	///
	/// - If the transition already exists, its occurrence count is increased.
	/// - Otherwise, a new transition is appended with an initial count of 1.
	pub fn add_transition(&mut self, next: S) {
		self.add_occurrences(next, 1);
	}

	fn add_occurrences(&mut self, next: S, occurrences: usize) {
		match self.transitions.iter_mut().find(|(state, _)| *state == next) {
			Some((_, count)) => *count += occurrences,
			None => self.transitions.push((next, occurrences)),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	/// Sum of every outgoing occurrence count.
	pub fn total(&self) -> usize {
		self.transitions.iter().map(|(_, count)| count).sum()
	}

	/// Occurrence count of the transition toward `next` (0 if never observed).
	pub fn count(&self, next: &S) -> usize {
		self.transitions
			.iter()
			.find(|(state, _)| state == next)
			.map_or(0, |(_, count)| *count)
	}

	/// Iterates `(destination, count)` pairs in first-observation order.
	pub fn successors(&self) -> impl Iterator<Item = (&S, usize)> {
		self.transitions.iter().map(|(state, count)| (state, *count))
	}

	/// Selects a destination from a cumulative draw.
	///
	/// Walks the transitions in order, accumulating counts; the first
	/// destination whose cumulative count reaches `pick` is returned.
	///
	/// Returns `None` if `pick` exceeds `total()`.
	pub fn select(&self, pick: usize) -> Option<&S> {
		let mut cumulative = 0;
		for (state, count) in &self.transitions {
			cumulative += count;
			if cumulative >= pick {
				return Some(state);
			}
		}
		None
	}

	/// Merges another state into this one.
	///
	/// Both states must represent the same source (`key`).
	/// Transition occurrence counts are summed; destinations unknown to
	/// this state are appended in `other`'s order.
	pub fn merge(&mut self, other: &Self) {
		debug_assert!(self.key == other.key, "merging states with different keys");
		for (next, occurrences) in &other.transitions {
			self.add_occurrences(next.clone(), *occurrences);
		}
	}
}
