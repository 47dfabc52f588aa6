use serde::{Deserialize, Serialize};

use crate::error::{ChainError, Result};

/// Default number of requested elements not produced by a walk.
pub const DEFAULT_LENGTH_OFFSET: usize = 3;

/// Default lower bound of the weighted draw.
pub const DEFAULT_DRAW_FLOOR: usize = 3;

/// Parameters of a stochastic walk (`TransitionModel::generate`).
///
/// # Responsibilities
/// - `length_offset`: a walk of requested length `l` performs at most
///   `l - length_offset` steps (none if `l <= length_offset`)
/// - `draw_floor`: each step draws uniformly from `[draw_floor, total]`,
///   where `total` is the sum of the current state's outgoing counts
///
/// # Invariants
/// - Both values are >= 1
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WalkConfig {
	length_offset: usize,
	draw_floor: usize,
}

impl Default for WalkConfig {
	fn default() -> Self {
		Self { length_offset: DEFAULT_LENGTH_OFFSET, draw_floor: DEFAULT_DRAW_FLOOR }
	}
}

impl WalkConfig {
	/// Creates a walk configuration.
	///
	/// # Errors
	/// Returns an error if either value is 0.
	pub fn new(length_offset: usize, draw_floor: usize) -> Result<Self> {
		let mut config = Self::default();
		config.set_length_offset(length_offset)?;
		config.set_draw_floor(draw_floor)?;
		Ok(config)
	}

	pub fn length_offset(&self) -> usize {
		self.length_offset
	}

	pub fn draw_floor(&self) -> usize {
		self.draw_floor
	}

	/// Sets the step offset.
	///
	/// # Errors
	/// Returns `ChainError::InvalidLengthOffset` if `length_offset` is 0.
	pub fn set_length_offset(&mut self, length_offset: usize) -> Result<()> {
		if length_offset == 0 {
			return Err(ChainError::InvalidLengthOffset(length_offset));
		}
		self.length_offset = length_offset;
		Ok(())
	}

	/// Sets the lower bound of the weighted draw.
	///
	/// # Errors
	/// Returns `ChainError::InvalidDrawFloor` if `draw_floor` is 0.
	pub fn set_draw_floor(&mut self, draw_floor: usize) -> Result<()> {
		if draw_floor == 0 {
			return Err(ChainError::InvalidDrawFloor(draw_floor));
		}
		self.draw_floor = draw_floor;
		Ok(())
	}

	/// Number of steps a walk of the requested `length` may take.
	pub fn steps(&self, length: usize) -> usize {
		length.saturating_sub(self.length_offset)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let config = WalkConfig::default();
		assert_eq!(config.length_offset(), 3);
		assert_eq!(config.draw_floor(), 3);
	}

	#[test]
	fn steps_saturate() {
		let config = WalkConfig::default();
		assert_eq!(config.steps(20), 17);
		assert_eq!(config.steps(3), 0);
		assert_eq!(config.steps(0), 0);
	}

	#[test]
	fn rejects_zero() {
		assert_eq!(WalkConfig::new(0, 1), Err(ChainError::InvalidLengthOffset(0)));
		assert_eq!(WalkConfig::new(1, 0), Err(ChainError::InvalidDrawFloor(0)));

		let mut config = WalkConfig::default();
		assert!(config.set_draw_floor(0).is_err());
		assert_eq!(config.draw_floor(), 3);
	}

	#[test]
	fn accepts_custom_values() {
		let config = WalkConfig::new(1, 1).unwrap();
		assert_eq!(config.steps(5), 4);
		assert_eq!(config.draw_floor(), 1);
	}
}
