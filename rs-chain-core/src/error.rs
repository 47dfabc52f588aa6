use thiserror::Error;

/// Errors raised while configuring the library.
///
/// Processing, training and generation never fail; invalid settings are
/// rejected up front instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
	/// The lower bound of the weighted draw must be at least 1.
	#[error("draw floor must be >= 1, got {0}")]
	InvalidDrawFloor(usize),

	/// The step offset of a walk must be at least 1.
	#[error("length offset must be >= 1, got {0}")]
	InvalidLengthOffset(usize),
}

pub type Result<T> = std::result::Result<T, ChainError>;
