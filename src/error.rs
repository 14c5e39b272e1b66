use thiserror::Error;

/// Errors raised by the recommendation core.
#[derive(Debug, Error)]
pub enum RecommendError {
	/// The query vector does not have the width the index was built with.
	#[error("dimension mismatch: index expects {expected} features, query has {actual}")]
	DimensionMismatch {
		/// Width of the stored catalog vectors.
		expected: usize,
		/// Width of the encoded query.
		actual: usize,
	},

	/// A neighbor search asked for zero results.
	#[error("number of neighbors must be at least 1, got {0}")]
	InvalidNeighborCount(usize),

	/// An artifact deserialized but is internally inconsistent.
	#[error("corrupt artifact {name}: {reason}")]
	CorruptArtifact {
		/// Which artifact failed validation.
		name: &'static str,
		/// What was wrong with it.
		reason: String,
	},

	/// The stored token pattern does not compile.
	#[error("invalid token pattern: {0}")]
	TokenPattern(#[from] regex::Error),
}

impl RecommendError {
	pub(crate) fn corrupt(name: &'static str, reason: impl Into<String>) -> Self {
		Self::CorruptArtifact {
			name,
			reason: reason.into(),
		}
	}
}

pub type Result<T> = std::result::Result<T, RecommendError>;
