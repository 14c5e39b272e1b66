//! Content-based artifact fingerprints

use std::fs;
use std::path::Path;
use xxhash_rust::xxh3::xxh3_64;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactHash(String);

impl ArtifactHash {
	/// Hash an artifact's full contents
	pub fn of_bytes(bytes: &[u8]) -> Self {
		Self(format!("{:016x}", xxh3_64(bytes)))
	}

	pub fn compute(path: &Path) -> std::io::Result<Self> {
		Ok(Self::of_bytes(&fs::read(path)?))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn short(&self) -> &str {
		&self.0[..8]
	}
}

impl std::fmt::Display for ArtifactHash {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}
