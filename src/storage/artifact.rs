//! Artifact file format and I/O

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::core::ArtifactHash;

/// Raw artifact bytes with their fingerprint
pub struct Loaded<T> {
	pub value: T,
	pub hash: ArtifactHash,
	pub bytes: usize,
}

/// Read and decode a msgpack artifact
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<Loaded<T>> {
	let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
	let value = rmp_serde::from_slice(&bytes)
		.with_context(|| format!("Failed to deserialize {}", path.display()))?;

	Ok(Loaded {
		value,
		hash: ArtifactHash::of_bytes(&bytes),
		bytes: bytes.len(),
	})
}

/// Encode and write a msgpack artifact, creating parent directories
pub fn save<T: Serialize>(value: &T, path: &Path) -> Result<()> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("Failed to create {}", parent.display()))?;
	}

	let bytes = rmp_serde::to_vec_named(value).context("Failed to serialize artifact")?;
	fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::models::{IndexArtifact, Metric};

	#[test]
	fn save_then_load() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("model/nn_model.msgpack");
		let artifact = IndexArtifact {
			metric: Metric::Cosine,
			dim: 3,
			indptr: vec![0, 1],
			indices: vec![2],
			data: vec![0.5],
		};

		save(&artifact, &path).unwrap();
		let loaded: Loaded<IndexArtifact> = load(&path).unwrap();

		assert_eq!(loaded.value.metric, Metric::Cosine);
		assert_eq!(loaded.value.indices, vec![2]);
		assert_eq!(loaded.hash, ArtifactHash::compute(&path).unwrap());
	}

	#[test]
	fn missing_file_names_the_path() {
		let err = load::<IndexArtifact>(Path::new("/nonexistent/nn_model.msgpack"))
			.err()
			.unwrap();
		assert!(format!("{:#}", err).contains("nn_model.msgpack"));
	}

	#[test]
	fn garbage_fails_to_decode() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("broken.msgpack");
		fs::write(&path, b"\xc1\xc1\xc1").unwrap();
		assert!(load::<IndexArtifact>(&path).is_err());
	}
}
