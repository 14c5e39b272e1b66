//! Application configuration and constants

use std::path::{Path, PathBuf};

// === Artifact Files ===
pub const ARTIFACTS_DIR: &str = "artifacts";
pub const ARTIFACTS_ENV: &str = "NASTENKA_ARTIFACTS_DIR";
pub const TITLE_VECTORIZER: &str = "vectorizers/title_vectorizer.msgpack";
pub const DESC_VECTORIZER: &str = "vectorizers/desc_vectorizer.msgpack";
pub const NEIGHBOR_INDEX: &str = "model/nn_model.msgpack";
pub const CATALOG: &str = "data/books.msgpack";

// === Query Weights ===
// Must match the weights the index was built with.
pub const TITLE_WEIGHT: f32 = 0.5;
pub const DESCRIPTION_WEIGHT: f32 = 3.0;

// === Search Defaults ===
pub const DEFAULT_NEIGHBORS: usize = 5;

// === Covers ===
pub const COVER_HOST: &str = "covers.openlibrary.org";
pub const NO_PHOTO_MARKER: &str = "nophoto";
pub const PLACEHOLDER_COVER: &str =
	"https://raw.githubusercontent.com/amirsohil/randomimages/refs/heads/main/placeholder.png";

/// Locations of the four artifacts loaded at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
	pub title_vectorizer: PathBuf,
	pub desc_vectorizer: PathBuf,
	pub index: PathBuf,
	pub catalog: PathBuf,
}

impl ArtifactPaths {
	/// Standard layout below an artifacts root
	pub fn in_dir(root: &Path) -> Self {
		Self {
			title_vectorizer: root.join(TITLE_VECTORIZER),
			desc_vectorizer: root.join(DESC_VECTORIZER),
			index: root.join(NEIGHBOR_INDEX),
			catalog: root.join(CATALOG),
		}
	}

	/// Resolve the layout, then apply per-file overrides
	pub fn resolve(root: Option<&Path>, overrides: &ArtifactOverrides) -> Self {
		let root = artifacts_dir(root);
		let mut paths = Self::in_dir(&root);

		if let Some(p) = &overrides.title_vectorizer {
			paths.title_vectorizer = p.clone();
		}
		if let Some(p) = &overrides.desc_vectorizer {
			paths.desc_vectorizer = p.clone();
		}
		if let Some(p) = &overrides.index {
			paths.index = p.clone();
		}
		if let Some(p) = &overrides.catalog {
			paths.catalog = p.clone();
		}

		paths
	}
}

/// Per-artifact path overrides from the command line
#[derive(Debug, Clone, Default)]
pub struct ArtifactOverrides {
	pub title_vectorizer: Option<PathBuf>,
	pub desc_vectorizer: Option<PathBuf>,
	pub index: Option<PathBuf>,
	pub catalog: Option<PathBuf>,
}

/// Get artifacts directory (flag, NASTENKA_ARTIFACTS_DIR, next to executable, or cwd)
pub fn artifacts_dir(custom: Option<&Path>) -> PathBuf {
	if let Some(custom) = custom {
		crate::ui::debug(&format!("Using custom artifacts dir: {}", custom.display()));
		return custom.to_path_buf();
	}

	if let Ok(env_path) = std::env::var(ARTIFACTS_ENV) {
		let path = PathBuf::from(&env_path);
		if path.is_dir() {
			crate::ui::debug(&format!("Using {}: {}", ARTIFACTS_ENV, env_path));
			return path;
		}
	}

	if let Ok(exe) = std::env::current_exe() {
		if let Some(dir) = exe.parent() {
			let artifacts = dir.join(ARTIFACTS_DIR);
			if artifacts.is_dir() {
				crate::ui::debug(&format!("Found artifacts at: {}", artifacts.display()));
				return artifacts;
			}
		}
	}

	PathBuf::from(ARTIFACTS_DIR)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn standard_layout() {
		let paths = ArtifactPaths::in_dir(Path::new("/srv/books"));
		assert_eq!(paths.index, PathBuf::from("/srv/books/model/nn_model.msgpack"));
		assert_eq!(paths.catalog, PathBuf::from("/srv/books/data/books.msgpack"));
	}

	#[test]
	fn overrides_replace_single_files() {
		let overrides = ArtifactOverrides {
			catalog: Some(PathBuf::from("/tmp/books.json")),
			..Default::default()
		};
		let paths = ArtifactPaths::resolve(Some(Path::new("/srv/books")), &overrides);

		assert_eq!(paths.catalog, PathBuf::from("/tmp/books.json"));
		assert_eq!(
			paths.title_vectorizer,
			PathBuf::from("/srv/books/vectorizers/title_vectorizer.msgpack")
		);
	}
}
