//! Load-once holder for every artifact a query needs

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crate::config::ArtifactPaths;
use crate::core::ArtifactHash;
use crate::models::{IndexArtifact, NeighborIndex, TfidfVectorizer, VectorizerArtifact};
use crate::storage::artifact;
use crate::storage::Catalog;
use crate::ui;

/// Where an artifact came from
#[derive(Debug, Clone)]
pub struct ArtifactInfo {
	pub name: &'static str,
	pub path: PathBuf,
	pub hash: ArtifactHash,
	pub bytes: usize,
}

/// Read-only artifacts, immutable after construction
pub struct ArtifactStore {
	title: TfidfVectorizer,
	description: TfidfVectorizer,
	index: NeighborIndex,
	catalog: Catalog,
	manifest: Vec<ArtifactInfo>,
}

impl ArtifactStore {
	/// Load all four artifacts. Any failure is fatal.
	pub fn load(paths: &ArtifactPaths) -> Result<Self> {
		let mut manifest = Vec::with_capacity(4);

		let title = load_vectorizer("title vectorizer", &paths.title_vectorizer, &mut manifest)?;
		let description = load_vectorizer("description vectorizer", &paths.desc_vectorizer, &mut manifest)?;

		let index = artifact::load::<IndexArtifact>(&paths.index)
			.context("Failed to load neighbor index")?;
		manifest.push(info("neighbor index", &paths.index, index.hash.clone(), index.bytes));
		let index = NeighborIndex::from_artifact(index.value).context("Failed to load neighbor index")?;

		let catalog = Catalog::load(&paths.catalog).context("Failed to load catalog")?;
		manifest.push(info("catalog", &paths.catalog, catalog.hash, catalog.bytes));
		let catalog = catalog.value;

		for entry in &manifest {
			ui::debug(&format!(
				"Loaded {} ({} bytes, {}) from {}",
				entry.name,
				entry.bytes,
				entry.hash.short(),
				entry.path.display()
			));
		}

		let mut store = Self::from_parts(title, description, index, catalog)?;
		store.manifest = manifest;
		Ok(store)
	}

	/// Assemble a store from already loaded parts
	pub fn from_parts(
		title: TfidfVectorizer,
		description: TfidfVectorizer,
		index: NeighborIndex,
		catalog: Catalog,
	) -> Result<Self> {
		if index.len() != catalog.len() {
			bail!(
				"Neighbor index has {} rows but catalog has {} books",
				index.len(),
				catalog.len()
			);
		}

		let query_dim = title.dim() + description.dim();
		if index.dim() != query_dim {
			ui::warn(&format!(
				"Index expects {} features but vectorizers produce {} ({} title + {} description); searches will fail",
				index.dim(),
				query_dim,
				title.dim(),
				description.dim()
			));
		}

		Ok(Self {
			title,
			description,
			index,
			catalog,
			manifest: Vec::new(),
		})
	}

	pub fn title_vectorizer(&self) -> &TfidfVectorizer {
		&self.title
	}

	pub fn description_vectorizer(&self) -> &TfidfVectorizer {
		&self.description
	}

	pub fn index(&self) -> &NeighborIndex {
		&self.index
	}

	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	/// Files the store was loaded from (empty for in-memory stores)
	pub fn manifest(&self) -> &[ArtifactInfo] {
		&self.manifest
	}
}

fn load_vectorizer(
	name: &'static str,
	path: &Path,
	manifest: &mut Vec<ArtifactInfo>,
) -> Result<TfidfVectorizer> {
	let loaded = artifact::load::<VectorizerArtifact>(path).with_context(|| format!("Failed to load {}", name))?;
	manifest.push(info(name, path, loaded.hash.clone(), loaded.bytes));
	TfidfVectorizer::from_artifact(loaded.value).with_context(|| format!("Failed to load {}", name))
}

fn info(name: &'static str, path: &Path, hash: ArtifactHash, bytes: usize) -> ArtifactInfo {
	ArtifactInfo {
		name,
		path: path.to_path_buf(),
		hash,
		bytes,
	}
}
