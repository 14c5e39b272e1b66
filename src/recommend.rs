//! Recommendation pipeline: encode → retrieve → present

use serde::Serialize;

use crate::config::DEFAULT_NEIGHBORS;
use crate::core::{resolve_cover, SparseVector};
use crate::error::Result;
use crate::models::{Neighbor, QueryEncoder};
use crate::storage::{ArtifactStore, Catalog};

/// A validated query; both fields hold non-blank text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookQuery<'a> {
	pub title: &'a str,
	pub description: &'a str,
}

impl<'a> BookQuery<'a> {
	/// `None` when either field is blank, in which case no search runs
	pub fn new(title: &'a str, description: &'a str) -> Option<Self> {
		let title = title.trim();
		let description = description.trim();
		if title.is_empty() || description.is_empty() {
			return None;
		}
		Some(Self { title, description })
	}
}

/// One rendered result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
	/// 1-based position in the result list
	pub rank: usize,
	/// Catalog row position
	pub row: usize,
	pub title: String,
	pub cover_url: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	pub average_rating: f32,
	pub distance: f32,
}

/// Process-wide recommendation service over a loaded [`ArtifactStore`]
pub struct Recommender {
	store: ArtifactStore,
	neighbors: usize,
}

impl Recommender {
	pub fn new(store: ArtifactStore) -> Self {
		Self {
			store,
			neighbors: DEFAULT_NEIGHBORS,
		}
	}

	/// Number of results per query
	pub fn with_neighbors(mut self, neighbors: usize) -> Self {
		self.neighbors = neighbors;
		self
	}

	pub fn neighbors(&self) -> usize {
		self.neighbors
	}

	pub fn store(&self) -> &ArtifactStore {
		&self.store
	}

	pub fn encoder(&self) -> QueryEncoder<'_> {
		QueryEncoder::new(self.store.title_vectorizer(), self.store.description_vectorizer())
	}

	pub fn encode(&self, query: &BookQuery) -> SparseVector {
		self.encoder().encode(query.title, query.description)
	}

	/// Nearest catalog rows for a query, nearest first
	pub fn retrieve(&self, query: &BookQuery) -> Result<Vec<Neighbor>> {
		let vector = self.encode(query);
		self.store.index().kneighbors(&vector, self.neighbors)
	}

	/// Recommendations for raw user input. Blank input performs no search and yields nothing.
	pub fn recommend(&self, title: &str, description: &str) -> Result<Vec<Recommendation>> {
		let Some(query) = BookQuery::new(title, description) else {
			return Ok(Vec::new());
		};

		let neighbors = self.retrieve(&query)?;
		Ok(present(self.store.catalog(), &neighbors))
	}
}

/// Map neighbors to catalog rows, keeping order, and resolve each cover
pub fn present(catalog: &Catalog, neighbors: &[Neighbor]) -> Vec<Recommendation> {
	neighbors
		.iter()
		.filter_map(|n| catalog.get(n.row).map(|book| (n, book)))
		.enumerate()
		.map(|(i, (n, book))| Recommendation {
			rank: i + 1,
			row: n.row,
			title: book.title.clone(),
			cover_url: resolve_cover(book.isbn.as_deref(), book.image_url.as_deref()),
			description: book.shown_description().map(String::from),
			average_rating: book.average_rating,
			distance: n.distance,
		})
		.collect()
}
