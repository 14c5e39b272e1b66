//! Columnar book catalog

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::{ArtifactHash, Book};
use crate::error::RecommendError;

use super::artifact::Loaded;

/// On-disk layout: one array per column, all the same length
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogColumns {
	#[serde(alias = "title_without_series")]
	pub title: Vec<String>,
	pub description: Vec<Option<String>>,
	pub isbn: Vec<Option<String>>,
	pub image_url: Vec<Option<String>>,
	pub average_rating: Vec<f32>,
}

impl CatalogColumns {
	pub fn push(&mut self, book: Book) {
		self.title.push(book.title);
		self.description.push(book.description);
		self.isbn.push(book.isbn);
		self.image_url.push(book.image_url);
		self.average_rating.push(book.average_rating);
	}
}

impl FromIterator<Book> for CatalogColumns {
	fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
		let mut columns = Self::default();
		for book in iter {
			columns.push(book);
		}
		columns
	}
}

/// Immutable catalog; a book's identity is its row position
#[derive(Debug, Clone)]
pub struct Catalog {
	books: Vec<Book>,
	hash: ArtifactHash,
}

impl Catalog {
	pub fn from_columns(columns: CatalogColumns, hash: ArtifactHash) -> Result<Self, RecommendError> {
		let rows = columns.title.len();
		let lengths = [
			("description", columns.description.len()),
			("isbn", columns.isbn.len()),
			("image_url", columns.image_url.len()),
			("average_rating", columns.average_rating.len()),
		];

		if let Some((name, len)) = lengths.iter().find(|(_, len)| *len != rows) {
			return Err(RecommendError::corrupt(
				"catalog",
				format!("column {} has {} rows, title has {}", name, len, rows),
			));
		}

		let books = columns
			.title
			.into_iter()
			.zip(columns.description)
			.zip(columns.isbn)
			.zip(columns.image_url)
			.zip(columns.average_rating)
			.map(|((((title, description), isbn), image_url), average_rating)| Book {
				title,
				description,
				isbn,
				image_url,
				average_rating,
			})
			.collect();

		Ok(Self { books, hash })
	}

	/// Load from `.json` or msgpack (any other extension)
	pub fn load(path: &Path) -> Result<Loaded<Self>> {
		let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

		let columns: CatalogColumns = if is_json(path) {
			serde_json::from_slice(&bytes)
				.with_context(|| format!("Failed to parse {}", path.display()))?
		} else {
			rmp_serde::from_slice(&bytes)
				.with_context(|| format!("Failed to deserialize {}", path.display()))?
		};

		let hash = ArtifactHash::of_bytes(&bytes);
		let value = Self::from_columns(columns, hash.clone())?;
		Ok(Loaded {
			value,
			hash,
			bytes: bytes.len(),
		})
	}

	pub fn len(&self) -> usize {
		self.books.len()
	}

	pub fn is_empty(&self) -> bool {
		self.books.is_empty()
	}

	pub fn get(&self, row: usize) -> Option<&Book> {
		self.books.get(row)
	}

	pub fn books(&self) -> &[Book] {
		&self.books
	}

	pub fn hash(&self) -> &ArtifactHash {
		&self.hash
	}
}

fn is_json(path: &Path) -> bool {
	path.extension()
		.and_then(|e| e.to_str())
		.is_some_and(|e| e.eq_ignore_ascii_case("json"))
}
