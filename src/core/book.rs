//! Catalog rows

use serde::Serialize;

/// One book in the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
	pub title: String,
	pub description: Option<String>,
	pub isbn: Option<String>,
	pub image_url: Option<String>,
	pub average_rating: f32,
}

impl Book {
	/// Description worth showing, `None` when absent or blank
	pub fn shown_description(&self) -> Option<&str> {
		self.description.as_deref().map(str::trim).filter(|d| !d.is_empty())
	}
}
