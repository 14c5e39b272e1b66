//! Weighted title + description query encoding

use crate::config::{DESCRIPTION_WEIGHT, TITLE_WEIGHT};
use crate::core::SparseVector;

use super::TfidfVectorizer;

/// Turns a (title, description) pair into one vector in the index's column layout:
/// `[title × 0.5 | description × 3.0]`.
pub struct QueryEncoder<'a> {
	title: &'a TfidfVectorizer,
	description: &'a TfidfVectorizer,
}

impl<'a> QueryEncoder<'a> {
	pub fn new(title: &'a TfidfVectorizer, description: &'a TfidfVectorizer) -> Self {
		Self { title, description }
	}

	/// Width of the encoded query
	pub fn dim(&self) -> usize {
		self.title.dim() + self.description.dim()
	}

	pub fn encode(&self, title: &str, description: &str) -> SparseVector {
		let title_vec = self.title.transform(title).scale(TITLE_WEIGHT);
		let desc_vec = self.description.transform(description).scale(DESCRIPTION_WEIGHT);
		title_vec.concat(&desc_vec)
	}
}
