//! TF-IDF text vectorizer loaded from a pre-built artifact
//!
//! The vocabulary and idf weights are fitted offline. At query time the
//! vectorizer only transforms text:
//!
//! ```text
//! tfidf(t, d) = tf(t, d) × idf(t)
//! tf(t, d)    = count of t in d   (or 1 + ln(count) when sublinear)
//! ```
//!
//! followed by optional row normalization.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::core::SparseVector;
use crate::error::{RecommendError, Result};

pub const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

/// Row normalization applied after weighting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
	None,
	L1,
	#[default]
	L2,
}

/// Serialized form of a fitted vectorizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerArtifact {
	/// Term → column
	pub vocabulary: HashMap<String, u32>,
	/// Inverse document frequency per column
	pub idf: Vec<f32>,
	#[serde(default = "default_lowercase")]
	pub lowercase: bool,
	#[serde(default = "default_token_pattern")]
	pub token_pattern: String,
	#[serde(default = "default_ngram_range")]
	pub ngram_range: (usize, usize),
	#[serde(default)]
	pub stop_words: Vec<String>,
	#[serde(default)]
	pub sublinear_tf: bool,
	#[serde(default)]
	pub norm: Norm,
}

fn default_lowercase() -> bool {
	true
}

fn default_token_pattern() -> String {
	DEFAULT_TOKEN_PATTERN.to_string()
}

fn default_ngram_range() -> (usize, usize) {
	(1, 1)
}

impl VectorizerArtifact {
	/// Unigram artifact with default settings
	pub fn new(vocabulary: HashMap<String, u32>, idf: Vec<f32>) -> Self {
		Self {
			vocabulary,
			idf,
			lowercase: default_lowercase(),
			token_pattern: default_token_pattern(),
			ngram_range: default_ngram_range(),
			stop_words: Vec::new(),
			sublinear_tf: false,
			norm: Norm::default(),
		}
	}
}

pub struct TfidfVectorizer {
	artifact: VectorizerArtifact,
	token_re: Regex,
	stop_words: HashSet<String>,
}

impl TfidfVectorizer {
	/// Validate an artifact and compile its token pattern
	pub fn from_artifact(artifact: VectorizerArtifact) -> Result<Self> {
		const NAME: &str = "vectorizer";

		if artifact.idf.is_empty() {
			return Err(RecommendError::corrupt(NAME, "empty vocabulary"));
		}

		let dim = artifact.idf.len();
		if let Some(pos) = artifact.idf.iter().position(|v| !v.is_finite()) {
			return Err(RecommendError::corrupt(NAME, format!("non-finite idf at column {}", pos)));
		}
		if let Some((term, idx)) = artifact.vocabulary.iter().find(|(_, i)| **i as usize >= dim) {
			return Err(RecommendError::corrupt(
				NAME,
				format!("term {:?} maps to column {} but only {} idf values exist", term, idx, dim),
			));
		}

		let (min_n, max_n) = artifact.ngram_range;
		if min_n == 0 || min_n > max_n {
			return Err(RecommendError::corrupt(
				NAME,
				format!("invalid ngram range ({}, {})", min_n, max_n),
			));
		}

		let token_re = Regex::new(&artifact.token_pattern)?;
		let stop_words = artifact.stop_words.iter().cloned().collect();

		Ok(Self {
			artifact,
			token_re,
			stop_words,
		})
	}

	/// Width of the feature space
	pub fn dim(&self) -> usize {
		self.artifact.idf.len()
	}

	pub fn vocabulary_size(&self) -> usize {
		self.artifact.vocabulary.len()
	}

	pub fn artifact(&self) -> &VectorizerArtifact {
		&self.artifact
	}

	/// Transform one document. Unknown terms are ignored, so unseen text gives a zero vector.
	pub fn transform(&self, text: &str) -> SparseVector {
		let mut counts: HashMap<u32, f32> = HashMap::new();
		for term in self.terms(text) {
			if let Some(&col) = self.artifact.vocabulary.get(&term) {
				*counts.entry(col).or_insert(0.0) += 1.0;
			}
		}

		let weighted = counts
			.into_iter()
			.map(|(col, tf)| {
				let tf = if self.artifact.sublinear_tf { 1.0 + tf.ln() } else { tf };
				(col, tf * self.artifact.idf[col as usize])
			})
			.collect();

		let vector = SparseVector::from_pairs(self.dim(), weighted);
		normalize(vector, self.artifact.norm)
	}

	/// Tokens and n-grams in document order
	fn terms(&self, text: &str) -> Vec<String> {
		let text = if self.artifact.lowercase {
			text.to_lowercase()
		} else {
			text.to_string()
		};

		let tokens: Vec<&str> = self
			.token_re
			.find_iter(&text)
			.map(|m| m.as_str())
			.filter(|t| !self.stop_words.contains(*t))
			.collect();

		let (min_n, max_n) = self.artifact.ngram_range;
		let mut terms = Vec::new();
		for n in min_n..=max_n {
			terms.extend(tokens.windows(n).map(|w| w.join(" ")));
		}
		terms
	}
}

fn normalize(vector: SparseVector, norm: Norm) -> SparseVector {
	let length = match norm {
		Norm::None => return vector,
		Norm::L1 => vector.iter().map(|(_, v)| v.abs()).sum::<f32>(),
		Norm::L2 => vector.norm(),
	};

	if length > 0.0 {
		vector.scale(1.0 / length)
	} else {
		vector
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn artifact(terms: &[&str]) -> VectorizerArtifact {
		let vocabulary = terms
			.iter()
			.enumerate()
			.map(|(i, t)| (t.to_string(), i as u32))
			.collect();
		let idf = (0..terms.len()).map(|i| 1.0 + i as f32).collect();
		VectorizerArtifact::new(vocabulary, idf)
	}

	#[test]
	fn counts_times_idf() {
		let mut a = artifact(&["wizard", "school", "dragon"]);
		a.norm = Norm::None;
		let v = TfidfVectorizer::from_artifact(a).unwrap();

		let out = v.transform("Wizard school, wizard!");
		assert_eq!(out.dim(), 3);
		assert_eq!(out.get(0), 2.0);
		assert_eq!(out.get(1), 2.0);
		assert_eq!(out.get(2), 0.0);
	}

	#[test]
	fn l2_normalized_by_default() {
		let v = TfidfVectorizer::from_artifact(artifact(&["wizard", "school"])).unwrap();
		let out = v.transform("wizard school");
		assert!((out.norm() - 1.0).abs() < 1e-6);
	}

	#[test]
	fn unseen_text_is_zero() {
		let v = TfidfVectorizer::from_artifact(artifact(&["wizard"])).unwrap();
		let out = v.transform("completely unrelated words");
		assert!(out.is_zero());
		assert_eq!(out.dim(), 1);
	}

	#[test]
	fn single_letter_tokens_are_skipped() {
		let mut a = artifact(&["a", "boy"]);
		a.norm = Norm::None;
		let v = TfidfVectorizer::from_artifact(a).unwrap();
		let out = v.transform("a boy");
		assert_eq!(out.get(0), 0.0);
		assert_eq!(out.get(1), 2.0);
	}

	#[test]
	fn bigrams_and_stop_words() {
		let mut a = artifact(&["dark", "tower", "dark tower"]);
		a.ngram_range = (1, 2);
		a.stop_words = vec!["the".into()];
		a.norm = Norm::None;
		let v = TfidfVectorizer::from_artifact(a).unwrap();

		let out = v.transform("The Dark Tower");
		assert_eq!(out.get(0), 1.0);
		assert_eq!(out.get(1), 2.0);
		assert_eq!(out.get(2), 3.0);
	}

	#[test]
	fn sublinear_tf() {
		let mut a = artifact(&["rain"]);
		a.sublinear_tf = true;
		a.norm = Norm::None;
		let v = TfidfVectorizer::from_artifact(a).unwrap();
		let out = v.transform("rain rain rain");
		assert!((out.get(0) - (1.0 + 3.0f32.ln())).abs() < 1e-6);
	}

	#[test]
	fn rejects_out_of_range_vocabulary() {
		let mut a = artifact(&["one", "two"]);
		a.idf.pop();
		let err = TfidfVectorizer::from_artifact(a).err().unwrap();
		assert!(matches!(err, RecommendError::CorruptArtifact { .. }));
	}

	#[test]
	fn rejects_non_finite_values() {
		let mut a = artifact(&["one", "two"]);
		a.idf[1] = f32::NAN;
		let err = TfidfVectorizer::from_artifact(a).err().unwrap();
		assert!(matches!(err, RecommendError::CorruptArtifact { .. }));
	}

	#[test]
	fn rejects_bad_ngram_range() {
		let mut a = artifact(&["one"]);
		a.ngram_range = (2, 1);
		assert!(TfidfVectorizer::from_artifact(a).is_err());
	}

	#[test]
	fn rejects_bad_token_pattern() {
		let mut a = artifact(&["one"]);
		a.token_pattern = "(".into();
		let err = TfidfVectorizer::from_artifact(a).err().unwrap();
		assert!(matches!(err, RecommendError::TokenPattern(_)));
	}
}
