//! # Text Models
//!
//! Pre-built TF-IDF vectorizers, the query encoder and the neighbor index.

pub mod encoder;
pub mod neighbors;
pub mod vectorizer;

pub use encoder::QueryEncoder;
pub use neighbors::{IndexArtifact, Metric, Neighbor, NeighborIndex};
pub use vectorizer::{Norm, TfidfVectorizer, VectorizerArtifact};
