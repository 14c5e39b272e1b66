//! Artifact storage

pub mod artifact;
pub mod catalog;
pub mod store;

pub use catalog::{Catalog, CatalogColumns};
pub use store::{ArtifactInfo, ArtifactStore};
