//! Core domain types

pub mod book;
pub mod cover;
pub mod hash;
pub mod sparse;

pub use book::Book;
pub use cover::resolve_cover;
pub use hash::ArtifactHash;
pub use sparse::SparseVector;
