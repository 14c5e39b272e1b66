//! Exact k-nearest-neighbor index over sparse catalog vectors

use serde::{Deserialize, Serialize};

use crate::core::SparseVector;
use crate::error::{RecommendError, Result};

/// Distance used to rank neighbors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
	#[default]
	Euclidean,
	Cosine,
}

impl std::fmt::Display for Metric {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Metric::Euclidean => write!(f, "euclidean"),
			Metric::Cosine => write!(f, "cosine"),
		}
	}
}

/// Serialized index: catalog vectors as compressed sparse rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexArtifact {
	#[serde(default)]
	pub metric: Metric,
	pub dim: usize,
	pub indptr: Vec<u64>,
	pub indices: Vec<u32>,
	pub data: Vec<f32>,
}

/// One search hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
	/// Catalog row position
	pub row: usize,
	pub distance: f32,
}

pub struct NeighborIndex {
	artifact: IndexArtifact,
	row_norms: Vec<f32>,
}

impl NeighborIndex {
	/// Validate the sparse layout and cache per-row squared norms
	pub fn from_artifact(artifact: IndexArtifact) -> Result<Self> {
		const NAME: &str = "neighbor index";

		let dim = artifact.dim;
		let indptr = &artifact.indptr;
		let indices = &artifact.indices;
		let data = &artifact.data;

		if indptr.is_empty() || indptr[0] != 0 {
			return Err(RecommendError::corrupt(NAME, "indptr must start at 0"));
		}
		if indptr.windows(2).any(|w| w[0] > w[1]) {
			return Err(RecommendError::corrupt(NAME, "indptr is not monotone"));
		}
		if indices.len() != data.len() {
			return Err(RecommendError::corrupt(
				NAME,
				format!("{} indices but {} values", indices.len(), data.len()),
			));
		}
		if indptr.last().copied() != Some(indices.len() as u64) {
			return Err(RecommendError::corrupt(NAME, "indptr does not cover all values"));
		}
		if let Some(col) = indices.iter().find(|&&c| c as usize >= dim) {
			return Err(RecommendError::corrupt(
				NAME,
				format!("column {} outside dimension {}", col, dim),
			));
		}
		if let Some(pos) = data.iter().position(|v| !v.is_finite()) {
			return Err(RecommendError::corrupt(NAME, format!("non-finite value at position {}", pos)));
		}

		let row_norms: Vec<f32> = indptr
			.windows(2)
			.map(|w| data[w[0] as usize..w[1] as usize].iter().map(|v| v * v).sum::<f32>())
			.collect();

		Ok(Self { artifact, row_norms })
	}

	/// Build an index from already encoded rows
	pub fn build(metric: Metric, dim: usize, rows: &[SparseVector]) -> Result<Self> {
		let mut indptr = Vec::with_capacity(rows.len() + 1);
		let mut indices = Vec::new();
		let mut data = Vec::new();
		indptr.push(0);

		for row in rows {
			if row.dim() != dim {
				return Err(RecommendError::DimensionMismatch {
					expected: dim,
					actual: row.dim(),
				});
			}
			for (i, v) in row.iter() {
				indices.push(i as u32);
				data.push(v);
			}
			indptr.push(indices.len() as u64);
		}

		Self::from_artifact(IndexArtifact {
			metric,
			dim,
			indptr,
			indices,
			data,
		})
	}

	pub fn artifact(&self) -> &IndexArtifact {
		&self.artifact
	}

	pub fn dim(&self) -> usize {
		self.artifact.dim
	}

	pub fn len(&self) -> usize {
		self.row_norms.len()
	}

	pub fn is_empty(&self) -> bool {
		self.row_norms.is_empty()
	}

	pub fn metric(&self) -> Metric {
		self.artifact.metric
	}

	/// The `k` rows nearest to `query`, nearest first.
	///
	/// Returns fewer than `k` when the index is smaller. Equal distances keep row order.
	pub fn kneighbors(&self, query: &SparseVector, k: usize) -> Result<Vec<Neighbor>> {
		if k == 0 {
			return Err(RecommendError::InvalidNeighborCount(k));
		}
		if query.dim() != self.dim() {
			return Err(RecommendError::DimensionMismatch {
				expected: self.dim(),
				actual: query.dim(),
			});
		}

		let dense = query.to_dense();
		let query_norm = query.squared_norm();

		let mut neighbors: Vec<Neighbor> = (0..self.len())
			.map(|row| {
				let (cols, vals) = self.row(row);
				let dot: f32 = cols.iter().zip(vals).map(|(&c, v)| v * dense[c as usize]).sum();
				Neighbor {
					row,
					distance: self.distance(dot, query_norm, self.row_norms[row]),
				}
			})
			.collect();

		neighbors.sort_by(|a, b| a.distance.total_cmp(&b.distance).then(a.row.cmp(&b.row)));
		neighbors.truncate(k);

		Ok(neighbors)
	}

	fn row(&self, row: usize) -> (&[u32], &[f32]) {
		let start = self.artifact.indptr[row] as usize;
		let end = self.artifact.indptr[row + 1] as usize;
		(&self.artifact.indices[start..end], &self.artifact.data[start..end])
	}

	fn distance(&self, dot: f32, query_norm: f32, row_norm: f32) -> f32 {
		match self.artifact.metric {
			Metric::Euclidean => (query_norm + row_norm - 2.0 * dot).max(0.0).sqrt(),
			Metric::Cosine => {
				if query_norm == 0.0 || row_norm == 0.0 {
					1.0
				} else {
					1.0 - dot / (query_norm.sqrt() * row_norm.sqrt())
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rows(points: &[[f32; 2]]) -> Vec<SparseVector> {
		points.iter().map(|p| SparseVector::from_dense(p)).collect()
	}

	fn grid() -> NeighborIndex {
		let points = rows(&[[0.0, 0.0], [5.0, 5.0], [1.0, 0.0], [0.0, 2.0], [3.0, 3.0], [9.0, 9.0]]);
		NeighborIndex::build(Metric::Euclidean, 2, &points).unwrap()
	}

	#[test]
	fn returns_k_sorted() {
		let index = grid();
		let query = SparseVector::from_dense(&[0.0, 0.0]);
		let hits = index.kneighbors(&query, 5).unwrap();

		assert_eq!(hits.len(), 5);
		assert_eq!(hits.iter().map(|n| n.row).collect::<Vec<_>>(), vec![0, 2, 3, 4, 1]);
		assert!(hits.windows(2).all(|w| w[0].distance <= w[1].distance));
		assert!((hits[1].distance - 1.0).abs() < 1e-6);
	}

	#[test]
	fn small_catalog_returns_all_rows() {
		let index = NeighborIndex::build(Metric::Euclidean, 2, &rows(&[[1.0, 0.0], [0.0, 1.0]])).unwrap();
		let hits = index.kneighbors(&SparseVector::from_dense(&[1.0, 0.0]), 5).unwrap();
		assert_eq!(hits.len(), 2);
		assert_eq!(hits[0].row, 0);
	}

	#[test]
	fn dimension_mismatch_is_an_error() {
		let index = grid();
		let err = index.kneighbors(&SparseVector::zeros(3), 5).unwrap_err();
		assert!(matches!(
			err,
			RecommendError::DimensionMismatch {
				expected: 2,
				actual: 3
			}
		));
	}

	#[test]
	fn zero_k_is_rejected() {
		let index = grid();
		let err = index.kneighbors(&SparseVector::zeros(2), 0).unwrap_err();
		assert!(matches!(err, RecommendError::InvalidNeighborCount(0)));
	}

	#[test]
	fn ties_keep_row_order() {
		let index = NeighborIndex::build(Metric::Euclidean, 2, &rows(&[[1.0, 0.0], [0.0, 1.0], [1.0, 0.0]])).unwrap();
		let hits = index.kneighbors(&SparseVector::zeros(2), 3).unwrap();
		assert_eq!(hits.iter().map(|n| n.row).collect::<Vec<_>>(), vec![0, 1, 2]);
	}

	#[test]
	fn cosine_ignores_magnitude() {
		let index = NeighborIndex::build(Metric::Cosine, 2, &rows(&[[10.0, 0.0], [1.0, 1.0], [0.0, 0.0]])).unwrap();
		let hits = index.kneighbors(&SparseVector::from_dense(&[0.1, 0.0]), 3).unwrap();

		assert_eq!(hits[0].row, 0);
		assert!(hits[0].distance.abs() < 1e-6);
		assert_eq!(hits[2].row, 2);
		assert_eq!(hits[2].distance, 1.0);
	}

	#[test]
	fn rejects_inconsistent_layout() {
		let artifact = IndexArtifact {
			metric: Metric::Euclidean,
			dim: 2,
			indptr: vec![0, 2, 1],
			indices: vec![0, 1],
			data: vec![1.0, 1.0],
		};
		assert!(NeighborIndex::from_artifact(artifact).is_err());

		let artifact = IndexArtifact {
			metric: Metric::Euclidean,
			dim: 2,
			indptr: vec![0, 1],
			indices: vec![4],
			data: vec![1.0],
		};
		assert!(NeighborIndex::from_artifact(artifact).is_err());
	}

	#[test]
	fn rejects_non_finite_values() {
		let data: Vec<f32> = (0..40).map(|i| if i % 3 == 0 { f32::NAN } else { i as f32 }).collect();
		let artifact = IndexArtifact {
			metric: Metric::Euclidean,
			dim: 1,
			indptr: (0..=40).collect(),
			indices: vec![0; 40],
			data,
		};
		let err = NeighborIndex::from_artifact(artifact).err().unwrap();
		assert!(matches!(err, RecommendError::CorruptArtifact { .. }));

		let artifact = IndexArtifact {
			metric: Metric::Cosine,
			dim: 2,
			indptr: vec![0, 2],
			indices: vec![0, 1],
			data: vec![1.0, f32::INFINITY],
		};
		assert!(NeighborIndex::from_artifact(artifact).is_err());
	}

	#[test]
	fn nearest_row_wins_over_far_rows() {
		let rows: Vec<SparseVector> = (0..40).map(|i| SparseVector::from_dense(&[i as f32])).collect();
		let index = NeighborIndex::build(Metric::Euclidean, 1, &rows).unwrap();
		let hits = index.kneighbors(&SparseVector::from_dense(&[20.0]), 5).unwrap();
		assert_eq!(hits[0].row, 20);
		assert_eq!(hits[0].distance, 0.0);
	}
}
