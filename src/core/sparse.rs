//! Sparse feature vectors

use ndarray::Array1;

/// Sparse vector with strictly increasing indices
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
	dim: usize,
	indices: Vec<u32>,
	values: Vec<f32>,
}

impl SparseVector {
	/// All-zero vector of the given width
	pub fn zeros(dim: usize) -> Self {
		Self {
			dim,
			indices: Vec::new(),
			values: Vec::new(),
		}
	}

	/// Build from unordered `(index, value)` pairs; duplicates are summed, zeros dropped
	pub fn from_pairs(dim: usize, mut pairs: Vec<(u32, f32)>) -> Self {
		pairs.sort_by_key(|&(i, _)| i);

		let mut indices = Vec::with_capacity(pairs.len());
		let mut values: Vec<f32> = Vec::with_capacity(pairs.len());

		for (i, v) in pairs {
			debug_assert!((i as usize) < dim, "index {} out of range {}", i, dim);
			if indices.last() == Some(&i) {
				if let Some(last) = values.last_mut() {
					*last += v;
				}
			} else {
				indices.push(i);
				values.push(v);
			}
		}

		let mut vector = Self { dim, indices, values };
		vector.prune();
		vector
	}

	/// Build from a dense slice, keeping non-zero entries
	pub fn from_dense(dense: &[f32]) -> Self {
		let (indices, values) = dense
			.iter()
			.enumerate()
			.filter(|(_, v)| **v != 0.0)
			.map(|(i, v)| (i as u32, *v))
			.unzip();
		Self {
			dim: dense.len(),
			indices,
			values,
		}
	}

	pub fn dim(&self) -> usize {
		self.dim
	}

	pub fn nnz(&self) -> usize {
		self.indices.len()
	}

	pub fn is_zero(&self) -> bool {
		self.values.iter().all(|v| *v == 0.0)
	}

	pub fn iter(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
		self.indices.iter().zip(self.values.iter()).map(|(i, v)| (*i as usize, *v))
	}

	/// Value at `index` (zero when not stored)
	pub fn get(&self, index: usize) -> f32 {
		match self.indices.binary_search(&(index as u32)) {
			Ok(pos) => self.values[pos],
			Err(_) => 0.0,
		}
	}

	/// Multiply every entry by `weight`
	pub fn scale(mut self, weight: f32) -> Self {
		self.values.iter_mut().for_each(|v| *v *= weight);
		self
	}

	/// Append `other` after `self`; the result is `self.dim + other.dim` wide
	pub fn concat(&self, other: &Self) -> Self {
		let offset = self.dim as u32;
		let mut indices = Vec::with_capacity(self.nnz() + other.nnz());
		let mut values = Vec::with_capacity(self.nnz() + other.nnz());

		indices.extend_from_slice(&self.indices);
		values.extend_from_slice(&self.values);
		indices.extend(other.indices.iter().map(|i| i + offset));
		values.extend_from_slice(&other.values);

		Self {
			dim: self.dim + other.dim,
			indices,
			values,
		}
	}

	pub fn squared_norm(&self) -> f32 {
		self.values.iter().map(|v| v * v).sum()
	}

	pub fn norm(&self) -> f32 {
		self.squared_norm().sqrt()
	}

	/// Dot product against a dense vector of the same width
	pub fn dot_dense(&self, dense: &Array1<f32>) -> f32 {
		self.iter().map(|(i, v)| v * dense[i]).sum()
	}

	pub fn to_dense(&self) -> Array1<f32> {
		let mut dense = Array1::zeros(self.dim);
		for (i, v) in self.iter() {
			dense[i] = v;
		}
		dense
	}

	fn prune(&mut self) {
		if self.values.iter().all(|v| *v != 0.0) {
			return;
		}
		let (indices, values) = self
			.indices
			.iter()
			.zip(self.values.iter())
			.filter(|(_, v)| **v != 0.0)
			.map(|(i, v)| (*i, *v))
			.unzip();
		self.indices = indices;
		self.values = values;
	}
}
