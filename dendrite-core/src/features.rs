//! Fixed-length numeric feature arrays.

use serde::{Deserialize, Serialize};

/// One fixed-length `f32` array: a query vector, a peer response, or an
/// aggregate. Ephemeral — lives for one dispatch round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVec(Vec<f32>);

impl FeatureVec {
    /// Wrap a vector of values.
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    /// The zero array of the given dimension.
    pub fn zeros(dim: usize) -> Self {
        Self(vec![0.0; dim])
    }

    /// Number of elements.
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Borrow the values.
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Consume into the inner vector.
    pub fn into_inner(self) -> Vec<f32> {
        self.0
    }

    /// Accumulate `weight * other` into `self`.
    ///
    /// Both arrays must share a dimension; the aggregator guarantees this
    /// by demoting mismatched responses before combining.
    pub fn add_scaled(&mut self, other: &FeatureVec, weight: f32) {
        debug_assert_eq!(self.dim(), other.dim());
        for (acc, v) in self.0.iter_mut().zip(&other.0) {
            *acc += weight * v;
        }
    }
}

impl From<Vec<f32>> for FeatureVec {
    fn from(values: Vec<f32>) -> Self {
        Self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_has_requested_dim() {
        let z = FeatureVec::zeros(4);
        assert_eq!(z.dim(), 4);
        assert!(z.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn add_scaled_accumulates() {
        let mut acc = FeatureVec::zeros(3);
        acc.add_scaled(&FeatureVec::new(vec![1.0, 2.0, 3.0]), 0.5);
        acc.add_scaled(&FeatureVec::new(vec![2.0, 2.0, 2.0]), 0.25);
        assert_eq!(acc.as_slice(), &[1.0, 1.5, 2.0]);
    }
}
