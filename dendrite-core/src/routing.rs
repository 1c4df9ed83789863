//! Injected routing strategies: scoring and weight normalization.

use crate::features::FeatureVec;
use crate::peer::Peer;

/// Query/peer compatibility scoring.
///
/// The scoring math (learned keys, content hashes, whatever the model
/// trains) is the model's concern — the router only consumes the scores.
/// Injected rather than embedded so the router is testable without a model.
pub trait PeerScorer: Send + Sync {
    /// Score `query` against every peer in `peers`.
    ///
    /// Must return exactly one score per peer, in snapshot order. Higher
    /// means more compatible. The router treats a wrong-length result as
    /// a violated contract and selects nothing for that item.
    fn score(&self, query: &FeatureVec, peers: &[Peer]) -> Vec<f32>;
}

impl<F> PeerScorer for F
where
    F: Fn(&FeatureVec, &[Peer]) -> Vec<f32> + Send + Sync,
{
    fn score(&self, query: &FeatureVec, peers: &[Peer]) -> Vec<f32> {
        self(query, peers)
    }
}

/// Normalization of the selected scores into mixture weights.
///
/// Must be monotonic and produce non-negative weights. The exact function
/// is a policy the model owns; [`Softmax`] is the conventional default.
pub trait WeightPolicy: Send + Sync {
    /// Map the top-k scores of one item (selection order) to weights.
    fn weigh(&self, scores: &[f32]) -> Vec<f32>;
}

/// Numerically stable softmax over the selected scores.
///
/// Weights are positive and sum to 1, so failed-peer weight mass visibly
/// goes missing from the aggregate rather than being redistributed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Softmax;

impl WeightPolicy for Softmax {
    fn weigh(&self, scores: &[f32]) -> Vec<f32> {
        if scores.is_empty() {
            return Vec::new();
        }
        let max = scores.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        if max == f32::NEG_INFINITY {
            // Nothing scored above the floor; no weight to hand out.
            return vec![0.0; scores.len()];
        }
        let exps: Vec<f32> = scores.iter().map(|s| (s - max).exp()).collect();
        let sum: f32 = exps.iter().sum();
        exps.into_iter().map(|e| e / sum).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn softmax_sums_to_one() {
        let w = Softmax.weigh(&[2.0, 1.0, 0.5]);
        let total: f32 = w.iter().sum();
        assert!((total - 1.0).abs() < 1e-6);
        assert!(w[0] > w[1] && w[1] > w[2]);
    }

    #[test]
    fn softmax_is_stable_for_large_scores() {
        let w = Softmax.weigh(&[1000.0, 999.0]);
        assert!(w.iter().all(|v| v.is_finite()));
        assert!(w[0] > w[1]);
    }

    #[test]
    fn softmax_of_empty_is_empty() {
        assert!(Softmax.weigh(&[]).is_empty());
    }

    #[test]
    fn closures_are_scorers() {
        let scorer = |_q: &FeatureVec, peers: &[Peer]| vec![0.0; peers.len()];
        assert_eq!(scorer.score(&FeatureVec::zeros(2), &[]).len(), 0);
    }
}
