//! Top-k peer selection over injected scoring and weighting strategies.
//!
//! The router owns none of the math: a [`PeerScorer`] (the model's learned
//! compatibility function) produces per-peer scores and a [`WeightPolicy`]
//! normalizes the selected scores into mixture weights. What lives here is
//! the selection mechanics — deterministic top-k, clamping, and the
//! degenerate cases — so routing stays testable without a model.

use dendrite_core::{FeatureVec, Peer, PeerScorer, RouterError, Selection, WeightPolicy};
use serde::{Deserialize, Serialize};

/// Router configuration, validated at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Maximum peers queried per input item. Clamped to the snapshot size
    /// at call time; zero is rejected up front.
    pub top_k: usize,
}

impl RouterConfig {
    /// Validate the configuration.
    ///
    /// This is the only place selection can fail — `select` itself never
    /// errors.
    pub fn validate(&self) -> Result<(), RouterError> {
        if self.top_k == 0 {
            return Err(RouterError::InvalidTopK { got: 0 });
        }
        Ok(())
    }
}

/// Selects, per input item, an ordered subset of peers and their weights.
pub struct Router<S: PeerScorer, W: WeightPolicy> {
    scorer: S,
    policy: W,
    top_k: usize,
}

impl<S: PeerScorer, W: WeightPolicy> Router<S, W> {
    /// Create a router from a validated configuration and injected
    /// strategies.
    pub fn new(config: RouterConfig, scorer: S, policy: W) -> Result<Self, RouterError> {
        config.validate()?;
        Ok(Self {
            scorer,
            policy,
            top_k: config.top_k,
        })
    }

    /// Select peers for every query in the batch.
    ///
    /// Returns one selection list per item, each ordered by weight
    /// descending and at most `top_k` long. An empty snapshot selects
    /// nothing — the caller reads the resulting empty aggregate as "no
    /// remote context available", not as an error.
    ///
    /// Selection is deterministic: equal scores break ties by peer key,
    /// ascending, and NaN scores order last.
    pub fn select(&self, queries: &[FeatureVec], peers: &[Peer]) -> Vec<Vec<Selection>> {
        queries
            .iter()
            .map(|query| self.select_one(query, peers))
            .collect()
    }

    fn select_one(&self, query: &FeatureVec, peers: &[Peer]) -> Vec<Selection> {
        if peers.is_empty() {
            return Vec::new();
        }

        let scores = self.scorer.score(query, peers);
        if scores.len() != peers.len() {
            tracing::error!(
                expected = peers.len(),
                got = scores.len(),
                "scorer broke its one-score-per-peer contract; selecting nothing"
            );
            return Vec::new();
        }

        // NaN demotes below every real score (total_cmp would rank +NaN
        // above +inf, which would let a broken scorer hog the selection).
        let scores: Vec<f32> = scores
            .into_iter()
            .map(|s| if s.is_nan() { f32::NEG_INFINITY } else { s })
            .collect();

        let k = self.top_k.min(peers.len());
        let mut order: Vec<usize> = (0..peers.len()).collect();
        order.sort_by(|&a, &b| {
            scores[b]
                .total_cmp(&scores[a])
                .then_with(|| peers[a].key.cmp(&peers[b].key))
        });
        order.truncate(k);

        let top_scores: Vec<f32> = order.iter().map(|&i| scores[i]).collect();
        let weights = self.policy.weigh(&top_scores);
        debug_assert_eq!(weights.len(), order.len());

        let mut selections: Vec<Selection> = order
            .into_iter()
            .zip(weights)
            .map(|(peer_index, weight)| Selection {
                peer_index,
                peer: peers[peer_index].key,
                weight,
            })
            .collect();
        // The policy is monotonic, so this is already weight-descending for
        // sane policies; sort anyway to hold the ordering contract.
        selections.sort_by(|a, b| {
            b.weight
                .total_cmp(&a.weight)
                .then_with(|| a.peer.cmp(&b.peer))
        });
        selections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dendrite_core::test_utils::test_peers;
    use dendrite_core::Softmax;

    fn scores(values: Vec<f32>) -> impl PeerScorer {
        move |_q: &FeatureVec, _peers: &[Peer]| values.clone()
    }

    fn router<S: PeerScorer>(top_k: usize, scorer: S) -> Router<S, Softmax> {
        Router::new(RouterConfig { top_k }, scorer, Softmax).unwrap()
    }

    #[test]
    fn zero_top_k_is_rejected_at_construction() {
        let err = Router::new(RouterConfig { top_k: 0 }, scores(vec![]), Softmax)
            .err()
            .unwrap();
        assert!(matches!(err, RouterError::InvalidTopK { got: 0 }));
    }

    #[test]
    fn selects_highest_scoring_peers() {
        let peers = test_peers(3);
        let r = router(2, scores(vec![0.1, 0.9, 0.5]));
        let selections = r.select(&[FeatureVec::zeros(4)], &peers);

        assert_eq!(selections.len(), 1);
        let picked: Vec<usize> = selections[0].iter().map(|s| s.peer_index).collect();
        assert_eq!(picked, vec![1, 2]);
        assert!(selections[0][0].weight > selections[0][1].weight);
    }

    #[test]
    fn equal_scores_break_ties_by_peer_key() {
        let peers = test_peers(4);
        let r = router(2, scores(vec![0.5, 0.5, 0.5, 0.5]));

        for _ in 0..10 {
            let selections = r.select(&[FeatureVec::zeros(4)], &peers);
            let picked: Vec<usize> = selections[0].iter().map(|s| s.peer_index).collect();
            assert_eq!(picked, vec![0, 1], "tie-break must be stable across runs");
        }
    }

    #[test]
    fn top_k_clamps_to_peer_count() {
        let peers = test_peers(2);
        let r = router(16, scores(vec![1.0, 2.0]));
        let selections = r.select(&[FeatureVec::zeros(4)], &peers);
        assert_eq!(selections[0].len(), 2);
    }

    #[test]
    fn empty_snapshot_selects_nothing_without_error() {
        let r = router(3, scores(vec![]));
        let selections = r.select(&[FeatureVec::zeros(4), FeatureVec::zeros(4)], &[]);
        assert_eq!(selections, vec![Vec::new(), Vec::new()]);
    }

    #[test]
    fn nan_scores_order_last() {
        let peers = test_peers(3);
        let r = router(2, scores(vec![f32::NAN, 0.2, 0.1]));
        let selections = r.select(&[FeatureVec::zeros(4)], &peers);
        let picked: Vec<usize> = selections[0].iter().map(|s| s.peer_index).collect();
        assert_eq!(picked, vec![1, 2]);
    }

    #[test]
    fn contract_breaking_scorer_selects_nothing() {
        let peers = test_peers(3);
        let r = router(2, scores(vec![1.0]));
        let selections = r.select(&[FeatureVec::zeros(4)], &peers);
        assert!(selections[0].is_empty());
    }

    #[test]
    fn weights_are_mixture_weights() {
        let peers = test_peers(3);
        let r = router(3, scores(vec![1.0, 2.0, 3.0]));
        let selections = r.select(&[FeatureVec::zeros(4)], &peers);
        let total: f32 = selections[0].iter().map(|s| s.weight).sum();
        assert!((total - 1.0).abs() < 1e-6);
        assert!(selections[0].iter().all(|s| s.weight >= 0.0));
    }
}
