//! Per-item aggregate results and diagnostics.

use crate::features::FeatureVec;
use crate::outcome::CallOutcome;
use serde::{Deserialize, Serialize};

/// The combined remote response for one input item, plus diagnostics.
///
/// Every diagnostics vector has length equal to the round's peer snapshot,
/// indexed consistently with it, regardless of top-k or failure count —
/// consumers build fixed-shape tensors without per-round shape negotiation.
///
/// `features` is the zero array of the expected dimension when no peer
/// succeeded; "no remote context" is a well-typed zero, never an absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Weighted combination of the successful responses.
    pub features: FeatureVec,
    /// Applied weight per peer; zero for unselected and failed peers.
    pub weights: Vec<f32>,
    /// Calls attempted per peer for this item.
    pub request_counts: Vec<u32>,
    /// Outcome per peer; `NoCall` background.
    pub outcomes: Vec<CallOutcome>,
}

impl AggregateResult {
    /// The empty aggregate: zero features, all-zero diagnostics.
    pub fn empty(dim: usize, peer_count: usize) -> Self {
        Self {
            features: FeatureVec::zeros(dim),
            weights: vec![0.0; peer_count],
            request_counts: vec![0; peer_count],
            outcomes: vec![CallOutcome::NoCall; peer_count],
        }
    }

    /// Outcome codes as a fixed-shape vector (-1 no call, 0 failed, 1 success).
    pub fn outcome_codes(&self) -> Vec<i8> {
        self.outcomes.iter().map(CallOutcome::code).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_full_length_and_zero() {
        let r = AggregateResult::empty(8, 3);
        assert_eq!(r.features, FeatureVec::zeros(8));
        assert_eq!(r.weights, vec![0.0; 3]);
        assert_eq!(r.request_counts, vec![0; 3]);
        assert_eq!(r.outcome_codes(), vec![-1, -1, -1]);
    }
}
