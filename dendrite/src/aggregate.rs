//! Weighted combination of per-call outcomes into per-item aggregates.

use dendrite_core::{AggregateResult, CallOutcome, CallRecord, Selection};

/// Combine each item's successful responses into one aggregate, using the
/// selection weights as given.
///
/// Weights are not renormalized over the successful subset: when a
/// selected peer fails, its weight mass goes missing from the aggregate,
/// and the shrunken magnitude is the caller's signal that remote coverage
/// was partial. An item with no successes aggregates to the zero array.
///
/// Diagnostics vectors span the full peer snapshot (`peer_count`), indexed
/// consistently with it.
pub fn aggregate(
    records: &[Vec<CallRecord>],
    selections: &[Vec<Selection>],
    peer_count: usize,
    response_dim: usize,
) -> Vec<AggregateResult> {
    debug_assert_eq!(records.len(), selections.len());

    records
        .iter()
        .zip(selections)
        .enumerate()
        .map(|(item, (item_records, item_selections))| {
            let mut result = AggregateResult::empty(response_dim, peer_count);
            let mut successes = 0usize;

            for record in item_records {
                let weight = item_selections
                    .iter()
                    .find(|s| s.peer_index == record.peer_index)
                    .map(|s| s.weight)
                    .unwrap_or(0.0);

                result.request_counts[record.peer_index] += 1;
                result.outcomes[record.peer_index] = record.outcome;

                if let (CallOutcome::Success, Some(response)) = (record.outcome, &record.response) {
                    result.weights[record.peer_index] = weight;
                    result.features.add_scaled(response, weight);
                    successes += 1;
                }
            }

            if successes == 0 && !item_selections.is_empty() {
                tracing::warn!(item, "every selected peer failed; zero aggregate");
            }
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dendrite_core::{FeatureVec, PeerKey, PEER_KEY_LEN};

    fn key(tag: u8) -> PeerKey {
        PeerKey::from_bytes([tag; PEER_KEY_LEN])
    }

    fn selection(peer_index: usize, tag: u8, weight: f32) -> Selection {
        Selection {
            peer_index,
            peer: key(tag),
            weight,
        }
    }

    fn record(
        item: usize,
        peer_index: usize,
        tag: u8,
        outcome: CallOutcome,
        response: Option<Vec<f32>>,
    ) -> CallRecord {
        CallRecord {
            item,
            peer_index,
            peer: key(tag),
            outcome,
            response: response.map(FeatureVec::new),
        }
    }

    // Peers [A, B, C] at indices [0, 1, 2]; scores favored B > A; top-2
    // selected B and A; B failed, A succeeded.
    #[test]
    fn failed_weight_mass_is_not_redistributed() {
        let w_a = 0.4;
        let w_b = 0.6;
        let selections = vec![vec![selection(1, 2, w_b), selection(0, 1, w_a)]];
        let records = vec![vec![
            record(0, 1, 2, CallOutcome::Failed, None),
            record(0, 0, 1, CallOutcome::Success, Some(vec![1.0, 2.0])),
        ]];

        let results = aggregate(&records, &selections, 3, 2);

        assert_eq!(results.len(), 1);
        let result = &results[0];
        assert_eq!(result.features, FeatureVec::new(vec![w_a * 1.0, w_a * 2.0]));
        assert_eq!(result.weights, vec![w_a, 0.0, 0.0]);
        assert_eq!(result.request_counts, vec![1, 1, 0]);
        assert_eq!(result.outcome_codes(), vec![1, 0, -1]);
    }

    #[test]
    fn all_failed_yields_zero_aggregate() {
        let selections = vec![vec![selection(0, 1, 0.5), selection(1, 2, 0.5)]];
        let records = vec![vec![
            record(0, 0, 1, CallOutcome::Failed, None),
            record(0, 1, 2, CallOutcome::Failed, None),
        ]];

        let results = aggregate(&records, &selections, 2, 4);

        assert_eq!(results[0].features, FeatureVec::zeros(4));
        assert_eq!(results[0].weights, vec![0.0, 0.0]);
        assert_eq!(results[0].request_counts, vec![1, 1]);
        assert_eq!(results[0].outcome_codes(), vec![0, 0]);
    }

    #[test]
    fn empty_selections_yield_zero_aggregate_and_no_call_diagnostics() {
        let results = aggregate(&[Vec::new(), Vec::new()], &[Vec::new(), Vec::new()], 3, 2);

        assert_eq!(results.len(), 2);
        for result in &results {
            assert_eq!(result.features, FeatureVec::zeros(2));
            assert_eq!(result.outcome_codes(), vec![-1, -1, -1]);
            assert_eq!(result.request_counts, vec![0, 0, 0]);
        }
    }

    #[test]
    fn diagnostics_are_full_length_regardless_of_top_k() {
        let selections = vec![vec![selection(4, 5, 1.0)]];
        let records = vec![vec![record(
            0,
            4,
            5,
            CallOutcome::Success,
            Some(vec![2.0]),
        )]];

        let results = aggregate(&records, &selections, 9, 1);

        assert_eq!(results[0].weights.len(), 9);
        assert_eq!(results[0].request_counts.len(), 9);
        assert_eq!(results[0].outcomes.len(), 9);
        assert_eq!(results[0].features, FeatureVec::new(vec![2.0]));
    }

    #[test]
    fn two_successes_combine_weighted() {
        let selections = vec![vec![selection(0, 1, 0.75), selection(1, 2, 0.25)]];
        let records = vec![vec![
            record(0, 0, 1, CallOutcome::Success, Some(vec![4.0])),
            record(0, 1, 2, CallOutcome::Success, Some(vec![8.0])),
        ]];

        let results = aggregate(&records, &selections, 2, 1);
        assert_eq!(results[0].features, FeatureVec::new(vec![0.75 * 4.0 + 0.25 * 8.0]));
    }
}
