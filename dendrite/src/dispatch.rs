//! Concurrent fan-out of one dispatch round.

use std::sync::Arc;

use dendrite_core::{
    CallOutcome, CallRecord, CallTimeout, FeatureVec, Peer, Selection, Transport, TransportError,
};
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

use crate::config::DendriteConfig;

/// Issues one concurrent call per (item, selection) pair and records a
/// per-call outcome.
///
/// Fault isolation is the primary contract: calls for different pairs are
/// independent, and a failing peer changes nothing about any other pair's
/// outcome. The in-flight ceiling is enforced with a semaphore whose
/// permits cover the call itself; the per-call timeout clock starts when
/// the pair is dispatched, so queueing counts against it and round
/// wall-clock stays bounded by the configured timeout.
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    semaphore: Arc<Semaphore>,
    call_timeout: CallTimeout,
    response_dim: usize,
}

impl Dispatcher {
    /// Create a dispatcher over a transport. The configuration must have
    /// been validated.
    pub fn new(transport: Arc<dyn Transport>, config: &DendriteConfig) -> Self {
        Self {
            transport,
            semaphore: Arc::new(Semaphore::new(config.max_in_flight)),
            call_timeout: config.call_timeout,
            response_dim: config.response_dim,
        }
    }

    /// Fan out every (item, selection) pair concurrently and collect the
    /// attributed records, grouped per item.
    ///
    /// The returned records are exhaustive: one per pair, regardless of
    /// how each call ended. Cancelling `cancel` resolves pending and
    /// in-flight pairs as `Failed` promptly; any late responses are
    /// dropped with their tasks.
    pub async fn dispatch(
        &self,
        round_id: u64,
        selections: &[Vec<Selection>],
        queries: &[FeatureVec],
        peers: &[Peer],
        cancel: &CancellationToken,
    ) -> Vec<Vec<CallRecord>> {
        debug_assert_eq!(selections.len(), queries.len());

        let mut handles = Vec::new();
        for (item, item_selections) in selections.iter().enumerate() {
            for selection in item_selections {
                let handle = tokio::spawn(Self::one_call(
                    Arc::clone(&self.transport),
                    Arc::clone(&self.semaphore),
                    self.call_timeout,
                    self.response_dim,
                    round_id,
                    item,
                    selection.peer_index,
                    peers[selection.peer_index].clone(),
                    queries[item].clone(),
                    cancel.clone(),
                ));
                handles.push((item, selection.peer_index, selection.peer, handle));
            }
        }

        let mut records: Vec<Vec<CallRecord>> = vec![Vec::new(); selections.len()];
        for (item, peer_index, peer, handle) in handles {
            let record = match handle.await {
                Ok(record) => record,
                // A panicking transport still costs only its own pair.
                Err(join_error) => {
                    tracing::warn!(
                        round_id,
                        item,
                        peer = %peer,
                        error = %join_error,
                        "call task died"
                    );
                    CallRecord {
                        item,
                        peer_index,
                        peer,
                        outcome: CallOutcome::Failed,
                        response: None,
                    }
                }
            };
            records[record.item].push(record);
        }
        records
    }

    /// One call: acquire an in-flight slot, call the peer, classify.
    ///
    /// Owns everything it needs so the spawned task never borrows the
    /// dispatcher.
    #[allow(clippy::too_many_arguments)]
    async fn one_call(
        transport: Arc<dyn Transport>,
        semaphore: Arc<Semaphore>,
        call_timeout: CallTimeout,
        response_dim: usize,
        round_id: u64,
        item: usize,
        peer_index: usize,
        peer: Peer,
        query: FeatureVec,
        cancel: CancellationToken,
    ) -> CallRecord {
        let key = peer.key;
        let attempt = async {
            let _permit = semaphore
                .acquire()
                .await
                .map_err(|_| TransportError::Cancelled)?;
            transport.call(&peer, &query).await
        };

        let result = tokio::select! {
            _ = cancel.cancelled() => Err(TransportError::Cancelled),
            outcome = tokio::time::timeout(call_timeout.as_duration(), attempt) => {
                match outcome {
                    Ok(result) => result,
                    Err(_) => Err(TransportError::Timeout(call_timeout)),
                }
            }
        };

        let outcome = match result {
            Ok(response) if response.dim() == response_dim => {
                tracing::debug!(round_id, item, peer = %key, "call succeeded");
                return CallRecord {
                    item,
                    peer_index,
                    peer: key,
                    outcome: CallOutcome::Success,
                    response: Some(response),
                };
            }
            Ok(response) => {
                tracing::warn!(
                    round_id,
                    item,
                    peer = %key,
                    expected = response_dim,
                    got = response.dim(),
                    "response shape mismatch"
                );
                CallOutcome::Failed
            }
            Err(error) => {
                tracing::warn!(
                    round_id,
                    item,
                    peer = %key,
                    timeout = error.is_timeout(),
                    error = %error,
                    "call failed"
                );
                CallOutcome::Failed
            }
        };

        CallRecord {
            item,
            peer_index,
            peer: key,
            outcome,
            response: None,
        }
    }
}
