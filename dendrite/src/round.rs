//! The per-round pipeline: snapshot, select, dispatch, aggregate.

use std::sync::Arc;

use dendrite_core::{
    AggregateResult, Directory, FeatureVec, PeerScorer, RouterError, Transport, WeightPolicy,
};
use dendrite_router::Router;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::aggregate::aggregate;
use crate::config::DendriteConfig;
use crate::dispatch::Dispatcher;

/// The remote query layer, assembled.
///
/// Holds the router, a dispatcher over the injected transport, and the
/// directory. Construction is the only fallible step; a round itself
/// always produces one [`AggregateResult`] per query, however many peers
/// misbehaved.
pub struct Dendrite<S: PeerScorer, W: WeightPolicy> {
    router: Router<S, W>,
    dispatcher: Dispatcher,
    directory: Arc<dyn Directory>,
    config: DendriteConfig,
}

impl<S: PeerScorer, W: WeightPolicy> Dendrite<S, W> {
    /// Assemble the layer from a validated configuration, a constructed
    /// router, and the transport/directory collaborators.
    pub fn new(
        config: DendriteConfig,
        router: Router<S, W>,
        transport: Arc<dyn Transport>,
        directory: Arc<dyn Directory>,
    ) -> Result<Self, RouterError> {
        config.validate()?;
        let dispatcher = Dispatcher::new(transport, &config);
        Ok(Self {
            router,
            dispatcher,
            directory,
            config,
        })
    }

    /// Run one dispatch round over the batch.
    ///
    /// Blocks until every call has resolved or timed out; wall-clock cost
    /// is bounded by the per-call timeout.
    pub async fn forward(&self, queries: &[FeatureVec]) -> Vec<AggregateResult> {
        self.forward_with_cancel(queries, &CancellationToken::new())
            .await
    }

    /// Run one dispatch round that the caller can abandon.
    ///
    /// Cancelling `cancel` resolves outstanding calls as failed without
    /// waiting for peer-side confirmation; late responses are discarded.
    pub async fn forward_with_cancel(
        &self,
        queries: &[FeatureVec],
        cancel: &CancellationToken,
    ) -> Vec<AggregateResult> {
        let round_id: u64 = rand::random();
        let span = tracing::debug_span!("dispatch_round", round_id, batch = queries.len());

        async {
            let peers = self.directory.current_peers().await;
            tracing::debug!(peer_count = peers.len(), "snapshot taken");

            let selections = self.router.select(queries, &peers);
            let records = self
                .dispatcher
                .dispatch(round_id, &selections, queries, &peers, cancel)
                .await;

            aggregate(
                &records,
                &selections,
                peers.len(),
                self.config.response_dim,
            )
        }
        .instrument(span)
        .await
    }
}
