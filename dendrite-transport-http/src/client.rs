//! HTTP transport client struct and builder.

use async_trait::async_trait;
use dendrite_core::{FeatureVec, Peer, PeerKey, Transport, TransportError};
use dendrite_wire::{decode_features, encode_features, Envelope};

use crate::error::{map_http_status, map_reqwest_error, map_wire_error};

/// Path of the single forward operation.
const FORWARD_PATH: &str = "/v1/forward";

/// Transport that speaks the forward operation over HTTP.
///
/// # Example
///
/// ```no_run
/// use dendrite_core::{PeerKey, PEER_KEY_LEN};
/// use dendrite_transport_http::HttpTransport;
///
/// let transport = HttpTransport::new(PeerKey::from_bytes([7; PEER_KEY_LEN]));
/// ```
pub struct HttpTransport {
    /// Public identity stamped on outbound envelopes as the caller.
    caller: PeerKey,
    /// Shared HTTP client; owns the connection pool.
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport that identifies as `caller`.
    #[must_use]
    pub fn new(caller: PeerKey) -> Self {
        Self {
            caller,
            client: reqwest::Client::new(),
        }
    }

    /// Use a preconfigured [`reqwest::Client`] (pool sizing, client-level
    /// timeouts, proxies).
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Build the forward endpoint URL for a peer.
    fn forward_url(&self, peer: &Peer) -> String {
        format!("http://{}{}", peer.addr, FORWARD_PATH)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    /// Send one encoded envelope to `peer` and decode its response.
    ///
    /// Every failure is classified into a [`TransportError`]; malformed
    /// response bytes are data, not a crash.
    async fn call(
        &self,
        peer: &Peer,
        features: &FeatureVec,
    ) -> Result<FeatureVec, TransportError> {
        let url = self.forward_url(peer);
        let request = Envelope::new(self.caller, peer.key, encode_features(features));

        tracing::debug!(
            url = %url,
            peer = %peer.key,
            nonce = ?request.nonce,
            dim = features.dim(),
            "sending forward request"
        );

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/octet-stream")
            .body(request.encode())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            return Err(map_http_status(
                status,
                &String::from_utf8_lossy(&body),
            ));
        }

        let envelope = Envelope::decode(&body).map_err(map_wire_error)?;
        decode_features(&envelope.payload).map_err(map_wire_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dendrite_core::{PeerAddr, PEER_KEY_LEN};

    fn key(tag: u8) -> PeerKey {
        PeerKey::from_bytes([tag; PEER_KEY_LEN])
    }

    #[test]
    fn forward_url_targets_the_peer_address() {
        let transport = HttpTransport::new(key(1));
        let peer = Peer::new(key(2), PeerAddr::new("10.1.2.3", 8091));
        assert_eq!(
            transport.forward_url(&peer),
            "http://10.1.2.3:8091/v1/forward"
        );
    }

    #[tokio::test]
    async fn unreachable_peer_classifies_as_connect_failure() {
        let transport = HttpTransport::new(key(1));
        // Port 1 on loopback; nothing listens there.
        let peer = Peer::new(key(2), PeerAddr::new("127.0.0.1", 1));
        let result = transport.call(&peer, &FeatureVec::zeros(2)).await;
        assert!(matches!(
            result,
            Err(TransportError::Connect(_)) | Err(TransportError::Other(_))
        ));
    }
}
