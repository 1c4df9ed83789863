//! ScriptedTransport — per-peer scripted call behavior.

use crate::error::TransportError;
use crate::features::FeatureVec;
use crate::peer::{Peer, PeerKey};
use crate::transport::Transport;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// What a scripted peer does when called.
#[derive(Debug, Clone)]
pub enum CallScript {
    /// Respond with these features.
    Respond(Vec<f32>),
    /// Fail with a connect error.
    Refuse,
    /// Sleep this long, then respond (drives timeout tests).
    Stall(Duration, Vec<f32>),
}

/// A transport whose behavior per peer key is scripted up front.
///
/// Peers without a script refuse. Tracks call counts and the high-water
/// mark of concurrently executing calls so tests can observe the
/// dispatcher's in-flight ceiling.
pub struct ScriptedTransport {
    scripts: Mutex<HashMap<PeerKey, CallScript>>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight_seen: AtomicUsize,
}

impl ScriptedTransport {
    /// Create an empty transport; every call refuses until scripted.
    pub fn new() -> Self {
        Self {
            scripts: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight_seen: AtomicUsize::new(0),
        }
    }

    /// Script the behavior for one peer key.
    pub fn script(self, key: PeerKey, script: CallScript) -> Self {
        self.scripts.lock().unwrap().insert(key, script);
        self
    }

    /// Total calls attempted.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Highest number of calls observed executing at once.
    pub fn max_in_flight_seen(&self) -> usize {
        self.max_in_flight_seen.load(Ordering::SeqCst)
    }
}

impl Default for ScriptedTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn call(
        &self,
        peer: &Peer,
        _features: &FeatureVec,
    ) -> Result<FeatureVec, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight_seen.fetch_max(now, Ordering::SeqCst);

        let script = self.scripts.lock().unwrap().get(&peer.key).cloned();
        let result = match script {
            Some(CallScript::Respond(values)) => Ok(FeatureVec::new(values)),
            Some(CallScript::Stall(delay, values)) => {
                tokio::time::sleep(delay).await;
                Ok(FeatureVec::new(values))
            }
            Some(CallScript::Refuse) | None => {
                Err(TransportError::Connect(format!("{} refused", peer.addr)))
            }
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}
