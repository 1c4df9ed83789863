//! Per-call outcomes and their attribution records.

use crate::features::FeatureVec;
use crate::peer::PeerKey;
use serde::{Deserialize, Serialize};

/// Result of one (item, peer) call.
///
/// This is a tri-state, not a boolean: downstream diagnostics must
/// distinguish "never asked" from "asked and failed". `NoCall` is the
/// background value for peers a round never selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallOutcome {
    /// Peer was not selected for this item.
    #[default]
    NoCall,
    /// Call attempted, no usable response (timeout, transport error,
    /// malformed payload). The cause survives only in logs.
    Failed,
    /// Usable feature array returned.
    Success,
}

impl CallOutcome {
    /// Fixed numeric code for tensor export: -1 no call, 0 failed, 1 success.
    pub fn code(&self) -> i8 {
        match self {
            CallOutcome::NoCall => -1,
            CallOutcome::Failed => 0,
            CallOutcome::Success => 1,
        }
    }

    /// Whether a usable response was returned.
    pub fn is_success(&self) -> bool {
        matches!(self, CallOutcome::Success)
    }
}

/// One attributed call result within a dispatch round.
///
/// The (item, peer) attribution is exact and survives partial failure —
/// records are never dropped or misattributed.
#[derive(Debug, Clone)]
pub struct CallRecord {
    /// Index of the input item within the round's batch.
    pub item: usize,
    /// Index of the peer within the round's snapshot.
    pub peer_index: usize,
    /// Identity of the called peer.
    pub peer: PeerKey,
    /// How the call ended.
    pub outcome: CallOutcome,
    /// The returned features; present iff `outcome` is `Success`.
    pub response: Option<FeatureVec>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(CallOutcome::NoCall.code(), -1);
        assert_eq!(CallOutcome::Failed.code(), 0);
        assert_eq!(CallOutcome::Success.code(), 1);
    }

    #[test]
    fn default_is_no_call() {
        assert_eq!(CallOutcome::default(), CallOutcome::NoCall);
    }
}
