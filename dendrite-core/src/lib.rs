//! # dendrite-core — data model and protocol traits for the remote query layer
//!
//! This crate defines the types and trait boundaries that the dendrite
//! crates compose around. It performs no I/O and holds no state.
//!
//! ## The boundaries
//!
//! | Boundary | Trait | What it does |
//! |----------|-------|-------------|
//! | Transport | [`Transport`] | One call to one peer, features in, features out |
//! | Directory | [`Directory`] | Read-only peer snapshot per round |
//! | Scoring | [`PeerScorer`] | Query/peer compatibility scores (owned by the model) |
//! | Weighting | [`WeightPolicy`] | Normalization of selected scores into mixture weights |
//!
//! ## Design principle
//!
//! Every per-call runtime fault is data, not control flow: the dispatcher
//! absorbs [`TransportError`] into [`CallOutcome::Failed`] and callers
//! observe partial aggregates plus diagnostics. Only configuration-time
//! errors ([`RouterError`]) propagate as hard failures.

#![deny(missing_docs)]

pub mod directory;
pub mod error;
pub mod features;
pub mod outcome;
pub mod peer;
pub mod result;
pub mod routing;
pub mod selection;
pub mod timeout;
pub mod transport;

#[cfg(feature = "test-utils")]
pub mod test_utils;

// Re-exports for convenience
pub use directory::Directory;
pub use error::{RouterError, TransportError};
pub use features::FeatureVec;
pub use outcome::{CallOutcome, CallRecord};
pub use peer::{Peer, PeerAddr, PeerKey, PeerStatus, PEER_KEY_LEN};
pub use result::AggregateResult;
pub use routing::{PeerScorer, Softmax, WeightPolicy};
pub use selection::Selection;
pub use timeout::CallTimeout;
pub use transport::Transport;
