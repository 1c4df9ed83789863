//! # dendrite — the remote expert query layer
//!
//! One dispatch round runs the full pipeline: take a peer snapshot from the
//! [`Directory`](dendrite_core::Directory), select peers and weights per
//! input item ([`dendrite_router::Router`]), fan the calls out concurrently
//! over a [`Transport`](dendrite_core::Transport) with a bounded in-flight
//! ceiling and per-call timeouts, and combine what came back into per-item
//! aggregates with fixed-shape diagnostics.
//!
//! The contract callers rely on:
//!
//! - One unreachable peer never aborts or delays a batch; per-call faults
//!   become [`CallOutcome::Failed`](dendrite_core::CallOutcome) data.
//! - Round wall-clock is bounded by the per-call timeout, not the sum.
//! - Every outcome maps to exactly one (item, peer) pair, under any mix of
//!   failures.
//! - When every selected peer fails for an item, the aggregate is the zero
//!   array — well-typed absence, not an error.

pub mod aggregate;
pub mod config;
pub mod dispatch;
pub mod round;

pub use aggregate::aggregate;
pub use config::DendriteConfig;
pub use dispatch::Dispatcher;
pub use round::Dendrite;
