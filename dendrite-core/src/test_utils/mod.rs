//! In-memory implementations for testing.
//!
//! Available behind the `test-utils` feature flag. Minimal doubles for the
//! transport and directory boundaries, plus peer fixtures.

mod fixtures;
mod scripted_transport;
mod static_directory;

pub use fixtures::{peer_with_key, test_peers};
pub use scripted_transport::{CallScript, ScriptedTransport};
pub use static_directory::StaticDirectory;
