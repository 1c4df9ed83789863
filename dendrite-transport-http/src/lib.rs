//! HTTP implementation of the dendrite [`Transport`] boundary.
//!
//! One call is one `POST /v1/forward` carrying an encoded envelope as an
//! octet-stream body; the response body is the peer's envelope. Connection
//! pooling and reuse across rounds come from the shared [`reqwest::Client`];
//! a failed call does not poison later calls to the same peer beyond the
//! client's normal reconnect behavior.

mod client;
mod error;

pub use client::HttpTransport;
