//! Inbound surface of the dendrite wire contract.
//!
//! Peers reach this node through exactly one operation: `POST /v1/forward`
//! with an encoded envelope, answered with a response envelope or an
//! explicit failure status. The feature computation behind it is injected
//! as a [`ForwardHandler`] — this crate owns the wire, not the model.

pub mod config;
pub mod error;
pub mod handler;
pub mod routes;
pub mod state;

pub use config::AxonConfig;
pub use error::{AxonError, Result};
pub use handler::{EchoHandler, ForwardHandler};
pub use state::AppState;

/// Serve the forward surface on an already-bound listener.
///
/// Binding is left to the caller so tests and supervisors can bind port 0
/// and read the assigned address back.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> std::io::Result<()> {
    let app = routes::create_router(state)
        .layer(tower_http::trace::TraceLayer::new_for_http());
    axum::serve(listener, app).await
}
