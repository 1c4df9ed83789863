//! Axon server binary.
//!
//! Serves the forward surface with the echo handler — enough to stand up
//! a reachable peer for mesh wiring and transport smoke tests. Real
//! deployments embed [`dendrite_axon::serve`] with their own handler.

use std::sync::Arc;

use dendrite_core::{PeerKey, PEER_KEY_LEN};
use rand::RngCore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dendrite_axon::{serve, AppState, AxonConfig, EchoHandler};

fn local_key(config: &AxonConfig) -> anyhow::Result<PeerKey> {
    match &config.key_hex {
        Some(hex) => Ok(PeerKey::from_hex(hex)?),
        None => {
            let mut bytes = [0u8; PEER_KEY_LEN];
            rand::thread_rng().fill_bytes(&mut bytes);
            Ok(PeerKey::from_bytes(bytes))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dendrite_axon=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AxonConfig::from_env();
    let key = local_key(&config)?;

    tracing::info!("starting axon v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(key = %key.to_hex(), "node identity");
    tracing::info!(addr = %config.bind_address(), "bind address");

    let state = AppState::new(key, Arc::new(EchoHandler));
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    serve(listener, state).await?;

    Ok(())
}
