//! Environment-driven server configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the axon binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxonConfig {
    /// Bind host. `AXON_HOST`, default `0.0.0.0`.
    pub host: String,
    /// Bind port. `AXON_PORT`, default `8091`.
    pub port: u16,
    /// Node identity as 64 hex characters. `AXON_KEY`; a fresh random
    /// identity is generated when unset.
    pub key_hex: Option<String>,
}

impl AxonConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("AXON_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("AXON_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8091),
            key_hex: std::env::var("AXON_KEY").ok(),
        }
    }

    /// The address to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
