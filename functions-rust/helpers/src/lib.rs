//! Shared utilities for the function crates: Temporal connection settings,
//! client construction and activity result decoding.

use std::str::FromStr;

use anyhow::Context;
use log::debug;
use temporal_client::{Client, RetryClient};
use temporal_sdk::sdk_client_options;
use temporal_sdk_core::Url;

mod parse_activity_result;

pub use parse_activity_result::parse_activity_result;

/// Server address used when `TEMPORAL_ADDRESS` is not set.
pub const DEFAULT_ADDRESS: &str = "http://localhost:7233";
/// Namespace used when `TEMPORAL_NAMESPACE` is not set.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Where to find the Temporal server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub address: String,
    pub namespace: String,
}

impl ConnectionSettings {
    /// Read `TEMPORAL_ADDRESS` and `TEMPORAL_NAMESPACE`, falling back to the
    /// local dev server defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            address: non_empty("TEMPORAL_ADDRESS").unwrap_or_else(|| DEFAULT_ADDRESS.to_owned()),
            namespace: non_empty("TEMPORAL_NAMESPACE")
                .unwrap_or_else(|| DEFAULT_NAMESPACE.to_owned()),
        }
    }
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_owned(),
            namespace: DEFAULT_NAMESPACE.to_owned(),
        }
    }
}

/// Connect to the Temporal server described by [`ConnectionSettings::from_env`].
pub async fn get_client() -> Result<RetryClient<Client>, anyhow::Error> {
    connect(&ConnectionSettings::from_env()).await
}

/// Connect using explicit settings.
pub async fn connect(settings: &ConnectionSettings) -> Result<RetryClient<Client>, anyhow::Error> {
    debug!(
        "Connecting to Temporal at {} (namespace={})",
        settings.address, settings.namespace
    );

    let opts = sdk_client_options(Url::from_str(&settings.address)?)
        .build()
        .context("failed building Temporal client options")?;

    // `RetryClient` retries transient failures on its own.
    let client = opts
        .connect(settings.namespace.clone(), None)
        .await
        .context("failed connecting to Temporal server")?;

    Ok(client)
}
