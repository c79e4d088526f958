//! One-time startup: logging, configuration load, summary.

use anyhow::Context;
use omega_config::{ConfigurationStore, Literals};
use tracing_subscriber::EnvFilter;

/// Install the JSON log subscriber. Verbosity comes from `RUST_LOG`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();
}

/// Validate `literals` into the store every collaborator will borrow.
///
/// An invalid value is fatal: the caller must not start any network
/// activity when this returns an error.
pub fn boot(literals: &Literals) -> anyhow::Result<ConfigurationStore> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "omega-node starting"
    );

    let store = ConfigurationStore::from_literals(literals)
        .context("build-time configuration is invalid")?;

    let rendered = summary(&store)?;
    let advisories = serde_json::to_string(&store.advisories())
        .context("failed to render configuration advisories")?;
    tracing::info!(summary = %rendered, advisories = %advisories, "config loaded");

    Ok(store)
}

/// Redacted JSON rendering of the store for logs.
pub fn summary(store: &ConfigurationStore) -> anyhow::Result<String> {
    serde_json::to_string(store).context("failed to render configuration summary")
}
