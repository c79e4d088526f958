//! Build-time configuration for the omega home-automation node.
//!
//! Provides a typed, validated boundary between the values compiled into
//! the firmware and the collaborators that consume them:
//! - `Literals` — the raw value set embedded at build time
//! - `ConfigurationStore` — the immutable, validated store built once at startup
//! - `topics` — rules for the hierarchical topic paths
//! - `Secret` — credential wrapper that never prints its contents
//! - `MqttConfig::to_mqtt_options` — handoff to the MQTT client library

pub mod error;
pub mod literals;
pub mod mqtt;
pub mod secret;
pub mod store;
pub mod topics;

// Re-exports for convenience.
pub use error::{ConfigError, ConfigResult, Field, InvalidReason};
pub use literals::Literals;
pub use secret::Secret;
pub use store::{Advisory, ConfigurationStore, MqttConfig, TopicConfig, WifiConfig, load};
pub use topics::TopicError;
