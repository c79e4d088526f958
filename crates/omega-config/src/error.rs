//! Configuration error types.

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::topics::TopicError;

/// Names each build-time option, displayed as the option name used at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    WifiSsid,
    WifiPassword,
    MqttHost,
    MqttPort,
    TopicEnvironment,
    TopicOutlet,
    MqttClientId,
    MqttUsername,
    MqttPassword,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WifiSsid => "WIFI_SSID",
            Self::WifiPassword => "WIFI_P",
            Self::MqttHost => "MQTT_HOST",
            Self::MqttPort => "MQTT_PORT",
            Self::TopicEnvironment => "TOPIC_ENV",
            Self::TopicOutlet => "TOPIC_OUTLET",
            Self::MqttClientId => "MQTT_CLIENT_ID",
            Self::MqttUsername => "MQTT_USERNAME",
            Self::MqttPassword => "MQTT_P",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidReason {
    #[error("value is empty")]
    Empty,

    #[error("port {0} is outside 1-65535")]
    PortOutOfRange(i32),

    #[error("{0}")]
    Topic(#[from] TopicError),

    #[error("value starts with whitespace")]
    LeadingWhitespace,
}

/// Errors that can occur while building the configuration store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    InvalidField { field: Field, reason: InvalidReason },
}

impl ConfigError {
    pub fn invalid(field: Field, reason: impl Into<InvalidReason>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// The field that failed validation.
    pub fn field(&self) -> Field {
        match self {
            Self::InvalidField { field, .. } => *field,
        }
    }
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
