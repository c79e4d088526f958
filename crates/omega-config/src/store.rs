//! The immutable configuration store built once at startup.
//!
//! `load()` validates the compiled-in [`Literals`] and hands back a
//! [`ConfigurationStore`]. Collaborators receive the store by reference;
//! nothing can mutate it after construction.

use std::fmt;

use serde::Serialize;

use crate::error::{ConfigError, ConfigResult, Field, InvalidReason};
use crate::literals::Literals;
use crate::secret::Secret;
use crate::topics;

/// Client ids brokers are required to accept (MQTT 3.1.1, 3.1.3.1).
const PORTABLE_CLIENT_ID_LEN: usize = 23;
/// 802.11 SSID limit in bytes.
const MAX_SSID_LEN: usize = 32;
/// WPA2-PSK passphrase length in characters.
const PASSPHRASE_LEN: std::ops::RangeInclusive<usize> = 8..=63;
const PLAINTEXT_MQTT_PORT: u16 = 1883;

// ── Sections ──────────────────────────────────────────────────

/// Credentials for the WiFi connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WifiConfig {
    ssid: String,
    password: Secret,
}

impl WifiConfig {
    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    pub fn password(&self) -> &Secret {
        &self.password
    }
}

/// Broker address and session identity for the MQTT client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MqttConfig {
    broker_host: String,
    broker_port: u16,
    client_id: String,
    username: String,
    password: Secret,
}

impl MqttConfig {
    pub fn broker_host(&self) -> &str {
        &self.broker_host
    }

    pub fn broker_port(&self) -> u16 {
        self.broker_port
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &Secret {
        &self.password
    }
}

/// Topic paths for sensor telemetry and outlet control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicConfig {
    environment: String,
    outlet: String,
}

impl TopicConfig {
    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn outlet(&self) -> &str {
        &self.outlet
    }

    pub fn environment_levels(&self) -> Vec<&str> {
        topics::segments(&self.environment)
    }

    pub fn outlet_levels(&self) -> Vec<&str> {
        topics::segments(&self.outlet)
    }
}

// ── ConfigurationStore ────────────────────────────────────────

/// Validated, read-only configuration for the whole process lifetime.
///
/// Every string field is non-empty, the port is in 1-65535, and both topics
/// are hierarchical paths without empty levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigurationStore {
    wifi: WifiConfig,
    mqtt: MqttConfig,
    topics: TopicConfig,
}

/// Build the store from the values compiled into this binary.
///
/// Fails with [`ConfigError::InvalidField`] on the first field that breaks
/// its invariant. The result depends only on the compiled values, so a
/// failure is final.
pub fn load() -> ConfigResult<ConfigurationStore> {
    ConfigurationStore::load()
}

impl ConfigurationStore {
    /// See [`load`].
    pub fn load() -> ConfigResult<Self> {
        Self::from_literals(&Literals::COMPILED)
    }

    /// Validate an arbitrary literal set. Fields are checked in declaration order.
    pub fn from_literals(literals: &Literals) -> ConfigResult<Self> {
        let wifi = WifiConfig {
            ssid: non_empty(Field::WifiSsid, literals.wifi_ssid)?,
            password: Secret::new(non_empty(Field::WifiPassword, literals.wifi_password)?),
        };

        let broker_host = non_empty(Field::MqttHost, literals.mqtt_host)?;
        let broker_port = port(literals.mqtt_port)?;

        let topics = TopicConfig {
            environment: topic(Field::TopicEnvironment, literals.topic_environment)?,
            outlet: topic(Field::TopicOutlet, literals.topic_outlet)?,
        };

        let mqtt = MqttConfig {
            broker_host,
            broker_port,
            client_id: non_empty(Field::MqttClientId, literals.mqtt_client_id)?,
            username: non_empty(Field::MqttUsername, literals.mqtt_username)?,
            password: Secret::new(non_empty(Field::MqttPassword, literals.mqtt_password)?),
        };

        let store = Self { wifi, mqtt, topics };

        tracing::debug!(
            client_id = %store.mqtt.client_id,
            broker_host = %store.mqtt.broker_host,
            broker_port = store.mqtt.broker_port,
            "configuration validated"
        );
        for advisory in store.advisories() {
            tracing::warn!(field = %advisory.field(), "{advisory}");
        }

        Ok(store)
    }

    pub fn wifi(&self) -> &WifiConfig {
        &self.wifi
    }

    pub fn mqtt(&self) -> &MqttConfig {
        &self.mqtt
    }

    pub fn topics(&self) -> &TopicConfig {
        &self.topics
    }

    pub fn wifi_ssid(&self) -> &str {
        self.wifi.ssid()
    }

    pub fn wifi_password(&self) -> &Secret {
        self.wifi.password()
    }

    pub fn mqtt_host(&self) -> &str {
        self.mqtt.broker_host()
    }

    pub fn mqtt_port(&self) -> u16 {
        self.mqtt.broker_port()
    }

    pub fn topic_environment(&self) -> &str {
        self.topics.environment()
    }

    pub fn topic_outlet(&self) -> &str {
        self.topics.outlet()
    }

    pub fn mqtt_client_id(&self) -> &str {
        self.mqtt.client_id()
    }

    pub fn mqtt_username(&self) -> &str {
        self.mqtt.username()
    }

    pub fn mqtt_password(&self) -> &Secret {
        self.mqtt.password()
    }

    /// Non-fatal observations about values that are valid but likely to
    /// cause trouble with real brokers or access points.
    pub fn advisories(&self) -> Vec<Advisory> {
        let mut advisories = Vec::new();

        let ssid_len = self.wifi.ssid.len();
        if ssid_len > MAX_SSID_LEN {
            advisories.push(Advisory::SsidTooLong { len: ssid_len });
        }

        let passphrase_len = self.wifi.password.expose().chars().count();
        if !PASSPHRASE_LEN.contains(&passphrase_len) {
            advisories.push(Advisory::PassphraseLength {
                len: passphrase_len,
            });
        }

        for (field, topic) in [
            (Field::TopicEnvironment, &self.topics.environment),
            (Field::TopicOutlet, &self.topics.outlet),
        ] {
            if topics::has_wildcard(topic) {
                advisories.push(Advisory::TopicWildcard { field });
            }
        }

        let client_id = &self.mqtt.client_id;
        if client_id.len() > PORTABLE_CLIENT_ID_LEN
            || !client_id.chars().all(|c| c.is_ascii_alphanumeric())
        {
            advisories.push(Advisory::ClientIdNotPortable {
                len: client_id.len(),
            });
        }

        if self.mqtt.broker_port == PLAINTEXT_MQTT_PORT {
            advisories.push(Advisory::PlaintextCredentials {
                port: self.mqtt.broker_port,
            });
        }

        advisories
    }
}

// ── Advisories ────────────────────────────────────────────────

/// A valid value that deserves a warning at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// SSID longer than access points accept.
    SsidTooLong { len: usize },
    /// WiFi passphrase outside the WPA2-PSK length range.
    PassphraseLength { len: usize },
    /// Topic contains `+` or `#` and cannot be published to.
    TopicWildcard { field: Field },
    /// Client id that brokers are not required to accept.
    ClientIdNotPortable { len: usize },
    /// Broker credentials go over an unencrypted port.
    PlaintextCredentials { port: u16 },
}

impl Advisory {
    /// The field this advisory concerns.
    pub fn field(&self) -> Field {
        match self {
            Self::SsidTooLong { .. } => Field::WifiSsid,
            Self::PassphraseLength { .. } => Field::WifiPassword,
            Self::TopicWildcard { field } => *field,
            Self::ClientIdNotPortable { .. } => Field::MqttClientId,
            Self::PlaintextCredentials { .. } => Field::MqttPort,
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SsidTooLong { len } => {
                write!(f, "SSID is {len} bytes, access points accept at most {MAX_SSID_LEN}")
            }
            Self::PassphraseLength { len } => write!(
                f,
                "WiFi passphrase is {len} characters, WPA2 expects {}-{}",
                PASSPHRASE_LEN.start(),
                PASSPHRASE_LEN.end()
            ),
            Self::TopicWildcard { field } => {
                write!(f, "{field} contains a wildcard and cannot be published to")
            }
            Self::ClientIdNotPortable { len } => write!(
                f,
                "client id ({len} bytes) is not guaranteed to be accepted; \
                 brokers are only required to accept 1-{PORTABLE_CLIENT_ID_LEN} alphanumeric characters"
            ),
            Self::PlaintextCredentials { port } => {
                write!(f, "broker credentials are sent unencrypted on port {port}")
            }
        }
    }
}

// ── Field checks ──────────────────────────────────────────────

fn non_empty(field: Field, value: &str) -> ConfigResult<String> {
    if value.is_empty() {
        return Err(ConfigError::invalid(field, InvalidReason::Empty));
    }
    Ok(value.to_string())
}

fn port(value: i32) -> ConfigResult<u16> {
    u16::try_from(value)
        .ok()
        .filter(|port| *port != 0)
        .ok_or_else(|| ConfigError::invalid(Field::MqttPort, InvalidReason::PortOutOfRange(value)))
}

fn topic(field: Field, value: &str) -> ConfigResult<String> {
    let value = non_empty(field, value)?;
    topics::validate_topic(&value).map_err(|e| ConfigError::invalid(field, e))?;
    Ok(value)
}
