//! Values compiled into the node at build time.
//!
//! These are raw and unvalidated. They only reach collaborators through
//! [`crate::ConfigurationStore`], which checks every field once at startup.

// Wifi
pub const WIFI_SSID: &str = "Hyperion";
pub const WIFI_P: &str = "clifford";

// MQTT
pub const MQTT_HOST: &str = "192.168.1.183"; // draal.local
pub const MQTT_PORT: i32 = 1883;
pub const TOPIC_ENV: &str = "/home/floor/1/livingroom/environment";
pub const TOPIC_OUTLET: &str = "/home/floor/1/livingroom/outlets";
pub const MQTT_CLIENT_ID: &str = "omega4";
pub const MQTT_USERNAME: &str = "pilot";
pub const MQTT_P: &str = "omega4pilot";

/// A complete set of build-time values.
///
/// The port is signed so that out-of-range values can be expressed and
/// rejected by validation rather than by the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literals {
    pub wifi_ssid: &'static str,
    pub wifi_password: &'static str,
    pub mqtt_host: &'static str,
    pub mqtt_port: i32,
    pub topic_environment: &'static str,
    pub topic_outlet: &'static str,
    pub mqtt_client_id: &'static str,
    pub mqtt_username: &'static str,
    pub mqtt_password: &'static str,
}

impl Literals {
    /// The values this node was built with.
    pub const COMPILED: Literals = Literals {
        wifi_ssid: WIFI_SSID,
        wifi_password: WIFI_P,
        mqtt_host: MQTT_HOST,
        mqtt_port: MQTT_PORT,
        topic_environment: TOPIC_ENV,
        topic_outlet: TOPIC_OUTLET,
        mqtt_client_id: MQTT_CLIENT_ID,
        mqtt_username: MQTT_USERNAME,
        mqtt_password: MQTT_P,
    };
}

impl Default for Literals {
    fn default() -> Self {
        Self::COMPILED
    }
}
