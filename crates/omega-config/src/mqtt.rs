//! Handoff from the validated MQTT section to the `rumqttc` client library.
//!
//! Only builds client options. Connecting, the event loop and retries
//! belong to the MQTT client module that consumes these options.

use rumqttc::MqttOptions;

use crate::error::{ConfigError, ConfigResult, Field, InvalidReason};
use crate::store::MqttConfig;

impl MqttConfig {
    /// Build `rumqttc` options carrying the broker address, client id and
    /// credentials.
    ///
    /// `rumqttc` refuses client ids with leading whitespace, which the store
    /// itself allows, so that case is reported here instead of panicking.
    pub fn to_mqtt_options(&self) -> ConfigResult<MqttOptions> {
        if self.client_id().starts_with(char::is_whitespace) {
            return Err(ConfigError::invalid(
                Field::MqttClientId,
                InvalidReason::LeadingWhitespace,
            ));
        }

        let mut options = MqttOptions::new(self.client_id(), self.broker_host(), self.broker_port());
        options.set_credentials(self.username(), self.password().expose());

        tracing::debug!(
            client_id = %self.client_id(),
            broker_host = %self.broker_host(),
            broker_port = self.broker_port(),
            "mqtt options built"
        );

        Ok(options)
    }
}
