//! Omega node — loads the build-time configuration and hands it to the
//! node's collaborators.

use omega_config::Literals;
use omega_node::startup;

fn main() -> anyhow::Result<()> {
    startup::init_logging();

    let config = match startup::boot(&Literals::COMPILED) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "refusing to start");
            return Err(e);
        }
    };

    // The WiFi connector and MQTT client borrow `config` from here on.
    let options = config.mqtt().to_mqtt_options()?;
    let (host, port) = options.broker_address();
    tracing::info!(
        ssid = %config.wifi_ssid(),
        broker = %format!("{host}:{port}"),
        environment_topic = %config.topic_environment(),
        outlet_topic = %config.topic_outlet(),
        "omega-node ready"
    );

    Ok(())
}
