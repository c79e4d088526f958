//! Startup scenarios across the config and node crates.

use omega_config::{ConfigError, ConfigurationStore, Field, InvalidReason, Literals, TopicError};
use omega_node::startup;

fn node_literals() -> Literals {
    Literals {
        wifi_ssid: "Hyperion",
        wifi_password: "clifford",
        mqtt_host: "192.168.1.183",
        mqtt_port: 1883,
        topic_environment: "/home/floor/1/livingroom/environment",
        topic_outlet: "/home/floor/1/livingroom/outlets",
        mqtt_client_id: "omega4",
        mqtt_username: "pilot",
        mqtt_password: "omega4pilot",
    }
}

fn rejected(literals: Literals) -> ConfigError {
    ConfigurationStore::from_literals(&literals)
        .err()
        .expect("configuration should be rejected")
}

/// The living-room node's values load exactly as written.
#[test]
fn living_room_node_loads() {
    assert_eq!(node_literals(), Literals::COMPILED);

    let store = startup::boot(&node_literals()).unwrap();
    assert_eq!(store.wifi_ssid(), "Hyperion");
    assert_eq!(store.wifi_password().expose(), "clifford");
    assert_eq!(store.mqtt_host(), "192.168.1.183");
    assert_eq!(store.mqtt_port(), 1883);
    assert_eq!(store.topic_environment(), "/home/floor/1/livingroom/environment");
    assert_eq!(store.topic_outlet(), "/home/floor/1/livingroom/outlets");
    assert_eq!(store.mqtt_client_id(), "omega4");
    assert_eq!(store.mqtt_username(), "pilot");
    assert_eq!(store.mqtt_password().expose(), "omega4pilot");
}

/// Port 0 is not a usable broker port.
#[test]
fn port_zero_is_fatal() {
    let err = rejected(Literals {
        mqtt_port: 0,
        ..node_literals()
    });
    assert_eq!(
        err,
        ConfigError::InvalidField {
            field: Field::MqttPort,
            reason: InvalidReason::PortOutOfRange(0),
        }
    );
    assert!(
        startup::boot(&Literals {
            mqtt_port: 0,
            ..node_literals()
        })
        .is_err()
    );
}

/// An empty SSID stops startup.
#[test]
fn empty_ssid_is_fatal() {
    let err = rejected(Literals {
        wifi_ssid: "",
        ..node_literals()
    });
    assert_eq!(err.field(), Field::WifiSsid);
}

/// A topic with an empty level stops startup.
#[test]
fn empty_topic_level_is_fatal() {
    let err = rejected(Literals {
        topic_outlet: "//outlets",
        ..node_literals()
    });
    assert_eq!(
        err,
        ConfigError::InvalidField {
            field: Field::TopicOutlet,
            reason: InvalidReason::Topic(TopicError::EmptySegment { index: 0 }),
        }
    );
}

/// Repeated loads see the same compiled values.
#[test]
fn repeated_loads_agree() {
    let first = omega_config::load().unwrap();
    let second = omega_config::load().unwrap();
    assert_eq!(first, second);
}

/// The MQTT client receives options built from the loaded store.
#[test]
fn store_feeds_mqtt_client_options() {
    let store = startup::boot(&node_literals()).unwrap();
    let options: rumqttc::MqttOptions = store.mqtt().to_mqtt_options().unwrap();
    assert_eq!(options.broker_address(), ("192.168.1.183".to_string(), 1883));
    assert_eq!(options.client_id(), "omega4");
}
