use serde::Deserialize;

/// Top-level configuration settings for the application.
///
/// Includes settings for the broker endpoint and the queue names shared by
/// both binaries.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub broker: BrokerSettings,
    pub queue: QueueSettings,
}

/// Configuration settings for the broker endpoint.
///
/// Defines the host and port the client and server connect to.
#[derive(Debug, Deserialize, Clone)]
pub struct BrokerSettings {
    pub host: String,
    pub port: u16,
}

impl BrokerSettings {
    /// The WebSocket URL of the broker.
    pub fn url(&self) -> String {
        format!("ws://{}:{}", self.host, self.port)
    }
}

/// Queue names shared between the client and the server.
///
/// Only the work queue is named here; reply queues are generated per
/// request.
#[derive(Debug, Deserialize, Clone)]
pub struct QueueSettings {
    pub requests: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub broker: Option<PartialBrokerSettings>,
    pub queue: Option<PartialQueueSettings>,
}

/// Partial broker settings.
///
/// Used when loading the broker endpoint from external sources with optional values.
#[derive(Debug, Deserialize)]
pub struct PartialBrokerSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Partial queue settings.
#[derive(Debug, Deserialize)]
pub struct PartialQueueSettings {
    pub requests: Option<String>,
}

/// Provides default values for `Settings`.
///
/// Ensures the application has sensible defaults if no configuration is provided.
impl Default for Settings {
    fn default() -> Self {
        Self {
            broker: BrokerSettings {
                host: "localhost".to_string(),
                port: 8080,
            },
            queue: QueueSettings {
                requests: "requests".to_string(),
            },
        }
    }
}
