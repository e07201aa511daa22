use serde::{Deserialize, Serialize};

/// A frame sent to the broker.
///
/// Queues are addressed by name in the broker's `topic` field. Payloads are
/// opaque strings; the envelopes in [`crate::protocol`] are JSON-encoded into
/// them before publishing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BrokerCommand {
    #[serde(rename = "subscribe")]
    Subscribe { topic: String },

    #[serde(rename = "unsubscribe")]
    Unsubscribe { topic: String },

    #[serde(rename = "publish")]
    Publish {
        topic: String,
        payload: String,
        timestamp: i64,
    },
}

/// A message the broker pushes to a subscribed consumer.
///
/// Mirrors the broker's own published-message shape: the queue name, the
/// payload as published, and the broker's Unix-millisecond timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delivery {
    pub topic: String,
    pub payload: String,
    pub timestamp: i64,
}
