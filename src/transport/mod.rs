//! The `transport` module owns the link to the external broker.
//!
//! It defines the JSON frames the broker understands (subscribe, unsubscribe,
//! publish, and the deliveries it pushes back) and a connection type that
//! keeps one WebSocket open, forwarding outgoing frames from a channel and
//! routing incoming deliveries to whichever consumer subscribed to their
//! queue.

pub mod connection;
pub mod message;

pub use connection::BrokerConnection;
pub use message::{BrokerCommand, Delivery};
