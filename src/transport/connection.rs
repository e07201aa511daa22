use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_tungstenite::connect_async;
use tracing::{debug, warn};
use tungstenite::protocol::Message as WsMessage;

use crate::transport::message::{BrokerCommand, Delivery};
use crate::utils::error::{Error, Result};

pub(crate) type RouteTable = Arc<Mutex<HashMap<String, UnboundedSender<Delivery>>>>;

/// One WebSocket connection to the broker.
///
/// Outgoing frames are queued on a channel and drained by a send task;
/// incoming frames are parsed by a receive task and routed to the channel
/// registered for their queue. Both tasks end when the socket closes, after
/// which every operation reports the link as closed.
#[derive(Clone)]
pub struct BrokerConnection {
    outbound: UnboundedSender<WsMessage>,
    routes: RouteTable,
}

impl BrokerConnection {
    /// Connects to the broker at `url` and spawns the send and receive
    /// loops.
    pub async fn connect(url: &str) -> Result<Self> {
        let (ws_stream, _response) = connect_async(url).await?;
        let (mut ws_sender, mut ws_receiver) = ws_stream.split();

        let (outbound, mut pending) = mpsc::unbounded_channel::<WsMessage>();
        tokio::spawn(async move {
            while let Some(msg) = pending.recv().await {
                if let Err(e) = ws_sender.send(msg).await {
                    warn!("send loop ended: {}", e);
                    break;
                }
            }
        });

        let routes: RouteTable = Arc::new(Mutex::new(HashMap::new()));
        let reader_routes = routes.clone();
        tokio::spawn(async move {
            while let Some(Ok(msg)) = ws_receiver.next().await {
                let WsMessage::Text(text) = msg else { continue };
                match serde_json::from_str::<Delivery>(&text) {
                    Ok(delivery) => route(&reader_routes, delivery),
                    Err(e) => warn!("ignoring unparseable frame: {}", e),
                }
            }
            debug!("broker connection closed");
        });

        Ok(Self { outbound, routes })
    }

    /// Declares interest in `queue` and returns the channel its deliveries
    /// arrive on. The consumer must be registered before the subscribe frame
    /// is sent, so nothing published afterwards can slip past it.
    pub fn subscribe(&self, queue: &str) -> Result<UnboundedReceiver<Delivery>> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.routes.lock().unwrap().insert(queue.to_string(), tx);
        self.send(&BrokerCommand::Subscribe {
            topic: queue.to_string(),
        })?;
        Ok(rx)
    }

    /// Drops the consumer for `queue` and tells the broker to stop
    /// delivering to it.
    pub fn unsubscribe(&self, queue: &str) -> Result<()> {
        self.routes.lock().unwrap().remove(queue);
        self.send(&BrokerCommand::Unsubscribe {
            topic: queue.to_string(),
        })
    }

    /// Publishes `payload` to `queue`, stamped with the current time.
    pub fn publish(&self, queue: &str, payload: String) -> Result<()> {
        self.send(&BrokerCommand::Publish {
            topic: queue.to_string(),
            payload,
            timestamp: Utc::now().timestamp_millis(),
        })
    }

    fn send(&self, command: &BrokerCommand) -> Result<()> {
        let text = serde_json::to_string(command)?;
        self.outbound
            .send(WsMessage::text(text))
            .map_err(|_| Error::LinkClosed)
    }
}

/// Hands a delivery to the consumer registered for its queue, if any.
pub(crate) fn route(routes: &RouteTable, delivery: Delivery) {
    let routes = routes.lock().unwrap();
    match routes.get(&delivery.topic) {
        Some(consumer) => {
            if consumer.send(delivery).is_err() {
                warn!("dropping delivery for a closed consumer");
            }
        }
        None => warn!("no consumer registered for '{}'", delivery.topic),
    }
}
