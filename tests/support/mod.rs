//! Minimal in-process broker used by the end-to-end tests.
//!
//! Speaks the same JSON frames the binaries expect from the real broker:
//! subscribe, unsubscribe, and publish in; published messages pushed back out
//! to every subscriber of the queue. Just enough broker to route a request
//! to the server and the reply back to the client.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use futures_util::{SinkExt, StreamExt};
use replyq::transport::{BrokerCommand, Delivery};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio_tungstenite::accept_async;
use tungstenite::protocol::Message as WsMessage;

type Subscribers = Arc<Mutex<HashMap<String, HashMap<u64, mpsc::UnboundedSender<WsMessage>>>>>;

/// Starts a broker on a free port and returns its WebSocket URL.
pub async fn spawn_broker() -> String {
    let port = portpicker::pick_unused_port().expect("No free ports");
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await.expect("bind test broker");

    tokio::spawn(async move {
        let subscribers: Subscribers = Arc::new(Mutex::new(HashMap::new()));
        let next_id = AtomicU64::new(0);
        while let Ok((stream, _)) = listener.accept().await {
            let conn_id = next_id.fetch_add(1, Ordering::Relaxed);
            tokio::spawn(handle_connection(conn_id, stream, subscribers.clone()));
        }
    });

    format!("ws://{addr}")
}

async fn handle_connection(conn_id: u64, stream: TcpStream, subscribers: Subscribers) {
    let ws_stream = match accept_async(stream).await {
        Ok(ws) => ws,
        Err(_) => return,
    };
    let (mut ws_sender, mut ws_receiver) = ws_stream.split();

    let (tx, mut rx) = mpsc::unbounded_channel::<WsMessage>();
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if ws_sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    while let Some(Ok(msg)) = ws_receiver.next().await {
        let WsMessage::Text(text) = msg else { continue };
        let Ok(command) = serde_json::from_str::<BrokerCommand>(&text) else {
            continue;
        };
        match command {
            BrokerCommand::Subscribe { topic } => {
                subscribers
                    .lock()
                    .unwrap()
                    .entry(topic)
                    .or_default()
                    .insert(conn_id, tx.clone());
            }
            BrokerCommand::Unsubscribe { topic } => {
                if let Some(subs) = subscribers.lock().unwrap().get_mut(&topic) {
                    subs.remove(&conn_id);
                }
            }
            BrokerCommand::Publish {
                topic,
                payload,
                timestamp,
            } => {
                let delivery = Delivery {
                    topic: topic.clone(),
                    payload,
                    timestamp,
                };
                let frame = serde_json::to_string(&delivery).expect("serialize delivery");
                let subscribers = subscribers.lock().unwrap();
                if let Some(subs) = subscribers.get(&topic) {
                    for sender in subs.values() {
                        let _ = sender.send(WsMessage::text(frame.clone()));
                    }
                }
            }
        }
    }

    // Connection gone; drop its subscriptions.
    let mut subscribers = subscribers.lock().unwrap();
    for subs in subscribers.values_mut() {
        subs.remove(&conn_id);
    }
}
