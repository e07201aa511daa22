use tracing::{info, warn};

use crate::protocol::{Reply, Request};
use crate::server::dispatch;
use crate::transport::{BrokerConnection, Delivery};
use crate::utils::error::{Error, Result};

/// Consumes the work queue and answers each request on its reply queue.
///
/// The loop has two implicit states: waiting on the queue, and computing a
/// single response. It never terminates on its own while the broker link is
/// up; shutdown is the binary's concern.
pub struct Handler {
    link: BrokerConnection,
    queue: String,
}

impl Handler {
    pub fn new(link: BrokerConnection, queue: &str) -> Self {
        Self {
            link,
            queue: queue.to_string(),
        }
    }

    /// Subscribes to the work queue and processes deliveries until the
    /// broker link closes.
    pub async fn run(self) -> Result<()> {
        let mut deliveries = self.link.subscribe(&self.queue)?;
        info!("waiting for requests on '{}'", self.queue);

        while let Some(delivery) = deliveries.recv().await {
            self.handle(delivery);
        }
        Err(Error::LinkClosed)
    }

    fn handle(&self, delivery: Delivery) {
        let Some((reply_to, reply)) = process(&delivery.payload) else {
            return;
        };

        let payload = match serde_json::to_string(&reply) {
            Ok(json) => json,
            Err(e) => {
                warn!("failed to serialize reply: {}", e);
                return;
            }
        };
        if let Err(e) = self.link.publish(&reply_to, payload) {
            warn!("failed to publish reply to '{}': {}", reply_to, e);
        }
    }
}

/// Decodes one request payload and computes its reply.
///
/// Malformed payloads are logged and skipped; they produce no reply at all
/// since there is no trustworthy address to send one to.
pub(crate) fn process(payload: &str) -> Option<(String, Reply)> {
    let request: Request = match serde_json::from_str(payload) {
        Ok(request) => request,
        Err(e) => {
            warn!("discarding malformed request: {}", e);
            return None;
        }
    };

    info!(
        "received request: {} '{}'",
        request.command.code, request.command.content
    );

    let body = dispatch::respond(&request.command.code, &request.command.content);
    let reply = Reply {
        correlation_id: request.correlation_id,
        body,
    };
    Some((request.reply_to, reply))
}
