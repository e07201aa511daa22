use tracing::warn;
use uuid::Uuid;

use crate::protocol::{Command, Reply, Request};
use crate::transport::BrokerConnection;
use crate::utils::error::{Error, Result};

/// Publishes commands to the work queue and resolves their replies.
pub struct Requester {
    link: BrokerConnection,
    work_queue: String,
}

impl Requester {
    pub fn new(link: BrokerConnection, work_queue: &str) -> Self {
        Self {
            link,
            work_queue: work_queue.to_string(),
        }
    }

    /// Sends `command` and waits for the correlated reply.
    ///
    /// A private reply queue is subscribed before the request is published,
    /// so the answer cannot arrive ahead of its consumer. Replies whose
    /// correlation id does not match the one sent are logged and skipped;
    /// only the matching reply resolves the call. There is no timeout: with
    /// no server consuming the work queue, this waits forever.
    pub async fn request(&self, command: Command) -> Result<String> {
        let reply_queue = format!("reply-{}", Uuid::new_v4());
        let correlation_id = Uuid::new_v4().to_string();

        let mut replies = self.link.subscribe(&reply_queue)?;

        let request = Request {
            reply_to: reply_queue.clone(),
            correlation_id: correlation_id.clone(),
            command,
        };
        self.link
            .publish(&self.work_queue, serde_json::to_string(&request)?)?;

        loop {
            let Some(delivery) = replies.recv().await else {
                return Err(Error::LinkClosed);
            };
            if let Some(body) = screen(&delivery.payload, &correlation_id) {
                self.link.unsubscribe(&reply_queue)?;
                return Ok(body);
            }
        }
    }
}

/// Accepts a reply payload only when its correlation id matches the one the
/// request was sent with. Strays and malformed payloads are logged and
/// dropped, never surfaced to the caller.
pub(crate) fn screen(payload: &str, correlation_id: &str) -> Option<String> {
    let reply: Reply = match serde_json::from_str(payload) {
        Ok(reply) => reply,
        Err(e) => {
            warn!("discarding malformed reply: {}", e);
            return None;
        }
    };

    if reply.correlation_id != correlation_id {
        warn!(
            "stray reply: correlation id '{}' does not match '{}'",
            reply.correlation_id, correlation_id
        );
        return None;
    }
    Some(reply.body)
}
