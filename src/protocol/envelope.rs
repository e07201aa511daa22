use serde::{Deserialize, Serialize};

use crate::utils::error::Result;

/// A tagged command as published to the work queue.
///
/// The subject code stays a plain string rather than a [`Subject`] so that
/// unknown codes survive the trip to the server, which answers them with its
/// fallback response instead of failing.
///
/// [`Subject`]: crate::protocol::Subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub code: String,
    pub content: String,
}

impl Command {
    pub fn new(code: &str, content: &str) -> Self {
        Self {
            code: code.to_string(),
            content: content.to_string(),
        }
    }

    /// Serializes the command to its JSON wire form.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a command from its JSON wire form. Truncated or otherwise
    /// malformed input is a codec error, never a panic.
    pub fn decode(raw: &str) -> Result<Command> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// The request envelope carried as a broker payload.
///
/// `reply_to` names the private queue the sender consumes for the answer;
/// `correlation_id` pairs that answer with this request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub reply_to: String,
    pub correlation_id: String,
    pub command: Command,
}

/// The reply envelope published to a request's `reply_to` queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub correlation_id: String,
    pub body: String,
}
