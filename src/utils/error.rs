//! The `error` module defines the error type used within the `replyq`
//! application.
//!
//! This module centralizes error handling, providing a consistent way to
//! represent and propagate errors throughout the system.

use thiserror::Error;

/// Errors surfaced while talking to the broker or bootstrapping a binary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("websocket failure: {0}")]
    Websocket(#[from] tungstenite::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("codec failure: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// The send or receive loop of a broker connection has ended, so no
    /// further frames can move in either direction.
    #[error("broker link closed")]
    LinkClosed,
}

pub type Result<T> = std::result::Result<T, Error>;
