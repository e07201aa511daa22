//! # ReplyQ
//!
//! `replyq` is a small request/reply demo built on top of an external
//! message broker. A client publishes a tagged command to a well-known work
//! queue and waits for the answer on a private reply queue; a server consumes
//! the work queue, applies a text transform selected by the command's subject
//! code, and publishes the result back. The broker itself is not part of this
//! crate; it is reached over a WebSocket connection carrying small JSON
//! frames.
//!
//! ## Core Modules
//!
//! The library is structured into several modules, each with a distinct responsibility:
//!
//! - `protocol`: subject codes, the command codec, and the request/reply envelopes.
//! - `transport`: the WebSocket link to the broker and its wire frames.
//! - `server`: the transform dispatcher and the work-queue consumer loop.
//! - `client`: the requester that correlates replies with the commands it sent.
//! - `config`: handles loading and managing configuration.
//! - `utils`: contains shared utilities, such as error handling and logging setup.

pub mod client;
pub mod config;
pub mod protocol;
pub mod server;
pub mod transport;
pub mod utils;

pub use utils::error::{Error, Result};
