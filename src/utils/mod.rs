//! The `utils` module provides a collection of utility functions and common
//! definitions used across the `replyq` application.
//!
//! This module centralizes the crate's error type and the logging setup
//! shared by both binaries.

pub mod error;
pub mod logging;
