//! The `client` module sends commands and waits for their answers.
//!
//! Each request gets its own freshly named reply queue and correlation id;
//! the requester consumes that queue until the reply carrying the matching
//! id arrives.

pub mod requester;

pub use requester::Requester;

#[cfg(test)]
mod tests;
