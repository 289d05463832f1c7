//! Client for the Task Manager API.
//!
//! [`TaskClient`] wraps each endpoint in a typed call and turns non-success
//! status codes into [`ClientError`] values the caller can match on.

mod client;
mod error;

pub use client::*;
pub use error::*;
