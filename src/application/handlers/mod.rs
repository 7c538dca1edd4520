//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod pull_request;
pub mod team;
