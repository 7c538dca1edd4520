//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, status, errors)
//! - `team` - Teams and users
//! - `pull_request` - Pull request aggregate and its lifecycle
//! - `assignment` - Candidate pools for reviewer selection

pub mod assignment;
pub mod foundation;
pub mod pull_request;
pub mod team;
