//! Pull request domain module.
//!
//! Holds the `PullRequest` aggregate (reviewer list plus the
//! `OPEN -> MERGED` lifecycle) and its error type.

mod aggregate;
mod errors;

pub use aggregate::{PullRequest, MAX_REVIEWERS};
pub use errors::PullRequestError;
