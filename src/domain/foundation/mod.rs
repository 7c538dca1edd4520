//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, the pull request status state machine
//! and the error types shared by every domain module.

mod errors;
mod ids;
mod pull_request_status;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{PullRequestId, TeamName, UserId};
pub use pull_request_status::PullRequestStatus;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
