//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (write) and query handlers (read) live side by side per
//! resource.

pub mod handlers;

pub use handlers::pull_request::{
    CreatePullRequestCommand, CreatePullRequestHandler, ListReviewerPullRequestsHandler,
    ListReviewerPullRequestsQuery, MergePullRequestCommand, MergePullRequestHandler,
    ReassignReviewerCommand, ReassignReviewerHandler, ReassignReviewerResult,
};
pub use handlers::team::{
    CreateTeamCommand, CreateTeamHandler, GetTeamHandler, GetTeamQuery, NewTeamMember,
    SetUserActivityCommand, SetUserActivityHandler,
};
