//! Pull request command and query handlers.

mod author_team;
mod create_pull_request;
mod list_reviewer_pull_requests;
mod merge_pull_request;
mod reassign_reviewer;

pub use create_pull_request::{CreatePullRequestCommand, CreatePullRequestHandler};
pub use list_reviewer_pull_requests::{
    ListReviewerPullRequestsHandler, ListReviewerPullRequestsQuery,
};
pub use merge_pull_request::{MergePullRequestCommand, MergePullRequestHandler};
pub use reassign_reviewer::{
    ReassignReviewerCommand, ReassignReviewerHandler, ReassignReviewerResult,
};
