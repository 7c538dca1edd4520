//! HTTP adapter for pull request endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreatePullRequestRequest, MergePullRequestRequest, PullRequestEnvelope, PullRequestResponse,
    PullRequestShortResponse, ReassignReviewerRequest, ReassignReviewerResponse,
};
pub use handlers::PullRequestHandlers;
pub use routes::pull_request_routes;
