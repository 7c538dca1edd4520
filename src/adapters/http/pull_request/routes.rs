//! HTTP routes for pull request endpoints.

use axum::{routing::post, Router};

use super::handlers::{
    create_pull_request, merge_pull_request, reassign_reviewer, PullRequestHandlers,
};

/// Creates the pull request router, mounted under `/pullRequest`.
pub fn pull_request_routes(handlers: PullRequestHandlers) -> Router {
    Router::new()
        .route("/create", post(create_pull_request))
        .route("/merge", post(merge_pull_request))
        .route("/reassign", post(reassign_reviewer))
        .with_state(handlers)
}
