//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own adapter (dto, handlers, routes). `api_router`
//! wires them to the application handlers over the given ports.

pub mod error;
pub mod health;
mod layers;
pub mod pull_request;
pub mod team;
pub mod users;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::application::handlers::pull_request::{
    CreatePullRequestHandler, ListReviewerPullRequestsHandler, MergePullRequestHandler,
    ReassignReviewerHandler,
};
use crate::application::handlers::team::{
    CreateTeamHandler, GetTeamHandler, SetUserActivityHandler,
};
use crate::ports::{PullRequestRepository, ReviewerShuffler, TeamRepository};

pub use error::{ErrorBody, ErrorResponse};
pub use layers::with_middleware;
pub use pull_request::{pull_request_routes, PullRequestHandlers};
pub use team::{team_routes, TeamHandlers};
pub use users::{user_routes, UserHandlers};

/// Builds the full API router over the given storage and shuffler.
pub fn api_router(
    teams: Arc<dyn TeamRepository>,
    pull_requests: Arc<dyn PullRequestRepository>,
    shuffler: Arc<dyn ReviewerShuffler>,
) -> Router {
    let team_handlers = TeamHandlers::new(
        Arc::new(CreateTeamHandler::new(teams.clone())),
        Arc::new(GetTeamHandler::new(teams.clone())),
    );

    let user_handlers = UserHandlers::new(
        Arc::new(SetUserActivityHandler::new(teams.clone())),
        Arc::new(ListReviewerPullRequestsHandler::new(pull_requests.clone())),
    );

    let pull_request_handlers = PullRequestHandlers::new(
        Arc::new(CreatePullRequestHandler::new(
            teams.clone(),
            pull_requests.clone(),
            shuffler.clone(),
        )),
        Arc::new(MergePullRequestHandler::new(pull_requests.clone())),
        Arc::new(ReassignReviewerHandler::new(teams, pull_requests, shuffler)),
    );

    Router::new()
        .route("/", get(health::health))
        .nest("/team", team_routes(team_handlers))
        .nest("/users", user_routes(user_handlers))
        .nest("/pullRequest", pull_request_routes(pull_request_handlers))
}
