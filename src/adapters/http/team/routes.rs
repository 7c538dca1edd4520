//! HTTP routes for team endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_team, get_team, TeamHandlers};

/// Creates the team router, mounted under `/team`.
pub fn team_routes(handlers: TeamHandlers) -> Router {
    Router::new()
        .route("/add", post(create_team))
        .route("/get", get(get_team))
        .with_state(handlers)
}
