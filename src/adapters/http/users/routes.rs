//! HTTP routes for user endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_review, set_is_active, UserHandlers};

/// Creates the user router, mounted under `/users`.
pub fn user_routes(handlers: UserHandlers) -> Router {
    Router::new()
        .route("/setIsActive", post(set_is_active))
        .route("/getReview", get(get_review))
        .with_state(handlers)
}
