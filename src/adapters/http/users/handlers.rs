//! HTTP handlers for user endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{
    handle_pull_request_error, handle_team_error, invalid_request, json_rejection,
    query_rejection,
};
use crate::adapters::http::pull_request::PullRequestShortResponse;
use crate::application::handlers::pull_request::{
    ListReviewerPullRequestsHandler, ListReviewerPullRequestsQuery,
};
use crate::application::handlers::team::{SetUserActivityCommand, SetUserActivityHandler};
use crate::domain::foundation::UserId;

use super::dto::{
    GetReviewParams, ReviewListResponse, SetIsActiveRequest, SetIsActiveResponse, UserResponse,
};

#[derive(Clone)]
pub struct UserHandlers {
    set_activity_handler: Arc<SetUserActivityHandler>,
    reviews_handler: Arc<ListReviewerPullRequestsHandler>,
}

impl UserHandlers {
    pub fn new(
        set_activity_handler: Arc<SetUserActivityHandler>,
        reviews_handler: Arc<ListReviewerPullRequestsHandler>,
    ) -> Self {
        Self {
            set_activity_handler,
            reviews_handler,
        }
    }
}

/// POST /users/setIsActive - Activate or deactivate a user
pub async fn set_is_active(
    State(handlers): State<UserHandlers>,
    payload: Result<Json<SetIsActiveRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let user_id = match UserId::new(req.user_id) {
        Ok(id) => id,
        Err(e) => return invalid_request(e),
    };

    let cmd = SetUserActivityCommand {
        user_id,
        is_active: req.is_active,
    };

    match handlers.set_activity_handler.handle(cmd).await {
        Ok(user) => {
            let response = SetIsActiveResponse {
                user: UserResponse::from(&user),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_team_error(e),
    }
}

/// GET /users/getReview?user_id= - Open pull requests awaiting the user
pub async fn get_review(
    State(handlers): State<UserHandlers>,
    params: Result<Query<GetReviewParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(query) => query,
        Err(rejection) => return query_rejection(rejection),
    };

    let user_id = match UserId::new(params.user_id.unwrap_or_default()) {
        Ok(id) => id,
        Err(e) => return invalid_request(e),
    };

    let query = ListReviewerPullRequestsQuery {
        user_id: user_id.clone(),
    };

    match handlers.reviews_handler.handle(query).await {
        Ok(prs) => {
            let response = ReviewListResponse {
                user_id: user_id.to_string(),
                pull_requests: prs.iter().map(PullRequestShortResponse::from).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_pull_request_error(e),
    }
}
