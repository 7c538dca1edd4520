//! HTTP handlers for pull request endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_pull_request_error, invalid_request, json_rejection};
use crate::application::handlers::pull_request::{
    CreatePullRequestCommand, CreatePullRequestHandler, MergePullRequestCommand,
    MergePullRequestHandler, ReassignReviewerCommand, ReassignReviewerHandler,
};
use crate::domain::foundation::{PullRequestId, UserId};

use super::dto::{
    CreatePullRequestRequest, MergePullRequestRequest, PullRequestEnvelope, PullRequestResponse,
    ReassignReviewerRequest, ReassignReviewerResponse,
};

#[derive(Clone)]
pub struct PullRequestHandlers {
    create_handler: Arc<CreatePullRequestHandler>,
    merge_handler: Arc<MergePullRequestHandler>,
    reassign_handler: Arc<ReassignReviewerHandler>,
}

impl PullRequestHandlers {
    pub fn new(
        create_handler: Arc<CreatePullRequestHandler>,
        merge_handler: Arc<MergePullRequestHandler>,
        reassign_handler: Arc<ReassignReviewerHandler>,
    ) -> Self {
        Self {
            create_handler,
            merge_handler,
            reassign_handler,
        }
    }
}

/// POST /pullRequest/create - Open a pull request and assign reviewers
pub async fn create_pull_request(
    State(handlers): State<PullRequestHandlers>,
    payload: Result<Json<CreatePullRequestRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let pull_request_id = match PullRequestId::new(req.pull_request_id) {
        Ok(id) => id,
        Err(e) => return invalid_request(e),
    };
    let author_id = match UserId::new(req.author_id) {
        Ok(id) => id,
        Err(e) => return invalid_request(e),
    };

    let cmd = CreatePullRequestCommand {
        pull_request_id,
        name: req.pull_request_name,
        author_id,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(pr) => {
            let response = PullRequestEnvelope {
                pr: PullRequestResponse::from(&pr),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_pull_request_error(e),
    }
}

/// POST /pullRequest/merge - Merge an open pull request
pub async fn merge_pull_request(
    State(handlers): State<PullRequestHandlers>,
    payload: Result<Json<MergePullRequestRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let pull_request_id = match PullRequestId::new(req.pull_request_id) {
        Ok(id) => id,
        Err(e) => return invalid_request(e),
    };

    match handlers
        .merge_handler
        .handle(MergePullRequestCommand { pull_request_id })
        .await
    {
        Ok(pr) => {
            let response = PullRequestEnvelope {
                pr: PullRequestResponse::from(&pr),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_pull_request_error(e),
    }
}

/// POST /pullRequest/reassign - Replace one reviewer with a teammate
pub async fn reassign_reviewer(
    State(handlers): State<PullRequestHandlers>,
    payload: Result<Json<ReassignReviewerRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let pull_request_id = match PullRequestId::new(req.pull_request_id) {
        Ok(id) => id,
        Err(e) => return invalid_request(e),
    };
    let old_reviewer_id = match UserId::new(req.old_reviewer_id) {
        Ok(id) => id,
        Err(e) => return invalid_request(e),
    };

    let cmd = ReassignReviewerCommand {
        pull_request_id,
        old_reviewer_id,
    };

    match handlers.reassign_handler.handle(cmd).await {
        Ok(result) => {
            let response = ReassignReviewerResponse {
                pr: PullRequestResponse::from(&result.pull_request),
                replaced_by: result.replaced_by.to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_pull_request_error(e),
    }
}
