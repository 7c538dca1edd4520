//! Request and response DTOs for user endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::pull_request::PullRequestShortResponse;
use crate::domain::team::User;

/// Body of `POST /users/setIsActive`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetIsActiveRequest {
    pub user_id: String,
    pub is_active: bool,
}

/// Query of `GET /users/getReview`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetReviewParams {
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserResponse {
    pub user_id: String,
    pub username: String,
    pub team_name: Option<String>,
    pub is_active: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id().to_string(),
            username: user.username().to_string(),
            team_name: user.team_name().map(|t| t.to_string()),
            is_active: user.is_active(),
        }
    }
}

/// Body of a successful `POST /users/setIsActive`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetIsActiveResponse {
    pub user: UserResponse,
}

/// Body of a successful `GET /users/getReview`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewListResponse {
    pub user_id: String,
    pub pull_requests: Vec<PullRequestShortResponse>,
}
