//! Request and response DTOs for pull request endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::pull_request::PullRequest;

/// Body of `POST /pullRequest/create`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePullRequestRequest {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
}

/// Body of `POST /pullRequest/merge`.
#[derive(Debug, Clone, Deserialize)]
pub struct MergePullRequestRequest {
    pub pull_request_id: String,
}

/// Body of `POST /pullRequest/reassign`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReassignReviewerRequest {
    pub pull_request_id: String,
    pub old_reviewer_id: String,
}

/// Full pull request representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PullRequestResponse {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: String,
    pub assigned_reviewers: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "mergedAt", default, skip_serializing_if = "Option::is_none")]
    pub merged_at: Option<DateTime<Utc>>,
}

impl From<&PullRequest> for PullRequestResponse {
    fn from(pr: &PullRequest) -> Self {
        Self {
            pull_request_id: pr.id().to_string(),
            pull_request_name: pr.name().to_string(),
            author_id: pr.author_id().to_string(),
            status: pr.status().to_string(),
            assigned_reviewers: pr
                .assigned_reviewers()
                .iter()
                .map(|id| id.to_string())
                .collect(),
            created_at: *pr.created_at().as_datetime(),
            merged_at: pr.merged_at().map(|t| *t.as_datetime()),
        }
    }
}

/// Summary used in reviewer listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PullRequestShortResponse {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: String,
}

impl From<&PullRequest> for PullRequestShortResponse {
    fn from(pr: &PullRequest) -> Self {
        Self {
            pull_request_id: pr.id().to_string(),
            pull_request_name: pr.name().to_string(),
            author_id: pr.author_id().to_string(),
            status: pr.status().to_string(),
        }
    }
}

/// `{"pr": ...}` envelope for create and merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestEnvelope {
    pub pr: PullRequestResponse,
}

/// Body of a successful reassignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReassignReviewerResponse {
    pub pr: PullRequestResponse,
    pub replaced_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{PullRequestId, Timestamp, UserId};

    fn open_pr() -> PullRequest {
        PullRequest::open(
            PullRequestId::new("pr-1").unwrap(),
            "Add search",
            UserId::new("u1").unwrap(),
            vec![UserId::new("u2").unwrap(), UserId::new("u3").unwrap()],
        )
        .unwrap()
    }

    #[test]
    fn open_pull_request_omits_merged_at() {
        let json = serde_json::to_value(PullRequestResponse::from(&open_pr())).unwrap();

        assert_eq!(json["pull_request_id"], "pr-1");
        assert_eq!(json["status"], "OPEN");
        assert_eq!(json["assigned_reviewers"], serde_json::json!(["u2", "u3"]));
        assert!(json.get("createdAt").is_some());
        assert!(json.get("mergedAt").is_none());
    }

    #[test]
    fn merged_pull_request_carries_merged_at() {
        let mut pr = open_pr();
        pr.merge(Timestamp::now()).unwrap();

        let json = serde_json::to_value(PullRequestResponse::from(&pr)).unwrap();

        assert_eq!(json["status"], "MERGED");
        assert!(json["mergedAt"].is_string());
    }

    #[test]
    fn short_response_has_four_fields() {
        let json = serde_json::to_value(PullRequestShortResponse::from(&open_pr())).unwrap();
        let fields = json.as_object().unwrap();
        assert_eq!(fields.len(), 4);
        assert_eq!(json["author_id"], "u1");
    }
}
