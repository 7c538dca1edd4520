//! Pull request error types.

use crate::domain::foundation::{
    DomainError, ErrorCode, PullRequestId, UserId, ValidationError,
};

/// Errors raised by the assignment and lifecycle engines.
///
/// Grouped by what the caller did wrong: referenced something missing
/// (`AuthorNotFound`, `NotFound`, `ReviewerNotAssigned`), collided with an
/// existing id (`AlreadyExists`), acted on a terminal pull request
/// (`Merged`), or asked for a reviewer nobody can fill (`NoCandidates`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullRequestError {
    /// Author does not exist, has no team, or their team is gone.
    AuthorNotFound(UserId),
    /// A pull request with this id already exists.
    AlreadyExists(PullRequestId),
    /// Pull request was not found.
    NotFound(PullRequestId),
    /// Pull request is merged and cannot change.
    Merged(PullRequestId),
    /// The named reviewer is not on the pull request.
    ReviewerNotAssigned {
        pull_request_id: PullRequestId,
        reviewer_id: UserId,
    },
    /// No active teammate is left to take the review.
    NoCandidates(PullRequestId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Storage failure not recognized as one of the above.
    Infrastructure(String),
}

impl PullRequestError {
    pub fn author_not_found(id: UserId) -> Self {
        PullRequestError::AuthorNotFound(id)
    }
    pub fn already_exists(id: PullRequestId) -> Self {
        PullRequestError::AlreadyExists(id)
    }
    pub fn not_found(id: PullRequestId) -> Self {
        PullRequestError::NotFound(id)
    }
    pub fn merged(id: PullRequestId) -> Self {
        PullRequestError::Merged(id)
    }
    pub fn reviewer_not_assigned(pull_request_id: PullRequestId, reviewer_id: UserId) -> Self {
        PullRequestError::ReviewerNotAssigned {
            pull_request_id,
            reviewer_id,
        }
    }
    pub fn no_candidates(id: PullRequestId) -> Self {
        PullRequestError::NoCandidates(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PullRequestError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        PullRequestError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            PullRequestError::AuthorNotFound(_) => ErrorCode::UserNotFound,
            PullRequestError::AlreadyExists(_) => ErrorCode::PullRequestExists,
            PullRequestError::NotFound(_) => ErrorCode::PullRequestNotFound,
            PullRequestError::Merged(_) => ErrorCode::PullRequestMerged,
            PullRequestError::ReviewerNotAssigned { .. } => ErrorCode::ReviewerNotAssigned,
            PullRequestError::NoCandidates(_) => ErrorCode::NoCandidates,
            PullRequestError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PullRequestError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            PullRequestError::AuthorNotFound(id) => {
                format!("author {} or the author's team not found", id)
            }
            PullRequestError::AlreadyExists(id) => format!("pull request {} already exists", id),
            PullRequestError::NotFound(id) => format!("pull request {} not found", id),
            PullRequestError::Merged(id) => format!("pull request {} is already merged", id),
            PullRequestError::ReviewerNotAssigned {
                pull_request_id,
                reviewer_id,
            } => format!(
                "reviewer {} is not assigned to pull request {}",
                reviewer_id, pull_request_id
            ),
            PullRequestError::NoCandidates(id) => {
                format!("no active replacement candidate in team for {}", id)
            }
            PullRequestError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            PullRequestError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for PullRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PullRequestError {}

/// Fallback conversion for storage errors the caller did not map itself.
impl From<DomainError> for PullRequestError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => PullRequestError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            _ => PullRequestError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for PullRequestError {
    fn from(err: ValidationError) -> Self {
        PullRequestError::validation(err.field().to_string(), err.to_string())
    }
}
