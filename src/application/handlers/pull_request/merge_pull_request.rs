//! MergePullRequestHandler - Moves an open pull request to MERGED.

use std::sync::Arc;

use crate::domain::foundation::{ErrorCode, PullRequestId};
use crate::domain::pull_request::{PullRequest, PullRequestError};
use crate::ports::PullRequestRepository;

/// Command to merge a pull request.
#[derive(Debug, Clone)]
pub struct MergePullRequestCommand {
    pub pull_request_id: PullRequestId,
}

/// Handler for merging pull requests.
///
/// A second merge is rejected with `Merged`; the stored merge time and
/// reviewers are left untouched.
pub struct MergePullRequestHandler {
    repository: Arc<dyn PullRequestRepository>,
}

impl MergePullRequestHandler {
    pub fn new(repository: Arc<dyn PullRequestRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: MergePullRequestCommand,
    ) -> Result<PullRequest, PullRequestError> {
        let id = cmd.pull_request_id;

        let current = self
            .repository
            .get_by_id(&id)
            .await
            .map_err(|e| map_storage_error(e, &id))?;

        if current.is_merged() {
            return Err(PullRequestError::merged(id));
        }

        self.repository
            .merge(&id)
            .await
            .map_err(|e| map_storage_error(e, &id))
    }
}

fn map_storage_error(
    err: crate::domain::foundation::DomainError,
    id: &PullRequestId,
) -> PullRequestError {
    match err.code {
        ErrorCode::PullRequestNotFound => PullRequestError::not_found(id.clone()),
        ErrorCode::PullRequestMerged => PullRequestError::merged(id.clone()),
        _ => PullRequestError::from(err),
    }
}
