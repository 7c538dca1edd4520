//! CreatePullRequestHandler - Opens a pull request and picks its reviewers.

use std::sync::Arc;

use crate::domain::assignment::CandidatePool;
use crate::domain::foundation::{ErrorCode, PullRequestId, UserId};
use crate::domain::pull_request::{PullRequest, PullRequestError, MAX_REVIEWERS};
use crate::ports::{PullRequestRepository, ReviewerShuffler, TeamRepository};

use super::author_team::resolve_author_team;

/// Command to open a pull request.
#[derive(Debug, Clone)]
pub struct CreatePullRequestCommand {
    pub pull_request_id: PullRequestId,
    pub name: String,
    pub author_id: UserId,
}

/// Handler for creating pull requests.
///
/// Reviewers are up to two active members of the author's team, excluding
/// the author, picked uniformly at random. An empty pool is not an error.
pub struct CreatePullRequestHandler {
    teams: Arc<dyn TeamRepository>,
    pull_requests: Arc<dyn PullRequestRepository>,
    shuffler: Arc<dyn ReviewerShuffler>,
}

impl CreatePullRequestHandler {
    pub fn new(
        teams: Arc<dyn TeamRepository>,
        pull_requests: Arc<dyn PullRequestRepository>,
        shuffler: Arc<dyn ReviewerShuffler>,
    ) -> Self {
        Self {
            teams,
            pull_requests,
            shuffler,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreatePullRequestCommand,
    ) -> Result<PullRequest, PullRequestError> {
        // 1. Author and team
        let team = resolve_author_team(self.teams.as_ref(), &cmd.author_id).await?;

        // 2. Pick reviewers
        let reviewers = CandidatePool::for_new_pull_request(&team, &cmd.author_id)
            .draw(self.shuffler.as_ref(), MAX_REVIEWERS);

        // 3. Persist
        let pull_request =
            PullRequest::open(cmd.pull_request_id, cmd.name, cmd.author_id, reviewers)?;

        self.pull_requests
            .create(&pull_request)
            .await
            .map_err(|e| match e.code {
                ErrorCode::PullRequestExists => {
                    PullRequestError::already_exists(pull_request.id().clone())
                }
                _ => PullRequestError::from(e),
            })?;

        Ok(pull_request)
    }
}
