//! Resolution of a pull request author's team.

use crate::domain::foundation::{ErrorCode, UserId};
use crate::domain::pull_request::PullRequestError;
use crate::domain::team::Team;
use crate::ports::TeamRepository;

/// Loads the author and the team they belong to.
///
/// A missing author, an author without a team and a missing team all
/// surface as `AuthorNotFound`. Other storage failures propagate.
pub(crate) async fn resolve_author_team(
    teams: &dyn TeamRepository,
    author_id: &UserId,
) -> Result<Team, PullRequestError> {
    let author = teams.get_user_by_id(author_id).await.map_err(|e| match e.code {
        ErrorCode::UserNotFound => PullRequestError::author_not_found(author_id.clone()),
        _ => PullRequestError::from(e),
    })?;

    let team_name = author
        .team_name()
        .cloned()
        .ok_or_else(|| PullRequestError::author_not_found(author_id.clone()))?;

    teams.get_team_by_name(&team_name).await.map_err(|e| match e.code {
        ErrorCode::TeamNotFound => PullRequestError::author_not_found(author_id.clone()),
        _ => PullRequestError::from(e),
    })
}
