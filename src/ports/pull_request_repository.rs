//! Pull request repository port.
//!
//! Defines the storage contract for pull requests and their reviewer links.
//! There is no version column: concurrent writers to the same pull request
//! are last-write-wins.

use crate::domain::foundation::{DomainError, PullRequestId, UserId};
use crate::domain::pull_request::PullRequest;
use async_trait::async_trait;

/// Repository port for PullRequest persistence.
///
/// Implementations must ensure:
/// - the pull request row and its reviewer links are written atomically
/// - reviewer lists are returned in assignment order
#[async_trait]
pub trait PullRequestRepository: Send + Sync {
    /// Save a new pull request together with its reviewers.
    ///
    /// # Errors
    ///
    /// - `PullRequestExists` on duplicate id (nothing is written)
    /// - `DatabaseError` on persistence failure
    async fn create(&self, pull_request: &PullRequest) -> Result<(), DomainError>;

    /// Load a pull request and its current reviewers.
    ///
    /// # Errors
    ///
    /// - `PullRequestNotFound` if absent
    async fn get_by_id(&self, id: &PullRequestId) -> Result<PullRequest, DomainError>;

    /// Mark the pull request merged, stamp the merge time, and return the
    /// refreshed record.
    ///
    /// Not required to be idempotent; callers check the status first.
    ///
    /// # Errors
    ///
    /// - `PullRequestNotFound` if absent
    async fn merge(&self, id: &PullRequestId) -> Result<PullRequest, DomainError>;

    /// Replace the full reviewer list in one transaction.
    ///
    /// # Errors
    ///
    /// - `PullRequestNotFound` if absent
    async fn update_reviewers(
        &self,
        id: &PullRequestId,
        reviewers: &[UserId],
    ) -> Result<(), DomainError>;

    /// All open pull requests currently listing `reviewer_id`.
    ///
    /// Best effort: a pull request that fails to load individually is
    /// skipped instead of failing the whole query.
    async fn find_open_by_reviewer(
        &self,
        reviewer_id: &UserId,
    ) -> Result<Vec<PullRequest>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pull_request_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn PullRequestRepository) {}
    }
}
