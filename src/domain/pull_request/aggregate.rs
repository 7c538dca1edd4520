//! PullRequest aggregate entity.
//!
//! A pull request is authored by one user and reviewed by up to two of the
//! author's teammates. Once merged it is frozen.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DomainError, ErrorCode, PullRequestId, PullRequestStatus, StateMachine, Timestamp, UserId,
};

/// Maximum number of reviewers picked when a pull request is opened.
pub const MAX_REVIEWERS: usize = 2;

/// PullRequest aggregate.
///
/// # Invariants
///
/// - `id` is globally unique (enforced by storage)
/// - `status` only moves `Open -> Merged`
/// - `merged_at` is set exactly when `status` is `Merged`
/// - `assigned_reviewers` never contains the author or a duplicate
///
/// Reviewers are validated against the team only at assignment time; a
/// reviewer deactivated later stays assigned until explicitly replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    id: PullRequestId,
    name: String,
    author_id: UserId,
    status: PullRequestStatus,
    assigned_reviewers: Vec<UserId>,
    created_at: Timestamp,
    merged_at: Option<Timestamp>,
}

impl PullRequest {
    /// Open a new pull request with an initial reviewer list.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the author is among the reviewers or a
    ///   reviewer is listed twice
    pub fn open(
        id: PullRequestId,
        name: impl Into<String>,
        author_id: UserId,
        reviewers: Vec<UserId>,
    ) -> Result<Self, DomainError> {
        for (i, reviewer) in reviewers.iter().enumerate() {
            if reviewer == &author_id {
                return Err(DomainError::validation(
                    "assigned_reviewers",
                    "Author cannot review their own pull request",
                ));
            }
            if reviewers[..i].contains(reviewer) {
                return Err(DomainError::validation(
                    "assigned_reviewers",
                    format!("Reviewer {} is assigned twice", reviewer),
                ));
            }
        }

        Ok(Self {
            id,
            name: name.into(),
            author_id,
            status: PullRequestStatus::Open,
            assigned_reviewers: reviewers,
            created_at: Timestamp::now(),
            merged_at: None,
        })
    }

    /// Reconstitute a pull request from persistence (no validation).
    pub fn reconstitute(
        id: PullRequestId,
        name: String,
        author_id: UserId,
        status: PullRequestStatus,
        assigned_reviewers: Vec<UserId>,
        created_at: Timestamp,
        merged_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            name,
            author_id,
            status,
            assigned_reviewers,
            created_at,
            merged_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &PullRequestId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author_id(&self) -> &UserId {
        &self.author_id
    }

    pub fn status(&self) -> PullRequestStatus {
        self.status
    }

    pub fn assigned_reviewers(&self) -> &[UserId] {
        &self.assigned_reviewers
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn merged_at(&self) -> Option<&Timestamp> {
        self.merged_at.as_ref()
    }

    pub fn is_merged(&self) -> bool {
        self.status == PullRequestStatus::Merged
    }

    /// Checks whether the user currently reviews this pull request.
    pub fn is_assigned(&self, user_id: &UserId) -> bool {
        self.assigned_reviewers.contains(user_id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Merge the pull request, stamping the merge time.
    ///
    /// # Errors
    ///
    /// - `PullRequestMerged` if already merged
    pub fn merge(&mut self, at: Timestamp) -> Result<(), DomainError> {
        self.status = self
            .status
            .transition_to(PullRequestStatus::Merged)
            .map_err(|_| self.merged_error())?;
        self.merged_at = Some(at);
        Ok(())
    }

    /// Swap `old` for `new` in the reviewer list, keeping its position.
    ///
    /// # Errors
    ///
    /// - `PullRequestMerged` if merged
    /// - `ReviewerNotAssigned` if `old` is not a reviewer
    /// - `ValidationFailed` if `new` is the author or already assigned
    pub fn replace_reviewer(&mut self, old: &UserId, new: UserId) -> Result<(), DomainError> {
        self.ensure_mutable()?;

        let slot = self
            .assigned_reviewers
            .iter()
            .position(|r| r == old)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ReviewerNotAssigned,
                    format!("Reviewer {} is not assigned to {}", old, self.id),
                )
            })?;

        if new == self.author_id {
            return Err(DomainError::validation(
                "new_reviewer_id",
                "Author cannot review their own pull request",
            ));
        }
        if self.is_assigned(&new) {
            return Err(DomainError::validation(
                "new_reviewer_id",
                format!("Reviewer {} is already assigned", new),
            ));
        }

        self.assigned_reviewers[slot] = new;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_mutable(&self) -> Result<(), DomainError> {
        if self.status.is_mutable() {
            Ok(())
        } else {
            Err(self.merged_error())
        }
    }

    fn merged_error(&self) -> DomainError {
        DomainError::new(
            ErrorCode::PullRequestMerged,
            format!("Pull request {} is already merged", self.id),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn test_pr(reviewers: &[&str]) -> PullRequest {
        PullRequest::open(
            PullRequestId::new("pr-1").unwrap(),
            "Add search",
            uid("author"),
            reviewers.iter().map(|r| uid(r)).collect(),
        )
        .unwrap()
    }

    // Construction tests

    #[test]
    fn new_pull_request_is_open_without_merge_time() {
        let pr = test_pr(&["b", "c"]);
        assert_eq!(pr.status(), PullRequestStatus::Open);
        assert!(pr.merged_at().is_none());
    }

    #[test]
    fn zero_reviewers_is_allowed() {
        let pr = test_pr(&[]);
        assert!(pr.assigned_reviewers().is_empty());
    }

    #[test]
    fn open_rejects_author_as_reviewer() {
        let result = PullRequest::open(
            PullRequestId::new("pr-1").unwrap(),
            "x",
            uid("a"),
            vec![uid("a")],
        );
        assert_eq!(result.unwrap_err().code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn open_rejects_duplicate_reviewer() {
        let result = PullRequest::open(
            PullRequestId::new("pr-1").unwrap(),
            "x",
            uid("a"),
            vec![uid("b"), uid("b")],
        );
        assert!(result.is_err());
    }

    // Merge tests

    #[test]
    fn merge_sets_status_and_time() {
        let mut pr = test_pr(&["b"]);
        let at = Timestamp::now();
        pr.merge(at).unwrap();
        assert!(pr.is_merged());
        assert_eq!(pr.merged_at(), Some(&at));
    }

    #[test]
    fn merge_twice_keeps_first_merge_time() {
        let mut pr = test_pr(&["b"]);
        let first = Timestamp::now();
        pr.merge(first).unwrap();

        let err = pr.merge(Timestamp::now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::PullRequestMerged);
        assert_eq!(pr.merged_at(), Some(&first));
    }

    // Reviewer replacement tests

    #[test]
    fn replace_reviewer_keeps_position() {
        let mut pr = test_pr(&["b", "c"]);
        pr.replace_reviewer(&uid("b"), uid("d")).unwrap();
        assert_eq!(pr.assigned_reviewers(), &[uid("d"), uid("c")]);
    }

    #[test]
    fn replace_unassigned_reviewer_fails() {
        let mut pr = test_pr(&["b"]);
        let err = pr.replace_reviewer(&uid("z"), uid("d")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ReviewerNotAssigned);
        assert_eq!(pr.assigned_reviewers(), &[uid("b")]);
    }

    #[test]
    fn replace_on_merged_fails() {
        let mut pr = test_pr(&["b"]);
        pr.merge(Timestamp::now()).unwrap();
        let err = pr.replace_reviewer(&uid("b"), uid("d")).unwrap_err();
        assert_eq!(err.code, ErrorCode::PullRequestMerged);
    }

    #[test]
    fn replace_with_author_fails() {
        let mut pr = test_pr(&["b"]);
        assert!(pr.replace_reviewer(&uid("b"), uid("author")).is_err());
    }

    #[test]
    fn replace_with_existing_reviewer_fails() {
        let mut pr = test_pr(&["b", "c"]);
        assert!(pr.replace_reviewer(&uid("b"), uid("c")).is_err());
    }

    #[test]
    fn is_assigned_checks_list() {
        let pr = test_pr(&["b"]);
        assert!(pr.is_assigned(&uid("b")));
        assert!(!pr.is_assigned(&uid("author")));
    }
}
