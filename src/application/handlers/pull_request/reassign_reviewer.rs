//! ReassignReviewerHandler - Replaces one assigned reviewer with a teammate.

use std::sync::Arc;

use crate::domain::assignment::CandidatePool;
use crate::domain::foundation::{ErrorCode, PullRequestId, UserId};
use crate::domain::pull_request::{PullRequest, PullRequestError};
use crate::ports::{PullRequestRepository, ReviewerShuffler, TeamRepository};

use super::author_team::resolve_author_team;

/// Command to replace a reviewer on a pull request.
#[derive(Debug, Clone)]
pub struct ReassignReviewerCommand {
    pub pull_request_id: PullRequestId,
    pub old_reviewer_id: UserId,
}

/// Result of a successful reassignment.
#[derive(Debug, Clone)]
pub struct ReassignReviewerResult {
    pub pull_request: PullRequest,
    pub replaced_by: UserId,
}

/// Handler for reviewer reassignment.
///
/// The replacement is drawn from the author's team: active members other
/// than the author and anyone currently assigned, the outgoing reviewer
/// included. It takes the outgoing reviewer's slot.
pub struct ReassignReviewerHandler {
    teams: Arc<dyn TeamRepository>,
    pull_requests: Arc<dyn PullRequestRepository>,
    shuffler: Arc<dyn ReviewerShuffler>,
}

impl ReassignReviewerHandler {
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
        cmd: ReassignReviewerCommand,
    ) -> Result<ReassignReviewerResult, PullRequestError> {
        let id = cmd.pull_request_id;

        // 1. Load and guard
        let mut pull_request = self
            .pull_requests
            .get_by_id(&id)
            .await
            .map_err(|e| match e.code {
                ErrorCode::PullRequestNotFound => PullRequestError::not_found(id.clone()),
                _ => PullRequestError::from(e),
            })?;

        if pull_request.is_merged() {
            return Err(PullRequestError::merged(id));
        }
        if !pull_request.is_assigned(&cmd.old_reviewer_id) {
            return Err(PullRequestError::reviewer_not_assigned(id, cmd.old_reviewer_id));
        }

        // 2. Draw a replacement
        let team = resolve_author_team(self.teams.as_ref(), pull_request.author_id()).await?;
        let replacement = CandidatePool::for_replacement(&team, &pull_request)
            .draw_one(self.shuffler.as_ref())
            .ok_or_else(|| PullRequestError::no_candidates(id.clone()))?;

        // 3. Swap in place and persist the whole list
        pull_request.replace_reviewer(&cmd.old_reviewer_id, replacement.clone())?;

        self.pull_requests
            .update_reviewers(&id, pull_request.assigned_reviewers())
            .await
            .map_err(|e| match e.code {
                ErrorCode::PullRequestNotFound => PullRequestError::not_found(id.clone()),
                _ => PullRequestError::from(e),
            })?;

        Ok(ReassignReviewerResult {
            pull_request,
            replaced_by: replacement,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::adapters::random::{FixedOrderShuffler, SeededShuffler, ThreadRngShuffler};
    use crate::application::handlers::pull_request::{
        CreatePullRequestCommand, CreatePullRequestHandler,
    };
    use crate::domain::foundation::TeamName;
    use crate::domain::team::{Team, User};
    use std::collections::HashSet;

    fn uid(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn pr_id(id: &str) -> PullRequestId {
        PullRequestId::new(id).unwrap()
    }

    async fn store_with_team(members: &[(&str, bool)]) -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new());
        let team = Team::new(
            TeamName::new("core").unwrap(),
            members
                .iter()
                .map(|(id, active)| User::new(uid(id), id.to_uppercase(), None, *active))
                .collect(),
        )
        .unwrap();
        store.create_team(&team).await.unwrap();
        store
    }

    async fn open_pr(store: &Arc<InMemoryStore>, id: &str, author: &str) -> PullRequest {
        CreatePullRequestHandler::new(store.clone(), store.clone(), Arc::new(FixedOrderShuffler))
            .handle(CreatePullRequestCommand {
                pull_request_id: pr_id(id),
                name: "Refactor".to_string(),
                author_id: uid(author),
            })
            .await
            .unwrap()
    }

    fn handler(store: &Arc<InMemoryStore>) -> ReassignReviewerHandler {
        ReassignReviewerHandler::new(store.clone(), store.clone(), Arc::new(ThreadRngShuffler::new()))
    }

    fn seeded_handler(store: &Arc<InMemoryStore>, seed: u64) -> ReassignReviewerHandler {
        ReassignReviewerHandler::new(store.clone(), store.clone(), Arc::new(SeededShuffler::new(seed)))
    }

    fn command(pr: &str, old: &str) -> ReassignReviewerCommand {
        ReassignReviewerCommand {
            pull_request_id: pr_id(pr),
            old_reviewer_id: uid(old),
        }
    }

    #[tokio::test]
    async fn no_candidates_when_team_is_exhausted() {
        // A authors, B active reviewer, C inactive
        let store = store_with_team(&[("a", true), ("b", true), ("c", false)]).await;
        open_pr(&store, "p1", "a").await;

        let err = handler(&store).handle(command("p1", "b")).await.unwrap_err();

        assert!(matches!(err, PullRequestError::NoCandidates(_)));
        let stored = store.get_by_id(&pr_id("p1")).await.unwrap();
        assert_eq!(stored.assigned_reviewers(), &[uid("b")]);
    }

    #[tokio::test]
    async fn replacement_is_the_remaining_teammate() {
        // A authors, FixedOrder picks B and C, D is left
        let store = store_with_team(&[("a", true), ("b", true), ("c", true), ("d", true)]).await;
        open_pr(&store, "p2", "a").await;

        let result = handler(&store).handle(command("p2", "b")).await.unwrap();

        assert_eq!(result.replaced_by, uid("d"));
        assert_eq!(result.pull_request.assigned_reviewers(), &[uid("d"), uid("c")]);

        let stored = store.get_by_id(&pr_id("p2")).await.unwrap();
        assert_eq!(stored.assigned_reviewers(), &[uid("d"), uid("c")]);
    }

    #[tokio::test]
    async fn replacement_never_reintroduces_excluded_users() {
        let members = [("a", true), ("b", true), ("c", true), ("d", true), ("e", true), ("f", false)];
        for seed in 0..20 {
            let store = store_with_team(&members).await;
            let id = format!("pr-{}", seed);
            let before = open_pr(&store, &id, "a").await;

            let result = seeded_handler(&store, seed)
                .handle(command(&id, "b"))
                .await
                .unwrap();

            let excluded: HashSet<UserId> = before
                .assigned_reviewers()
                .iter()
                .cloned()
                .chain([uid("a"), uid("f")])
                .collect();
            assert!(!excluded.contains(&result.replaced_by));
            assert_eq!(result.pull_request.assigned_reviewers().len(), 2);
        }
    }

    #[tokio::test]
    async fn same_seed_picks_the_same_replacement() {
        let members = [("a", true), ("b", true), ("c", true), ("d", true), ("e", true), ("f", true)];
        let mut picks = Vec::new();
        for _ in 0..2 {
            let store = store_with_team(&members).await;
            open_pr(&store, "p4", "a").await;
            let result = seeded_handler(&store, 99)
                .handle(command("p4", "b"))
                .await
                .unwrap();
            picks.push(result.replaced_by);
        }
        assert_eq!(picks[0], picks[1]);
        assert!(["d", "e", "f"].contains(&picks[0].as_str()));
    }

    #[tokio::test]
    async fn unassigned_reviewer_is_rejected_without_mutation() {
        let store = store_with_team(&[("a", true), ("b", true), ("c", true), ("d", true)]).await;
        let before = open_pr(&store, "p3", "a").await;

        let err = handler(&store).handle(command("p3", "d")).await.unwrap_err();

        assert!(matches!(err, PullRequestError::ReviewerNotAssigned { .. }));
        assert_eq!(err.code(), ErrorCode::ReviewerNotAssigned);
        let stored = store.get_by_id(&pr_id("p3")).await.unwrap();
        assert_eq!(stored.assigned_reviewers(), before.assigned_reviewers());
    }

    #[tokio::test]
    async fn merged_pull_request_is_rejected() {
        let store = store_with_team(&[("a", true), ("b", true), ("c", true), ("d", true)]).await;
        open_pr(&store, "p4", "a").await;
        store.merge(&pr_id("p4")).await.unwrap();

        let err = handler(&store).handle(command("p4", "b")).await.unwrap_err();

        assert!(matches!(err, PullRequestError::Merged(_)));
    }

    #[tokio::test]
    async fn unknown_pull_request_is_not_found() {
        let store = store_with_team(&[("a", true)]).await;

        let err = handler(&store).handle(command("nope", "b")).await.unwrap_err();

        assert!(matches!(err, PullRequestError::NotFound(_)));
    }

    #[tokio::test]
    async fn candidates_come_from_the_authors_current_team() {
        let store = store_with_team(&[("a", true), ("b", true), ("c", true)]).await;
        open_pr(&store, "p5", "a").await;

        // Re-home the author into a team of their own.
        let solo = Team::new(
            TeamName::new("solo").unwrap(),
            vec![User::new(uid("a"), "A", None, true)],
        )
        .unwrap();
        store.create_team(&solo).await.unwrap();

        let err = handler(&store).handle(command("p5", "b")).await.unwrap_err();
        assert!(matches!(err, PullRequestError::NoCandidates(_)));
    }
}
