//! ListReviewerPullRequestsHandler - Open pull requests awaiting a reviewer.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::pull_request::{PullRequest, PullRequestError};
use crate::ports::PullRequestRepository;

/// Query for the open pull requests a user is assigned to.
#[derive(Debug, Clone)]
pub struct ListReviewerPullRequestsQuery {
    pub user_id: UserId,
}

/// Handler listing a reviewer's open pull requests.
///
/// Unknown users simply have nothing to review.
pub struct ListReviewerPullRequestsHandler {
    repository: Arc<dyn PullRequestRepository>,
}

impl ListReviewerPullRequestsHandler {
    pub fn new(repository: Arc<dyn PullRequestRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListReviewerPullRequestsQuery,
    ) -> Result<Vec<PullRequest>, PullRequestError> {
        Ok(self.repository.find_open_by_reviewer(&query.user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::PullRequestId;

    fn uid(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    async fn seed(store: &InMemoryStore, id: &str, reviewers: &[&str]) {
        let pr = PullRequest::open(
            PullRequestId::new(id).unwrap(),
            id,
            uid("author"),
            reviewers.iter().map(|r| uid(r)).collect(),
        )
        .unwrap();
        store.create(&pr).await.unwrap();
    }

    #[tokio::test]
    async fn lists_exactly_open_pull_requests_of_reviewer() {
        let store = Arc::new(InMemoryStore::new());
        seed(&store, "pr-1", &["u1"]).await;
        seed(&store, "pr-2", &["u1", "u2"]).await;
        seed(&store, "pr-3", &["u2"]).await;
        store.merge(&PullRequestId::new("pr-2").unwrap()).await.unwrap();

        let handler = ListReviewerPullRequestsHandler::new(store);
        let prs = handler
            .handle(ListReviewerPullRequestsQuery { user_id: uid("u1") })
            .await
            .unwrap();

        let ids: Vec<&str> = prs.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["pr-1"]);
    }

    #[tokio::test]
    async fn unknown_user_gets_empty_list() {
        let handler = ListReviewerPullRequestsHandler::new(Arc::new(InMemoryStore::new()));

        let prs = handler
            .handle(ListReviewerPullRequestsQuery { user_id: uid("nobody") })
            .await
            .unwrap();

        assert!(prs.is_empty());
    }
}
