//! In-memory storage adapter.
//!
//! Implements both repository ports over a single lock so that every port
//! call is atomic with respect to every other, mirroring the transactional
//! guarantees of the PostgreSQL adapter.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{
    DomainError, ErrorCode, PullRequestId, TeamName, Timestamp, UserId,
};
use crate::domain::pull_request::PullRequest;
use crate::domain::team::{Team, User};
use crate::ports::{PullRequestRepository, TeamRepository};

#[derive(Debug, Default)]
struct State {
    teams: HashSet<TeamName>,
    users: HashMap<UserId, User>,
    pull_requests: HashMap<PullRequestId, PullRequest>,
}

/// In-memory store for teams, users and pull requests.
///
/// Cloning shares the underlying state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of known users (useful for tests)
    pub async fn user_count(&self) -> usize {
        self.state.read().await.users.len()
    }

    /// Number of stored pull requests
    pub async fn pull_request_count(&self) -> usize {
        self.state.read().await.pull_requests.len()
    }
}

fn pull_request_not_found(id: &PullRequestId) -> DomainError {
    DomainError::new(
        ErrorCode::PullRequestNotFound,
        format!("Pull request not found: {}", id),
    )
}

fn user_not_found(id: &UserId) -> DomainError {
    DomainError::new(ErrorCode::UserNotFound, format!("User not found: {}", id))
}

#[async_trait]
impl TeamRepository for InMemoryStore {
    async fn create_team(&self, team: &Team) -> Result<(), DomainError> {
        let mut state = self.state.write().await;

        if !state.teams.insert(team.name().clone()) {
            return Err(DomainError::new(
                ErrorCode::TeamExists,
                format!("Team already exists: {}", team.name()),
            ));
        }

        for member in team.members() {
            state.users.insert(member.id().clone(), member.clone());
        }

        Ok(())
    }

    async fn get_team_by_name(&self, name: &TeamName) -> Result<Team, DomainError> {
        let state = self.state.read().await;

        let mut members: Vec<User> = state
            .users
            .values()
            .filter(|u| u.team_name() == Some(name))
            .cloned()
            .collect();

        if members.is_empty() && !state.teams.contains(name) {
            return Err(DomainError::new(
                ErrorCode::TeamNotFound,
                format!("Team not found: {}", name),
            ));
        }

        members.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(Team::reconstitute(name.clone(), members))
    }

    async fn get_user_by_id(&self, id: &UserId) -> Result<User, DomainError> {
        self.state
            .read()
            .await
            .users
            .get(id)
            .cloned()
            .ok_or_else(|| user_not_found(id))
    }

    async fn set_user_activity(
        &self,
        id: &UserId,
        is_active: bool,
    ) -> Result<User, DomainError> {
        let mut state = self.state.write().await;
        let user = state.users.get_mut(id).ok_or_else(|| user_not_found(id))?;
        user.set_active(is_active);
        Ok(user.clone())
    }
}

#[async_trait]
impl PullRequestRepository for InMemoryStore {
    async fn create(&self, pull_request: &PullRequest) -> Result<(), DomainError> {
        let mut state = self.state.write().await;

        if state.pull_requests.contains_key(pull_request.id()) {
            return Err(DomainError::new(
                ErrorCode::PullRequestExists,
                format!("Pull request already exists: {}", pull_request.id()),
            ));
        }

        state
            .pull_requests
            .insert(pull_request.id().clone(), pull_request.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: &PullRequestId) -> Result<PullRequest, DomainError> {
        self.state
            .read()
            .await
            .pull_requests
            .get(id)
            .cloned()
            .ok_or_else(|| pull_request_not_found(id))
    }

    async fn merge(&self, id: &PullRequestId) -> Result<PullRequest, DomainError> {
        let mut state = self.state.write().await;
        let pull_request = state
            .pull_requests
            .get_mut(id)
            .ok_or_else(|| pull_request_not_found(id))?;

        pull_request.merge(Timestamp::now())?;
        Ok(pull_request.clone())
    }

    async fn update_reviewers(
        &self,
        id: &PullRequestId,
        reviewers: &[UserId],
    ) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        let current = state
            .pull_requests
            .get(id)
            .ok_or_else(|| pull_request_not_found(id))?;

        let updated = PullRequest::reconstitute(
            current.id().clone(),
            current.name().to_string(),
            current.author_id().clone(),
            current.status(),
            reviewers.to_vec(),
            *current.created_at(),
            current.merged_at().copied(),
        );
        state.pull_requests.insert(id.clone(), updated);
        Ok(())
    }

    async fn find_open_by_reviewer(
        &self,
        reviewer_id: &UserId,
    ) -> Result<Vec<PullRequest>, DomainError> {
        let state = self.state.read().await;

        let mut open: Vec<PullRequest> = state
            .pull_requests
            .values()
            .filter(|pr| !pr.is_merged() && pr.is_assigned(reviewer_id))
            .cloned()
            .collect();

        open.sort_by(|a, b| {
            a.created_at()
                .cmp(b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(open)
    }
}
