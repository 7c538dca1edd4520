//! Candidate pool construction and draw.
//!
//! A candidate pool is the set of teammates eligible to review at one
//! decision point. It is rebuilt from a fresh team snapshot for every
//! operation and never cached.

use crate::domain::foundation::UserId;
use crate::domain::pull_request::PullRequest;
use crate::domain::team::Team;
use crate::ports::ReviewerShuffler;

/// Eligible reviewers, in team roster order until drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    candidates: Vec<UserId>,
}

impl CandidatePool {
    /// Pool for a pull request being opened: active members except the author.
    pub fn for_new_pull_request(team: &Team, author_id: &UserId) -> Self {
        let candidates = team
            .active_members()
            .filter(|m| m.id() != author_id)
            .map(|m| m.id().clone())
            .collect();
        Self { candidates }
    }

    /// Pool for replacing a reviewer: active members except the author and
    /// everyone currently assigned, the reviewer being replaced included.
    pub fn for_replacement(team: &Team, pull_request: &PullRequest) -> Self {
        let candidates = team
            .active_members()
            .filter(|m| m.id() != pull_request.author_id())
            .filter(|m| !pull_request.is_assigned(m.id()))
            .map(|m| m.id().clone())
            .collect();
        Self { candidates }
    }

    /// Shuffle the pool and take up to `count` candidates in shuffle order.
    pub fn draw(mut self, shuffler: &dyn ReviewerShuffler, count: usize) -> Vec<UserId> {
        shuffler.shuffle(&mut self.candidates);
        self.candidates.truncate(count);
        self.candidates
    }

    /// Shuffle the pool and take the first candidate, if any.
    pub fn draw_one(self, shuffler: &dyn ReviewerShuffler) -> Option<UserId> {
        self.draw(shuffler, 1).into_iter().next()
    }
}
