//! GetTeamHandler - Query handler for loading a team with its members.

use std::sync::Arc;

use crate::domain::foundation::{ErrorCode, TeamName};
use crate::domain::team::{Team, TeamError};
use crate::ports::TeamRepository;

/// Query to get a team by name.
#[derive(Debug, Clone)]
pub struct GetTeamQuery {
    pub team_name: TeamName,
}

/// Handler for retrieving teams.
pub struct GetTeamHandler {
    repository: Arc<dyn TeamRepository>,
}

impl GetTeamHandler {
    pub fn new(repository: Arc<dyn TeamRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetTeamQuery) -> Result<Team, TeamError> {
        self.repository
            .get_team_by_name(&query.team_name)
            .await
            .map_err(|e| match e.code {
                ErrorCode::TeamNotFound => TeamError::not_found(query.team_name.clone()),
                _ => TeamError::from(e),
            })
    }
}
