//! CreateTeamHandler - Command handler for creating a team with its members.

use std::sync::Arc;

use crate::domain::foundation::{ErrorCode, TeamName, UserId};
use crate::domain::team::{Team, TeamError, User};
use crate::ports::TeamRepository;

/// One member entry of a new team.
#[derive(Debug, Clone)]
pub struct NewTeamMember {
    pub user_id: UserId,
    pub username: String,
    pub is_active: bool,
}

/// Command to create a team.
#[derive(Debug, Clone)]
pub struct CreateTeamCommand {
    pub team_name: TeamName,
    pub members: Vec<NewTeamMember>,
}

/// Handler for creating teams.
///
/// Members are upserted by user id: a member already known under another
/// team moves to the new one with the submitted username and activity.
pub struct CreateTeamHandler {
    repository: Arc<dyn TeamRepository>,
}

impl CreateTeamHandler {
    pub fn new(repository: Arc<dyn TeamRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateTeamCommand) -> Result<Team, TeamError> {
        let members = cmd
            .members
            .into_iter()
            .map(|m| User::new(m.user_id, m.username, None, m.is_active))
            .collect();

        let team = Team::new(cmd.team_name, members)?;

        self.repository
            .create_team(&team)
            .await
            .map_err(|e| match e.code {
                ErrorCode::TeamExists => TeamError::already_exists(team.name().clone()),
                _ => TeamError::from(e),
            })?;

        Ok(team)
    }
}
