//! Request and response DTOs for team endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::team::{Team, User};

/// One member in a team creation payload.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamMemberRequest {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

/// Body of `POST /team/add`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamRequest {
    pub team_name: String,
    #[serde(default)]
    pub members: Vec<TeamMemberRequest>,
}

/// Query of `GET /team/get`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetTeamParams {
    pub team_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamMemberResponse {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

impl From<&User> for TeamMemberResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id().to_string(),
            username: user.username().to_string(),
            is_active: user.is_active(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamResponse {
    pub team_name: String,
    pub members: Vec<TeamMemberResponse>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            team_name: team.name().to_string(),
            members: team.members().iter().map(TeamMemberResponse::from).collect(),
        }
    }
}

/// Body of a successful `POST /team/add`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeamResponse {
    pub team: TeamResponse,
}
