//! HTTP adapter for team endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateTeamRequest, CreateTeamResponse, GetTeamParams, TeamMemberRequest, TeamMemberResponse,
    TeamResponse,
};
pub use handlers::TeamHandlers;
pub use routes::team_routes;
