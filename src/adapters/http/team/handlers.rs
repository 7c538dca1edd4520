//! HTTP handlers for team endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{
    handle_team_error, invalid_request, json_rejection, query_rejection,
};
use crate::application::handlers::team::{
    CreateTeamCommand, CreateTeamHandler, GetTeamHandler, GetTeamQuery, NewTeamMember,
};
use crate::domain::foundation::{TeamName, UserId};

use super::dto::{CreateTeamRequest, CreateTeamResponse, GetTeamParams, TeamResponse};

#[derive(Clone)]
pub struct TeamHandlers {
    create_handler: Arc<CreateTeamHandler>,
    get_handler: Arc<GetTeamHandler>,
}

impl TeamHandlers {
    pub fn new(create_handler: Arc<CreateTeamHandler>, get_handler: Arc<GetTeamHandler>) -> Self {
        Self {
            create_handler,
            get_handler,
        }
    }
}

/// POST /team/add - Create a team and upsert its members
pub async fn create_team(
    State(handlers): State<TeamHandlers>,
    payload: Result<Json<CreateTeamRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    let team_name = match TeamName::new(req.team_name) {
        Ok(name) => name,
        Err(e) => return invalid_request(e),
    };

    let mut members = Vec::with_capacity(req.members.len());
    for member in req.members {
        let user_id = match UserId::new(member.user_id) {
            Ok(id) => id,
            Err(e) => return invalid_request(e),
        };
        members.push(NewTeamMember {
            user_id,
            username: member.username,
            is_active: member.is_active,
        });
    }

    let cmd = CreateTeamCommand { team_name, members };

    match handlers.create_handler.handle(cmd).await {
        Ok(team) => {
            let response = CreateTeamResponse {
                team: TeamResponse::from(&team),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_team_error(e),
    }
}

/// GET /team/get?team_name= - Fetch a team with its members
pub async fn get_team(
    State(handlers): State<TeamHandlers>,
    params: Result<Query<GetTeamParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(query) => query,
        Err(rejection) => return query_rejection(rejection),
    };

    let team_name = match TeamName::new(params.team_name.unwrap_or_default()) {
        Ok(name) => name,
        Err(e) => return invalid_request(e),
    };

    match handlers.get_handler.handle(GetTeamQuery { team_name }).await {
        Ok(team) => (StatusCode::OK, Json(TeamResponse::from(&team))).into_response(),
        Err(e) => handle_team_error(e),
    }
}
