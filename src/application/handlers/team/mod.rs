//! Team and user command and query handlers.

mod create_team;
mod get_team;
mod set_user_activity;

pub use create_team::{CreateTeamCommand, CreateTeamHandler, NewTeamMember};
pub use get_team::{GetTeamHandler, GetTeamQuery};
pub use set_user_activity::{SetUserActivityCommand, SetUserActivityHandler};
