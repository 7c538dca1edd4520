//! Team repository port.
//!
//! Defines the storage contract for team rosters and user records.
//!
//! # Design
//!
//! - **Atomic**: every method is a single unit of work; `create_team` commits
//!   the team row and all member upserts together or not at all
//! - **Typed failures**: expected misses are reported through `ErrorCode`
//!   (`TeamExists`, `TeamNotFound`, `UserNotFound`); anything else is a
//!   `DatabaseError`

use crate::domain::foundation::{DomainError, TeamName, UserId};
use crate::domain::team::{Team, User};
use async_trait::async_trait;

/// Repository port for teams and their members.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Persist a new team and upsert every member.
    ///
    /// Members that already exist (by user id) get their username, active
    /// flag and team overwritten.
    ///
    /// # Errors
    ///
    /// - `TeamExists` if the name is taken (nothing is written)
    /// - `DatabaseError` on persistence failure
    async fn create_team(&self, team: &Team) -> Result<(), DomainError>;

    /// Load a team with its members, ordered by user id.
    ///
    /// # Errors
    ///
    /// - `TeamNotFound` if there is neither a team row nor a member under
    ///   that name
    /// - `DatabaseError` on persistence failure
    async fn get_team_by_name(&self, name: &TeamName) -> Result<Team, DomainError>;

    /// Load a single user.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if absent
    async fn get_user_by_id(&self, id: &UserId) -> Result<User, DomainError>;

    /// Set a user's active flag and return the updated record.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if absent
    async fn set_user_activity(&self, id: &UserId, is_active: bool)
        -> Result<User, DomainError>;
}
