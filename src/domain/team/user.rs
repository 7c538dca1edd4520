//! User entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{TeamName, UserId};

/// A person who can author pull requests and review them.
///
/// Users are created or updated by team membership upserts and by activity
/// toggles; they are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
    team_name: Option<TeamName>,
    is_active: bool,
}

impl User {
    /// Creates a user. `team_name` is `None` for users detached from any team.
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        team_name: Option<TeamName>,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            team_name,
            is_active,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn team_name(&self) -> Option<&TeamName> {
        self.team_name.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Toggles whether the user may be picked as a reviewer.
    pub fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    /// Moves the user into the given team.
    pub fn join_team(&mut self, team_name: TeamName) {
        self.team_name = Some(team_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User::new(UserId::new("u1").unwrap(), "Alice", None, true)
    }

    #[test]
    fn new_user_has_no_team_when_none_given() {
        let user = alice();
        assert!(user.team_name().is_none());
        assert_eq!(user.username(), "Alice");
    }

    #[test]
    fn set_active_toggles_flag() {
        let mut user = alice();
        user.set_active(false);
        assert!(!user.is_active());
        user.set_active(true);
        assert!(user.is_active());
    }

    #[test]
    fn join_team_sets_membership() {
        let mut user = alice();
        user.join_team(TeamName::new("backend").unwrap());
        assert_eq!(user.team_name().map(TeamName::as_str), Some("backend"));
    }
}
