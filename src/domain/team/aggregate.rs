//! Team aggregate.
//!
//! A team is a named roster of users. Reviewers for a pull request are
//! always drawn from the author's team.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, TeamName, UserId};

use super::User;

/// Team aggregate - a named, ordered list of members.
///
/// # Invariants
///
/// - `name` is globally unique (enforced by storage)
/// - every member's `team_name` equals `name`
/// - member identifiers are unique within the team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    name: TeamName,
    members: Vec<User>,
}

impl Team {
    /// Create a team, pulling every member into it.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the same user identifier appears twice
    pub fn new(name: TeamName, members: Vec<User>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(members.len());
        for member in &members {
            if !seen.insert(member.id().clone()) {
                return Err(DomainError::validation(
                    "members",
                    format!("User {} is listed more than once", member.id()),
                ));
            }
        }

        let members = members
            .into_iter()
            .map(|mut member| {
                member.join_team(name.clone());
                member
            })
            .collect();

        Ok(Self { name, members })
    }

    /// Reconstitute a team from persistence (no validation).
    pub fn reconstitute(name: TeamName, members: Vec<User>) -> Self {
        Self { name, members }
    }

    pub fn name(&self) -> &TeamName {
        &self.name
    }

    pub fn members(&self) -> &[User] {
        &self.members
    }

    /// Looks up a member by identifier.
    pub fn member(&self, id: &UserId) -> Option<&User> {
        self.members.iter().find(|m| m.id() == id)
    }

    /// Iterates over members currently accepting reviews.
    pub fn active_members(&self) -> impl Iterator<Item = &User> {
        self.members.iter().filter(|m| m.is_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, active: bool) -> User {
        User::new(UserId::new(id).unwrap(), id.to_uppercase(), None, active)
    }

    fn backend() -> TeamName {
        TeamName::new("backend").unwrap()
    }

    #[test]
    fn new_team_assigns_members_to_itself() {
        let team = Team::new(backend(), vec![user("a", true), user("b", false)]).unwrap();
        assert!(team
            .members()
            .iter()
            .all(|m| m.team_name() == Some(&backend())));
    }

    #[test]
    fn new_team_preserves_member_order() {
        let team = Team::new(backend(), vec![user("c", true), user("a", true)]).unwrap();
        let ids: Vec<&str> = team.members().iter().map(|m| m.id().as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    fn new_team_rejects_duplicate_members() {
        let result = Team::new(backend(), vec![user("a", true), user("a", false)]);
        assert!(result.is_err());
    }

    #[test]
    fn empty_team_is_allowed() {
        let team = Team::new(backend(), vec![]).unwrap();
        assert!(team.members().is_empty());
    }

    #[test]
    fn active_members_skips_inactive() {
        let team = Team::new(backend(), vec![user("a", true), user("b", false)]).unwrap();
        let active: Vec<&str> = team.active_members().map(|m| m.id().as_str()).collect();
        assert_eq!(active, vec!["a"]);
    }

    #[test]
    fn member_lookup_by_id() {
        let team = Team::new(backend(), vec![user("a", true)]).unwrap();
        assert!(team.member(&UserId::new("a").unwrap()).is_some());
        assert!(team.member(&UserId::new("z").unwrap()).is_none());
    }
}
