//! SetUserActivityHandler - Command handler for toggling a user's active flag.

use std::sync::Arc;

use crate::domain::foundation::{ErrorCode, UserId};
use crate::domain::team::{TeamError, User};
use crate::ports::TeamRepository;

/// Command to set a user's active flag.
#[derive(Debug, Clone)]
pub struct SetUserActivityCommand {
    pub user_id: UserId,
    pub is_active: bool,
}

/// Handler for activating and deactivating users.
///
/// Deactivation only affects future candidate pools; existing assignments
/// are left as they are.
pub struct SetUserActivityHandler {
    repository: Arc<dyn TeamRepository>,
}

impl SetUserActivityHandler {
    pub fn new(repository: Arc<dyn TeamRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SetUserActivityCommand) -> Result<User, TeamError> {
        self.repository
            .set_user_activity(&cmd.user_id, cmd.is_active)
            .await
            .map_err(|e| match e.code {
                ErrorCode::UserNotFound => TeamError::user_not_found(cmd.user_id.clone()),
                _ => TeamError::from(e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::TeamName;
    use crate::domain::team::Team;

    async fn seeded_store() -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new());
        let team = Team::new(
            TeamName::new("core").unwrap(),
            vec![User::new(UserId::new("u1").unwrap(), "Alice", None, true)],
        )
        .unwrap();
        store.create_team(&team).await.unwrap();
        store
    }

    #[tokio::test]
    async fn deactivates_user_and_returns_it() {
        let handler = SetUserActivityHandler::new(seeded_store().await);

        let user = handler
            .handle(SetUserActivityCommand {
                user_id: UserId::new("u1").unwrap(),
                is_active: false,
            })
            .await
            .unwrap();

        assert!(!user.is_active());
        assert_eq!(user.username(), "Alice");
        assert_eq!(user.team_name().map(|t| t.as_str()), Some("core"));
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let handler = SetUserActivityHandler::new(seeded_store().await);

        let err = handler
            .handle(SetUserActivityCommand {
                user_id: UserId::new("nobody").unwrap(),
                is_active: true,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, TeamError::UserNotFound(ref id) if id.as_str() == "nobody"));
    }
}
