//! PostgreSQL implementation of TeamRepository.
//!
//! Teams live in `teams`; members are rows of `users` pointing at their team.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, TeamName, UserId};
use crate::domain::team::{Team, User};
use crate::ports::TeamRepository;

/// PostgreSQL implementation of TeamRepository.
#[derive(Clone)]
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn create_team(&self, team: &Team) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        let inserted = sqlx::query("INSERT INTO teams (team_name) VALUES ($1)")
            .bind(team.name().as_str())
            .execute(&mut *tx)
            .await;

        match inserted {
            Ok(_) => {}
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(DomainError::new(
                    ErrorCode::TeamExists,
                    format!("Team already exists: {}", team.name()),
                ));
            }
            Err(e) => return Err(DomainError::database("Failed to insert team", e)),
        }

        for member in team.members() {
            sqlx::query(
                r#"
                INSERT INTO users (user_id, username, is_active, team_name)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (user_id) DO UPDATE SET
                    username = EXCLUDED.username,
                    is_active = EXCLUDED.is_active,
                    team_name = EXCLUDED.team_name
                "#,
            )
            .bind(member.id().as_str())
            .bind(member.username())
            .bind(member.is_active())
            .bind(team.name().as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to upsert team member", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        Ok(())
    }

    async fn get_team_by_name(&self, name: &TeamName) -> Result<Team, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT user_id, username, is_active, team_name
            FROM users
            WHERE team_name = $1
            ORDER BY user_id
            "#,
        )
        .bind(name.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch team members", e))?;

        if rows.is_empty() {
            let exists: (bool,) =
                sqlx::query_as("SELECT EXISTS (SELECT 1 FROM teams WHERE team_name = $1)")
                    .bind(name.as_str())
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| DomainError::database("Failed to check team existence", e))?;

            if !exists.0 {
                return Err(DomainError::new(
                    ErrorCode::TeamNotFound,
                    format!("Team not found: {}", name),
                ));
            }
        }

        let members = rows
            .into_iter()
            .map(row_to_user)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Team::reconstitute(name.clone(), members))
    }

    async fn get_user_by_id(&self, id: &UserId) -> Result<User, DomainError> {
        let row = sqlx::query(
            "SELECT user_id, username, is_active, team_name FROM users WHERE user_id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch user", e))?;

        match row {
            Some(row) => row_to_user(row),
            None => Err(user_not_found(id)),
        }
    }

    async fn set_user_activity(
        &self,
        id: &UserId,
        is_active: bool,
    ) -> Result<User, DomainError> {
        let row = sqlx::query(
            r#"
            UPDATE users SET is_active = $2
            WHERE user_id = $1
            RETURNING user_id, username, is_active, team_name
            "#,
        )
        .bind(id.as_str())
        .bind(is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update user activity", e))?;

        match row {
            Some(row) => row_to_user(row),
            None => Err(user_not_found(id)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn user_not_found(id: &UserId) -> DomainError {
    DomainError::new(ErrorCode::UserNotFound, format!("User not found: {}", id))
}

fn row_to_user(row: sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let user_id: String = row
        .try_get("user_id")
        .map_err(|e| DomainError::database("Failed to get user_id", e))?;

    let username: String = row
        .try_get("username")
        .map_err(|e| DomainError::database("Failed to get username", e))?;

    let is_active: bool = row
        .try_get("is_active")
        .map_err(|e| DomainError::database("Failed to get is_active", e))?;

    let team_name: Option<String> = row
        .try_get("team_name")
        .map_err(|e| DomainError::database("Failed to get team_name", e))?;

    let team_name = team_name
        .map(TeamName::new)
        .transpose()
        .map_err(|e| DomainError::database("Invalid team_name", e))?;

    Ok(User::new(
        UserId::new(user_id).map_err(|e| DomainError::database("Invalid user_id", e))?,
        username,
        team_name,
        is_active,
    ))
}
