//! PostgreSQL implementation of PullRequestRepository.
//!
//! Pull requests live in `pull_requests`; reviewer links live in
//! `pr_reviewers` with an explicit `position` so assignment order survives
//! a round trip.

use std::future::Future;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Row, Transaction};

use crate::domain::foundation::{
    DomainError, ErrorCode, PullRequestId, PullRequestStatus, Timestamp, UserId,
};
use crate::domain::pull_request::PullRequest;
use crate::ports::PullRequestRepository;

/// PostgreSQL implementation of PullRequestRepository.
#[derive(Clone)]
pub struct PostgresPullRequestRepository {
    pool: PgPool,
}

impl PostgresPullRequestRepository {
    /// Creates a new PostgresPullRequestRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_reviewers(&self, id: &PullRequestId) -> Result<Vec<UserId>, DomainError> {
        let rows = sqlx::query(
            "SELECT reviewer_id FROM pr_reviewers WHERE pr_id = $1 ORDER BY position",
        )
        .bind(id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch reviewers", e))?;

        rows.into_iter()
            .map(|row| {
                let reviewer_id: String = row
                    .try_get("reviewer_id")
                    .map_err(|e| DomainError::database("Failed to get reviewer_id", e))?;
                UserId::new(reviewer_id).map_err(|e| DomainError::database("Invalid reviewer_id", e))
            })
            .collect()
    }
}

#[async_trait]
impl PullRequestRepository for PostgresPullRequestRepository {
    async fn create(&self, pull_request: &PullRequest) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO pull_requests (
                pull_request_id, pull_request_name, author_id, status, created_at, merged_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(pull_request.id().as_str())
        .bind(pull_request.name())
        .bind(pull_request.author_id().as_str())
        .bind(pull_request.status().as_str())
        .bind(pull_request.created_at().as_datetime())
        .bind(pull_request.merged_at().map(|t| *t.as_datetime()))
        .execute(&mut *tx)
        .await;

        match inserted {
            Ok(_) => {}
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(DomainError::new(
                    ErrorCode::PullRequestExists,
                    format!("Pull request already exists: {}", pull_request.id()),
                ));
            }
            Err(e) => return Err(DomainError::database("Failed to insert pull request", e)),
        }

        insert_reviewers(&mut tx, pull_request.id(), pull_request.assigned_reviewers()).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        Ok(())
    }

    async fn get_by_id(&self, id: &PullRequestId) -> Result<PullRequest, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT pull_request_id, pull_request_name, author_id, status, created_at, merged_at
            FROM pull_requests
            WHERE pull_request_id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch pull request", e))?;

        let row = row.ok_or_else(|| pull_request_not_found(id))?;
        let reviewers = self.fetch_reviewers(id).await?;
        row_to_pull_request(row, reviewers)
    }

    async fn merge(&self, id: &PullRequestId) -> Result<PullRequest, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE pull_requests SET status = 'MERGED', merged_at = NOW()
            WHERE pull_request_id = $1 AND status = 'OPEN'
            "#,
        )
        .bind(id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to merge pull request", e))?;

        if result.rows_affected() == 0 {
            // Either missing or already merged; get_by_id tells the two apart.
            let existing = self.get_by_id(id).await?;
            return Err(DomainError::new(
                ErrorCode::PullRequestMerged,
                format!("Pull request already merged: {}", existing.id()),
            ));
        }

        self.get_by_id(id).await
    }

    async fn update_reviewers(
        &self,
        id: &PullRequestId,
        reviewers: &[UserId],
    ) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        let locked = sqlx::query(
            "SELECT pull_request_id FROM pull_requests WHERE pull_request_id = $1 FOR UPDATE",
        )
        .bind(id.as_str())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to lock pull request", e))?;

        if locked.is_none() {
            return Err(pull_request_not_found(id));
        }

        sqlx::query("DELETE FROM pr_reviewers WHERE pr_id = $1")
            .bind(id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to clear reviewers", e))?;

        insert_reviewers(&mut tx, id, reviewers).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        Ok(())
    }

    async fn find_open_by_reviewer(
        &self,
        reviewer_id: &UserId,
    ) -> Result<Vec<PullRequest>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT pr.pull_request_id
            FROM pull_requests pr
            JOIN pr_reviewers r ON r.pr_id = pr.pull_request_id
            WHERE r.reviewer_id = $1 AND pr.status = 'OPEN'
            ORDER BY pr.created_at, pr.pull_request_id
            "#,
        )
        .bind(reviewer_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch reviewer pull requests", e))?;

        let ids: Vec<Result<PullRequestId, DomainError>> = rows
            .into_iter()
            .map(|row| {
                let raw: String = row
                    .try_get("pull_request_id")
                    .map_err(|e| DomainError::database("Failed to get pull_request_id", e))?;
                PullRequestId::new(raw).map_err(|e| DomainError::database("Invalid pull_request_id", e))
            })
            .collect();

        let pull_requests =
            collect_loadable(reviewer_id, ids, move |id| async move { self.get_by_id(&id).await })
                .await;
        Ok(pull_requests)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

async fn insert_reviewers(
    tx: &mut Transaction<'_, Postgres>,
    id: &PullRequestId,
    reviewers: &[UserId],
) -> Result<(), DomainError> {
    for (position, reviewer) in reviewers.iter().enumerate() {
        sqlx::query("INSERT INTO pr_reviewers (pr_id, reviewer_id, position) VALUES ($1, $2, $3)")
            .bind(id.as_str())
            .bind(reviewer.as_str())
            .bind(position as i16)
            .execute(&mut **tx)
            .await
            .map_err(|e| DomainError::database("Failed to insert reviewer", e))?;
    }
    Ok(())
}

/// Loads each id in order, skipping (and logging) entries that fail.
async fn collect_loadable<F, Fut>(
    reviewer_id: &UserId,
    ids: Vec<Result<PullRequestId, DomainError>>,
    load: F,
) -> Vec<PullRequest>
where
    F: Fn(PullRequestId) -> Fut,
    Fut: Future<Output = Result<PullRequest, DomainError>>,
{
    let mut pull_requests = Vec::with_capacity(ids.len());
    for id in ids {
        let loaded = match id {
            Ok(id) => load(id).await,
            Err(e) => Err(e),
        };

        match loaded {
            Ok(pull_request) => pull_requests.push(pull_request),
            Err(error) => {
                tracing::warn!(
                    reviewer_id = %reviewer_id,
                    error = %error,
                    "Skipping pull request that failed to load"
                );
            }
        }
    }
    pull_requests
}

fn pull_request_not_found(id: &PullRequestId) -> DomainError {
    DomainError::new(
        ErrorCode::PullRequestNotFound,
        format!("Pull request not found: {}", id),
    )
}

fn str_to_status(s: &str) -> Result<PullRequestStatus, DomainError> {
    s.parse::<PullRequestStatus>()
        .map_err(|e| DomainError::database("Invalid pull request status", e))
}

fn row_to_pull_request(
    row: sqlx::postgres::PgRow,
    reviewers: Vec<UserId>,
) -> Result<PullRequest, DomainError> {
    let id: String = row
        .try_get("pull_request_id")
        .map_err(|e| DomainError::database("Failed to get pull_request_id", e))?;

    let name: String = row
        .try_get("pull_request_name")
        .map_err(|e| DomainError::database("Failed to get pull_request_name", e))?;

    let author_id: String = row
        .try_get("author_id")
        .map_err(|e| DomainError::database("Failed to get author_id", e))?;

    let status_str: String = row
        .try_get("status")
        .map_err(|e| DomainError::database("Failed to get status", e))?;
    let status = str_to_status(&status_str)?;

    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database("Failed to get created_at", e))?;

    let merged_at: Option<chrono::DateTime<chrono::Utc>> = row
        .try_get("merged_at")
        .map_err(|e| DomainError::database("Failed to get merged_at", e))?;

    Ok(PullRequest::reconstitute(
        PullRequestId::new(id).map_err(|e| DomainError::database("Invalid pull_request_id", e))?,
        name,
        UserId::new(author_id).map_err(|e| DomainError::database("Invalid author_id", e))?,
        status,
        reviewers,
        Timestamp::from_datetime(created_at),
        merged_at.map(Timestamp::from_datetime),
    ))
}
