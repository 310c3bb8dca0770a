//! PostgreSQL team repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::pagination::PageRequest;
use crate::domain::{DomainError, NewTeam, Team, TeamId, TeamRepository};

/// PostgreSQL implementation of TeamRepository
#[derive(Debug, Clone)]
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
        let row = sqlx::query("SELECT id, name, description, created_at FROM teams WHERE id = $1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get team: {}", e)))?;

        row.as_ref().map(row_to_team).transpose()
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Team>, DomainError> {
        let row =
            sqlx::query("SELECT id, name, description, created_at FROM teams WHERE name = $1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::storage(format!("Failed to get team by name: {}", e))
                })?;

        row.as_ref().map(row_to_team).transpose()
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM teams WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check team name: {}", e)))
    }

    async fn create(&self, team: NewTeam) -> Result<Team, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO teams (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_at
            "#,
        )
        .bind(team.name())
        .bind(team.description())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create team: {}", e)))?;

        row_to_team(&row)
    }

    async fn update(&self, team: &Team) -> Result<Option<Team>, DomainError> {
        let row = sqlx::query(
            r#"
            UPDATE teams
            SET name = $2, description = $3
            WHERE id = $1
            RETURNING id, name, description, created_at
            "#,
        )
        .bind(team.id().value())
        .bind(team.name())
        .bind(team.description())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update team: {}", e)))?;

        row.as_ref().map(row_to_team).transpose()
    }

    async fn delete(&self, id: TeamId) -> Result<bool, DomainError> {
        // heroes go with it through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete team: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Team>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, created_at
            FROM teams
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list teams: {}", e)))?;

        rows.iter().map(row_to_team).collect()
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teams")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count teams: {}", e)))?;

        Ok(count as usize)
    }
}

/// Map a `teams` row; `prefix` selects aliased columns from a join
pub(crate) fn row_to_team_with_prefix(row: &PgRow, prefix: &str) -> Result<Team, DomainError> {
    let column = |name: &str| format!("{}{}", prefix, name);
    let decode = |e: sqlx::Error| DomainError::storage(format!("Failed to decode team: {}", e));

    let id: i64 = row.try_get(column("id").as_str()).map_err(decode)?;
    let name: String = row.try_get(column("name").as_str()).map_err(decode)?;
    let description: Option<String> =
        row.try_get(column("description").as_str()).map_err(decode)?;
    let created_at: DateTime<Utc> = row.try_get(column("created_at").as_str()).map_err(decode)?;

    Ok(Team::from_parts(TeamId::new(id), name, description, created_at))
}

fn row_to_team(row: &PgRow) -> Result<Team, DomainError> {
    row_to_team_with_prefix(row, "")
}
