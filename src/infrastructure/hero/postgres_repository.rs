//! PostgreSQL hero repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::pagination::PageRequest;
use crate::domain::{DomainError, Hero, HeroId, HeroRepository, NewHero, TeamId};
use crate::infrastructure::team::row_to_team_with_prefix;

/// Hero columns joined with their team, team columns prefixed `team_`
const SELECT_HERO: &str = r#"
    SELECT h.id, h.name, h.description, h.primary_power, h.level, h.created_at,
           t.id AS team_id, t.name AS team_name, t.description AS team_description,
           t.created_at AS team_created_at
    FROM heroes h
    JOIN teams t ON t.id = h.team_id
"#;

/// PostgreSQL implementation of HeroRepository
#[derive(Debug, Clone)]
pub struct PostgresHeroRepository {
    pool: PgPool,
}

impl PostgresHeroRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HeroRepository for PostgresHeroRepository {
    async fn get(&self, id: HeroId) -> Result<Option<Hero>, DomainError> {
        let sql = format!("{} WHERE h.id = $1", SELECT_HERO);

        let row = sqlx::query(&sql)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get hero: {}", e)))?;

        row.as_ref().map(row_to_hero).transpose()
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Hero>, DomainError> {
        let sql = format!("{} WHERE h.name = $1", SELECT_HERO);

        let row = sqlx::query(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get hero by name: {}", e)))?;

        row.as_ref().map(row_to_hero).transpose()
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM heroes WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check hero name: {}", e)))
    }

    async fn create(&self, hero: NewHero) -> Result<Hero, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO heroes (name, description, primary_power, level, team_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, created_at
            "#,
        )
        .bind(&hero.name)
        .bind(&hero.description)
        .bind(&hero.primary_power)
        .bind(hero.level)
        .bind(hero.team.id().value())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create hero: {}", e)))?;

        let id: i64 = row.try_get("id").map_err(decode_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(decode_error)?;

        Ok(hero.into_hero(HeroId::new(id), created_at))
    }

    async fn update(&self, hero: &Hero) -> Result<Option<Hero>, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE heroes
            SET name = $2, description = $3, primary_power = $4, level = $5, team_id = $6
            WHERE id = $1
            "#,
        )
        .bind(hero.id().value())
        .bind(hero.name())
        .bind(hero.description())
        .bind(hero.primary_power())
        .bind(hero.level())
        .bind(hero.team_id().value())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update hero: {}", e)))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        // Re-read so the embedded team is the stored one
        self.get(hero.id()).await
    }

    async fn delete(&self, id: HeroId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM heroes WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete hero: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Hero>, DomainError> {
        let sql = format!(
            "{} ORDER BY h.created_at DESC, h.id DESC LIMIT $1 OFFSET $2",
            SELECT_HERO
        );

        let rows = sqlx::query(&sql)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list heroes: {}", e)))?;

        rows.iter().map(row_to_hero).collect()
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM heroes")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count heroes: {}", e)))?;

        Ok(count as usize)
    }

    async fn list_by_team(
        &self,
        team_id: TeamId,
        page: PageRequest,
    ) -> Result<Vec<Hero>, DomainError> {
        let sql = format!(
            "{} WHERE h.team_id = $1 ORDER BY h.created_at DESC, h.id DESC LIMIT $2 OFFSET $3",
            SELECT_HERO
        );

        let rows = sqlx::query(&sql)
            .bind(team_id.value())
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!("Failed to list heroes by team: {}", e))
            })?;

        rows.iter().map(row_to_hero).collect()
    }

    async fn count_by_team(&self, team_id: TeamId) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM heroes WHERE team_id = $1")
            .bind(team_id.value())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!("Failed to count heroes by team: {}", e))
            })?;

        Ok(count as usize)
    }
}

fn decode_error(e: sqlx::Error) -> DomainError {
    DomainError::storage(format!("Failed to decode hero: {}", e))
}

fn row_to_hero(row: &PgRow) -> Result<Hero, DomainError> {
    let id: i64 = row.try_get("id").map_err(decode_error)?;
    let name: String = row.try_get("name").map_err(decode_error)?;
    let description: Option<String> = row.try_get("description").map_err(decode_error)?;
    let primary_power: Option<String> = row.try_get("primary_power").map_err(decode_error)?;
    let level: i32 = row.try_get("level").map_err(decode_error)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(decode_error)?;
    let team = row_to_team_with_prefix(row, "team_")?;

    Ok(Hero::from_parts(
        HeroId::new(id),
        name,
        description,
        primary_power,
        level,
        team,
        created_at,
    ))
}
