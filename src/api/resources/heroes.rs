//! Hero endpoints

use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::pagination::{PageResponse, PaginationQuery};
use super::teams::{ByNameQuery, TeamResponse};
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, Path, Query};
use crate::domain::{DeleteConfirmation, Hero};
use crate::infrastructure::hero::{CreateHeroRequest, UpdateHeroRequest};

/// Request to create a new hero
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHeroApiRequest {
    #[serde(default, alias = "nombre")]
    pub name: String,
    pub team_id: i64,
    #[serde(default, alias = "descripcion")]
    pub description: Option<String>,
    #[serde(default, alias = "poder_principal")]
    pub primary_power: Option<String>,
    #[serde(default, alias = "nivel")]
    pub level: Option<i32>,
}

/// Request to update a hero; absent and null fields are left as they are
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateHeroApiRequest {
    #[serde(default, alias = "nombre")]
    pub name: Option<String>,
    #[serde(default, alias = "descripcion")]
    pub description: Option<String>,
    #[serde(default, alias = "poder_principal")]
    pub primary_power: Option<String>,
    #[serde(default, alias = "nivel")]
    pub level: Option<i32>,
    #[serde(default)]
    pub team_id: Option<i64>,
}

/// Hero response with its team embedded
#[derive(Debug, Clone, Serialize)]
pub struct HeroResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub primary_power: Option<String>,
    pub level: i32,
    pub team_id: i64,
    pub team: TeamResponse,
    pub created_at: String,
}

impl From<&Hero> for HeroResponse {
    fn from(hero: &Hero) -> Self {
        Self {
            id: hero.id().value(),
            name: hero.name().to_string(),
            description: hero.description().map(String::from),
            primary_power: hero.primary_power().map(String::from),
            level: hero.level(),
            team_id: hero.team_id().value(),
            team: TeamResponse::from(hero.team()),
            created_at: hero.created_at().to_rfc3339(),
        }
    }
}

/// GET /heroes/
pub async fn list_heroes(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<PageResponse<HeroResponse>>, ApiError> {
    debug!(offset = query.offset, limit = query.limit, "Listing heroes");

    let page = state.hero_service.list(query.offset, query.limit).await?;

    Ok(Json(PageResponse::from_page(&page, |h| HeroResponse::from(h))))
}

/// POST /heroes/
pub async fn create_hero(
    State(state): State<AppState>,
    Json(request): Json<CreateHeroApiRequest>,
) -> Result<(StatusCode, Json<HeroResponse>), ApiError> {
    debug!(name = %request.name, team_id = request.team_id, "Creating hero");

    let hero = state
        .hero_service
        .create(CreateHeroRequest {
            name: request.name,
            team_id: request.team_id,
            description: request.description,
            primary_power: request.primary_power,
            level: request.level,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(HeroResponse::from(&hero))))
}

/// GET /heroes/{id}/
pub async fn get_hero(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<HeroResponse>, ApiError> {
    debug!(id, "Getting hero");

    let hero = state.hero_service.get_by_id(id).await?;

    Ok(Json(HeroResponse::from(&hero)))
}

/// GET /heroes/by-name/?name=
pub async fn get_hero_by_name(
    State(state): State<AppState>,
    Query(query): Query<ByNameQuery>,
) -> Result<Json<HeroResponse>, ApiError> {
    debug!(name = %query.name, "Getting hero by name");

    let hero = state.hero_service.get_by_name(&query.name).await?;

    Ok(Json(HeroResponse::from(&hero)))
}

/// GET /heroes/{team_id}/by-team/
pub async fn list_heroes_by_team(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<PageResponse<HeroResponse>>, ApiError> {
    debug!(team_id, offset = query.offset, limit = query.limit, "Listing heroes by team");

    let result = state
        .hero_service
        .list_by_team(team_id, query.offset, query.limit)
        .await?;

    let response = PageResponse::from_page(&result.page, |h| HeroResponse::from(h))
        .with_team_info(&result.team);

    Ok(Json(response))
}

/// PATCH /heroes/{id}/
pub async fn update_hero(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateHeroApiRequest>,
) -> Result<Json<HeroResponse>, ApiError> {
    debug!(id, "Updating hero");

    let hero = state
        .hero_service
        .update(
            id,
            UpdateHeroRequest {
                name: request.name,
                description: request.description,
                primary_power: request.primary_power,
                level: request.level,
                team_id: request.team_id,
            },
        )
        .await?;

    Ok(Json(HeroResponse::from(&hero)))
}

/// DELETE /heroes/{id}/
pub async fn delete_hero(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    debug!(id, "Deleting hero");

    let confirmation = state.hero_service.delete(id).await?;

    Ok(Json(confirmation))
}
