//! Team endpoints

use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::pagination::{PageResponse, PaginationQuery};
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, Path, Query};
use crate::domain::{DeleteConfirmation, Team};
use crate::infrastructure::team::{CreateTeamRequest, UpdateTeamRequest};

/// Request to create a new team
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamApiRequest {
    #[serde(default, alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "descripcion")]
    pub description: Option<String>,
}

/// Request to update a team; absent and null fields are left as they are
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTeamApiRequest {
    #[serde(default, alias = "nombre")]
    pub name: Option<String>,
    #[serde(default, alias = "descripcion")]
    pub description: Option<String>,
}

/// `?name=` lookup query
#[derive(Debug, Clone, Deserialize)]
pub struct ByNameQuery {
    #[serde(default, alias = "nombre")]
    pub name: String,
}

/// Team response
#[derive(Debug, Clone, Serialize)]
pub struct TeamResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().value(),
            name: team.name().to_string(),
            description: team.description().map(String::from),
            created_at: team.created_at().to_rfc3339(),
        }
    }
}

/// GET /teams/
pub async fn list_teams(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<PageResponse<TeamResponse>>, ApiError> {
    debug!(offset = query.offset, limit = query.limit, "Listing teams");

    let page = state.team_service.list(query.offset, query.limit).await?;

    Ok(Json(PageResponse::from_page(&page, |t| TeamResponse::from(t))))
}

/// POST /teams/
pub async fn create_team(
    State(state): State<AppState>,
    Json(request): Json<CreateTeamApiRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    debug!(name = %request.name, "Creating team");

    let team = state
        .team_service
        .create(CreateTeamRequest {
            name: request.name,
            description: request.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// GET /teams/{id}/
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TeamResponse>, ApiError> {
    debug!(id, "Getting team");

    let team = state.team_service.get_by_id(id).await?;

    Ok(Json(TeamResponse::from(&team)))
}

/// GET /teams/by-name/?name=
pub async fn get_team_by_name(
    State(state): State<AppState>,
    Query(query): Query<ByNameQuery>,
) -> Result<Json<TeamResponse>, ApiError> {
    debug!(name = %query.name, "Getting team by name");

    let team = state.team_service.get_by_name(&query.name).await?;

    Ok(Json(TeamResponse::from(&team)))
}

/// PATCH /teams/{id}/
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateTeamApiRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    debug!(id, "Updating team");

    let team = state
        .team_service
        .update(
            id,
            UpdateTeamRequest {
                name: request.name,
                description: request.description,
            },
        )
        .await?;

    Ok(Json(TeamResponse::from(&team)))
}

/// DELETE /teams/{id}/
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    debug!(id, "Deleting team");

    let confirmation = state.team_service.delete(id).await?;

    Ok(Json(confirmation))
}
