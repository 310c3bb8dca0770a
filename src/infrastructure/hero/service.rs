//! Hero service: the business rules for heroes

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::hero::{
    validate_hero_name, validate_level, validate_primary_power, HeroValidationError,
    DEFAULT_LEVEL,
};
use crate::domain::validation::{normalize_text, validate_id};
use crate::domain::{
    DeleteConfirmation, DomainError, Hero, HeroId, HeroRepository, NewHero, Page, PageRequest,
    Team, TeamId, TeamRepository,
};

/// Request for creating a new hero
#[derive(Debug, Clone, Default)]
pub struct CreateHeroRequest {
    pub name: String,
    pub team_id: i64,
    pub description: Option<String>,
    pub primary_power: Option<String>,
    /// Defaults to level 1
    pub level: Option<i32>,
}

/// Request for updating a hero; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateHeroRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub primary_power: Option<String>,
    pub level: Option<i32>,
    pub team_id: Option<i64>,
}

/// One page of a team's heroes together with the team itself
#[derive(Debug, Clone, PartialEq)]
pub struct TeamHeroes {
    pub page: Page<Hero>,
    pub team: Team,
}

fn hero_not_found(id: i64) -> DomainError {
    DomainError::not_found(format!("No se encontró el héroe con ID {}", id))
}

/// Trimmed power, validated for length; blank means absent
fn primary_power(value: Option<&str>) -> Result<Option<String>, HeroValidationError> {
    normalize_text(value)
        .map(|power| validate_primary_power(&power))
        .transpose()
}

/// Hero service for managing heroes
///
/// Reads teams through the team repository to resolve `team_id`.
#[derive(Clone)]
pub struct HeroService {
    heroes: Arc<dyn HeroRepository>,
    teams: Arc<dyn TeamRepository>,
}

impl HeroService {
    /// Create a new hero service
    pub fn new(heroes: Arc<dyn HeroRepository>, teams: Arc<dyn TeamRepository>) -> Self {
        Self { heroes, teams }
    }

    /// Resolve a team reference given in a hero payload
    async fn resolve_team(&self, team_id: i64) -> Result<Team, DomainError> {
        self.teams
            .get(TeamId::new(team_id))
            .await?
            .ok_or_else(|| HeroValidationError::UnknownTeam(team_id).into())
    }

    /// Create a new hero
    ///
    /// Checks run in a fixed order and the first failure is reported: name,
    /// name uniqueness, team, level, then primary power.
    pub async fn create(&self, request: CreateHeroRequest) -> Result<Hero, DomainError> {
        info!(name = %request.name, team_id = request.team_id, "Creating hero");

        let name = validate_hero_name(&request.name)?;

        if self.heroes.exists_by_name(&name).await? {
            return Err(HeroValidationError::DuplicateName(name).into());
        }

        let team = self.resolve_team(request.team_id).await?;
        let level = validate_level(request.level.unwrap_or(DEFAULT_LEVEL))?;
        let power = primary_power(request.primary_power.as_deref())?;

        let hero = NewHero::new(name, team)
            .with_description(normalize_text(request.description.as_deref()))
            .with_primary_power(power)
            .with_level(level);

        let hero = self.heroes.create(hero).await?;
        info!(id = %hero.id(), name = %hero.name(), team = %hero.team().name(), "Hero created");

        Ok(hero)
    }

    /// Get a hero by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Hero, DomainError> {
        validate_id(id)?;

        self.heroes
            .get(HeroId::new(id))
            .await?
            .ok_or_else(|| hero_not_found(id))
    }

    /// Get a hero by its exact name
    pub async fn get_by_name(&self, name: &str) -> Result<Hero, DomainError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(HeroValidationError::MissingSearchName.into());
        }

        self.heroes.get_by_name(name).await?.ok_or_else(|| {
            DomainError::not_found(format!("No se encontró el héroe con nombre '{}'", name))
        })
    }

    /// List heroes, newest first
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Page<Hero>, DomainError> {
        let request = PageRequest::new(offset, limit)?;
        debug!(offset, limit, "Listing heroes");

        let total = self.heroes.count().await?;
        let items = self.heroes.list(request).await?;

        Ok(Page::new(items, total, request))
    }

    /// List a team's heroes, newest first
    ///
    /// An unknown team is reported before the pagination window is checked.
    pub async fn list_by_team(
        &self,
        team_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<TeamHeroes, DomainError> {
        let team = self
            .teams
            .get(TeamId::new(team_id))
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!("No existe un equipo con ID {}", team_id))
            })?;

        let request = PageRequest::new(offset, limit)?;
        debug!(team_id, offset, limit, "Listing heroes by team");

        let total = self.heroes.count_by_team(team.id()).await?;
        let items = self.heroes.list_by_team(team.id(), request).await?;

        Ok(TeamHeroes {
            page: Page::new(items, total, request),
            team,
        })
    }

    /// Update a hero
    pub async fn update(&self, id: i64, request: UpdateHeroRequest) -> Result<Hero, DomainError> {
        info!(id, "Updating hero");

        let mut hero = self
            .heroes
            .get(HeroId::new(id))
            .await?
            .ok_or_else(|| hero_not_found(id))?;

        if let Some(name) = request.name.as_deref() {
            let name = validate_hero_name(name)?;

            if let Some(other) = self.heroes.get_by_name(&name).await? {
                if other.id() != hero.id() {
                    return Err(HeroValidationError::NameTakenByOther(name).into());
                }
            }

            hero.set_name(name);
        }

        if let Some(level) = request.level {
            hero.set_level(validate_level(level)?);
        }

        if request.primary_power.is_some() {
            hero.set_primary_power(primary_power(request.primary_power.as_deref())?);
        }

        if request.description.is_some() {
            hero.set_description(normalize_text(request.description.as_deref()));
        }

        if let Some(team_id) = request.team_id {
            hero.set_team(self.resolve_team(team_id).await?);
        }

        self.heroes
            .update(&hero)
            .await?
            .ok_or_else(|| hero_not_found(id))
    }

    /// Delete a single hero; its team is untouched
    pub async fn delete(&self, id: i64) -> Result<DeleteConfirmation, DomainError> {
        info!(id, "Deleting hero");

        let hero = self
            .heroes
            .get(HeroId::new(id))
            .await?
            .ok_or_else(|| hero_not_found(id))?;

        let message = format!(
            "Héroe '{}' del equipo '{}' eliminado exitosamente",
            hero.name(),
            hero.team().name()
        );

        if !self.heroes.delete(hero.id()).await? {
            return Err(hero_not_found(id));
        }

        Ok(DeleteConfirmation::new(message, id))
    }
}
