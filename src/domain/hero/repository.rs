//! Hero repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{Hero, HeroId, NewHero};
use crate::domain::pagination::PageRequest;
use crate::domain::team::TeamId;
use crate::domain::DomainError;

/// Persistence gateway for heroes
///
/// Every returned hero has its team joined in. Missing rows are `None`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HeroRepository: Send + Sync {
    /// Get a hero by ID
    async fn get(&self, id: HeroId) -> Result<Option<Hero>, DomainError>;

    /// Get a hero by exact, case-sensitive name
    async fn get_by_name(&self, name: &str) -> Result<Option<Hero>, DomainError>;

    /// Check if a hero with this exact name exists
    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError>;

    /// Insert a new hero under the team it carries
    async fn create(&self, hero: NewHero) -> Result<Hero, DomainError>;

    /// Persist every mutable field, including the team; `None` if the hero is gone
    async fn update(&self, hero: &Hero) -> Result<Option<Hero>, DomainError>;

    /// Delete a single hero
    async fn delete(&self, id: HeroId) -> Result<bool, DomainError>;

    /// List one page of heroes, newest first
    async fn list(&self, page: PageRequest) -> Result<Vec<Hero>, DomainError>;

    /// Count all heroes
    async fn count(&self) -> Result<usize, DomainError>;

    /// List one page of a team's heroes, newest first
    async fn list_by_team(
        &self,
        team_id: TeamId,
        page: PageRequest,
    ) -> Result<Vec<Hero>, DomainError>;

    /// Count a team's heroes
    async fn count_by_team(&self, team_id: TeamId) -> Result<usize, DomainError>;
}
