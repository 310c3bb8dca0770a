//! Team repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{NewTeam, Team, TeamId};
use crate::domain::pagination::PageRequest;
use crate::domain::DomainError;

/// Persistence gateway for teams
///
/// Missing rows are reported as `None`/`false`; errors are storage failures only.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Get a team by ID
    async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError>;

    /// Get a team by exact, case-sensitive name
    async fn get_by_name(&self, name: &str) -> Result<Option<Team>, DomainError>;

    /// Check if a team with this exact name exists
    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError>;

    /// Insert a new team and return it with its assigned id
    async fn create(&self, team: NewTeam) -> Result<Team, DomainError>;

    /// Persist name/description; `None` if the team no longer exists
    async fn update(&self, team: &Team) -> Result<Option<Team>, DomainError>;

    /// Delete a team and every hero that belongs to it
    async fn delete(&self, id: TeamId) -> Result<bool, DomainError>;

    /// List one page of teams, newest first
    async fn list(&self, page: PageRequest) -> Result<Vec<Team>, DomainError>;

    /// Count all teams
    async fn count(&self) -> Result<usize, DomainError>;
}
