//! In-memory team repository implementation

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::pagination::PageRequest;
use crate::domain::{DomainError, NewTeam, Team, TeamId, TeamRepository};
use crate::infrastructure::storage::InMemoryDatabase;

/// Team repository over the shared in-memory database
#[derive(Debug, Clone)]
pub struct InMemoryTeamRepository {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryTeamRepository {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
        Ok(self.db.read()?.teams.get(&id.value()).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Team>, DomainError> {
        Ok(self
            .db
            .read()?
            .teams
            .values()
            .find(|t| t.name() == name)
            .cloned())
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        Ok(self.db.read()?.teams.values().any(|t| t.name() == name))
    }

    async fn create(&self, team: NewTeam) -> Result<Team, DomainError> {
        let mut tables = self.db.write()?;

        let id = tables.next_team_id();
        let team = team.into_team(TeamId::new(id), Utc::now());
        tables.teams.insert(id, team.clone());

        Ok(team)
    }

    async fn update(&self, team: &Team) -> Result<Option<Team>, DomainError> {
        let mut tables = self.db.write()?;

        match tables.teams.get_mut(&team.id().value()) {
            Some(stored) => {
                *stored = team.clone();
                Ok(Some(team.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: TeamId) -> Result<bool, DomainError> {
        Ok(self.db.write()?.delete_team(id))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Team>, DomainError> {
        let tables = self.db.read()?;
        Ok(page.apply(tables.teams_newest_first().into_iter().cloned()))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.db.read()?.teams.len())
    }
}
