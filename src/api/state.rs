//! Application state for shared services

use crate::infrastructure::hero::HeroService;
use crate::infrastructure::storage::{Repositories, StorageFactory};
use crate::infrastructure::team::TeamService;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub team_service: TeamService,
    pub hero_service: HeroService,
}

impl AppState {
    /// Wire both services over one datastore
    pub fn new(repositories: Repositories) -> Self {
        Self {
            team_service: TeamService::new(repositories.teams.clone()),
            hero_service: HeroService::new(repositories.heroes, repositories.teams),
        }
    }

    /// State over a fresh in-memory datastore
    pub fn in_memory() -> Self {
        Self::new(StorageFactory::create_in_memory())
    }
}
