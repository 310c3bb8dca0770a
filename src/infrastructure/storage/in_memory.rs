//! In-memory relational store shared by the team and hero repositories

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use crate::domain::{Hero, HeroId, Team, TeamId};
use crate::domain::DomainError;

/// Stored hero row; the team is referenced by id like a foreign key
#[derive(Debug, Clone)]
pub(crate) struct HeroRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub primary_power: Option<String>,
    pub level: i32,
    pub team_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub teams: BTreeMap<i64, Team>,
    pub heroes: BTreeMap<i64, HeroRow>,
    team_seq: i64,
    hero_seq: i64,
}

impl Tables {
    pub fn next_team_id(&mut self) -> i64 {
        self.team_seq += 1;
        self.team_seq
    }

    pub fn next_hero_id(&mut self) -> i64 {
        self.hero_seq += 1;
        self.hero_seq
    }

    /// Join a hero row with its team
    pub fn hero(&self, row: &HeroRow) -> Result<Hero, DomainError> {
        let team = self.teams.get(&row.team_id).cloned().ok_or_else(|| {
            DomainError::storage(format!(
                "Hero {} references missing team {}",
                row.id, row.team_id
            ))
        })?;

        Ok(Hero::from_parts(
            HeroId::new(row.id),
            row.name.clone(),
            row.description.clone(),
            row.primary_power.clone(),
            row.level,
            team,
            row.created_at,
        ))
    }

    /// Hero rows matching `filter`, newest first
    pub fn heroes_newest_first(&self, filter: impl Fn(&HeroRow) -> bool) -> Vec<&HeroRow> {
        let mut rows: Vec<&HeroRow> = self.heroes.values().filter(|r| filter(*r)).collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        rows
    }

    /// Teams, newest first
    pub fn teams_newest_first(&self) -> Vec<&Team> {
        let mut teams: Vec<&Team> = self.teams.values().collect();
        teams.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then(b.id().cmp(&a.id()))
        });
        teams
    }

    /// Remove a team and cascade to its heroes
    pub fn delete_team(&mut self, id: TeamId) -> bool {
        if self.teams.remove(&id.value()).is_none() {
            return false;
        }

        self.heroes.retain(|_, row| row.team_id != id.value());
        true
    }
}

/// Thread-safe in-memory database
///
/// Useful for testing and development. Data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    tables: RwLock<Tables>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, DomainError> {
        self.tables
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, DomainError> {
        self.tables
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))
    }
}
