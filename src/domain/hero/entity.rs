//! Hero entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::team::{Team, TeamId};

use super::validation::DEFAULT_LEVEL;

/// Hero identifier, assigned by the datastore
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeroId(i64);

impl HeroId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for HeroId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for HeroId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A hero that passed validation and is ready to be inserted
///
/// Carries the resolved team rather than a bare id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHero {
    pub name: String,
    pub description: Option<String>,
    pub primary_power: Option<String>,
    pub level: i32,
    pub team: Team,
}

impl NewHero {
    pub fn new(name: impl Into<String>, team: Team) -> Self {
        Self {
            name: name.into(),
            description: None,
            primary_power: None,
            level: DEFAULT_LEVEL,
            team,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_primary_power(mut self, primary_power: Option<String>) -> Self {
        self.primary_power = primary_power;
        self
    }

    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Attach the identity the datastore assigned
    pub fn into_hero(self, id: HeroId, created_at: DateTime<Utc>) -> Hero {
        Hero {
            id,
            name: self.name,
            description: self.description,
            primary_power: self.primary_power,
            level: self.level,
            team: self.team,
            created_at,
        }
    }
}

/// Hero entity with its team embedded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    id: HeroId,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    primary_power: Option<String>,
    level: i32,
    team: Team,
    created_at: DateTime<Utc>,
}

impl Hero {
    /// Rebuild a hero from stored columns and its joined team
    pub fn from_parts(
        id: HeroId,
        name: String,
        description: Option<String>,
        primary_power: Option<String>,
        level: i32,
        team: Team,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            primary_power,
            level,
            team,
            created_at,
        }
    }

    pub fn id(&self) -> HeroId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn primary_power(&self) -> Option<&str> {
        self.primary_power.as_deref()
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn team(&self) -> &Team {
        &self.team
    }

    pub fn team_id(&self) -> TeamId {
        self.team.id()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // Mutators take values that were already validated by the service

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn set_primary_power(&mut self, primary_power: Option<String>) {
        self.primary_power = primary_power;
    }

    pub fn set_level(&mut self, level: i32) {
        self.level = level;
    }

    /// Move the hero to another team
    pub fn set_team(&mut self, team: Team) {
        self.team = team;
    }
}
