//! Team entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_team_name, TeamValidationError};
use crate::domain::validation::normalize_text;

/// Team identifier, assigned by the datastore
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(i64);

impl TeamId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for TeamId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated team that has not been persisted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewTeam {
    name: String,
    description: Option<String>,
}

impl NewTeam {
    /// Trims and validates the name; uniqueness is checked by the service
    pub fn new(name: &str) -> Result<Self, TeamValidationError> {
        Ok(Self {
            name: validate_team_name(name)?,
            description: None,
        })
    }

    pub fn with_description(mut self, description: Option<&str>) -> Self {
        self.description = normalize_text(description);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Attach the identity the datastore assigned
    pub fn into_team(self, id: TeamId, created_at: DateTime<Utc>) -> Team {
        Team {
            id,
            name: self.name,
            description: self.description,
            created_at,
        }
    }
}

/// Team entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl Team {
    /// Rebuild a team from stored columns
    pub fn from_parts(
        id: TeamId,
        name: String,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            created_at,
        }
    }

    // Getters

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // Mutators

    /// Update the name (trimmed)
    pub fn set_name(&mut self, name: &str) -> Result<(), TeamValidationError> {
        self.name = validate_team_name(name)?;
        Ok(())
    }

    /// Update the description; blank clears it
    pub fn set_description(&mut self, description: &str) {
        self.description = normalize_text(Some(description));
    }
}
