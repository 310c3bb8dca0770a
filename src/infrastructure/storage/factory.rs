//! Storage factory for runtime backend selection

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainError, HeroRepository, TeamRepository};
use crate::infrastructure::hero::{InMemoryHeroRepository, PostgresHeroRepository};
use crate::infrastructure::team::{InMemoryTeamRepository, PostgresTeamRepository};

use super::in_memory::InMemoryDatabase;
use super::postgres::{self, PostgresConfig};

/// Supported storage types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// In-memory storage configuration
    InMemory,
    /// PostgreSQL storage configuration
    Postgres(PostgresConfig),
}

impl StorageConfig {
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    pub fn postgres(config: PostgresConfig) -> Self {
        Self::Postgres(config)
    }

    pub fn postgres_url(url: impl Into<String>) -> Self {
        Self::Postgres(PostgresConfig::new(url))
    }

    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::Postgres(_) => StorageType::Postgres,
        }
    }
}

/// The pair of persistence gateways sharing one datastore
#[derive(Clone)]
pub struct Repositories {
    pub teams: Arc<dyn TeamRepository>,
    pub heroes: Arc<dyn HeroRepository>,
}

/// Factory for creating repositories over the configured datastore
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    pub async fn create(config: &StorageConfig) -> Result<Repositories, DomainError> {
        match config {
            StorageConfig::InMemory => {
                info!("Using in-memory storage");
                Ok(Self::create_in_memory())
            }
            StorageConfig::Postgres(pg_config) => {
                info!("Connecting to PostgreSQL...");
                let pool = postgres::connect(pg_config).await?;
                postgres::ensure_schema(&pool).await?;
                info!("PostgreSQL connection established");

                Ok(Repositories {
                    teams: Arc::new(PostgresTeamRepository::new(pool.clone())),
                    heroes: Arc::new(PostgresHeroRepository::new(pool)),
                })
            }
        }
    }

    /// Both repositories over one fresh in-memory database
    pub fn create_in_memory() -> Repositories {
        let db = Arc::new(InMemoryDatabase::new());

        Repositories {
            teams: Arc::new(InMemoryTeamRepository::new(db.clone())),
            heroes: Arc::new(InMemoryHeroRepository::new(db)),
        }
    }
}
