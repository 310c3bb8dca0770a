//! Heroes API
//!
//! CRUD service for teams and the heroes that belong to them:
//! - Paginated listings, newest first
//! - Unique team and hero names
//! - Team deletion cascades to its heroes
//! - In-memory or PostgreSQL storage

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use api::state::AppState;
use infrastructure::storage::StorageFactory;
use tracing::info;

/// Create the application state over the configured datastore
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage = config.storage.to_storage_config()?;
    info!("Storage backend: {:?}", storage.storage_type());

    let repositories = StorageFactory::create(&storage).await?;

    Ok(AppState::new(repositories))
}
