//! Storage infrastructure - datastore backends

mod factory;
mod in_memory;
mod postgres;

pub(crate) use in_memory::{HeroRow, Tables};

pub use factory::{Repositories, StorageConfig, StorageFactory, StorageType};
pub use in_memory::InMemoryDatabase;
pub use postgres::{connect, ensure_schema, PostgresConfig};
