//! Hero infrastructure implementations

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresHeroRepository;
pub use repository::InMemoryHeroRepository;
pub use service::{CreateHeroRequest, HeroService, TeamHeroes, UpdateHeroRequest};
