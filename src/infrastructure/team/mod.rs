//! Team infrastructure implementations

mod postgres_repository;
mod repository;
mod service;

pub(crate) use postgres_repository::row_to_team_with_prefix;

pub use postgres_repository::PostgresTeamRepository;
pub use repository::InMemoryTeamRepository;
pub use service::{CreateTeamRequest, TeamService, UpdateTeamRequest};
