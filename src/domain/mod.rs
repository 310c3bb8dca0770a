//! Domain layer - Core business logic and entities

pub mod deletion;
pub mod error;
pub mod hero;
pub mod pagination;
pub mod team;
pub mod validation;

pub use deletion::DeleteConfirmation;
pub use error::{DomainError, FieldErrors};
pub use hero::{Hero, HeroId, HeroRepository, NewHero};
pub use pagination::{Page, PageRequest};
pub use team::{NewTeam, Team, TeamId, TeamRepository};
