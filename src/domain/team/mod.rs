//! Team domain module
//!
//! Teams own heroes. Team names are unique and deleting a team deletes
//! its heroes.

mod entity;
mod repository;
mod validation;

#[cfg(test)]
pub use repository::MockTeamRepository;

pub use entity::{NewTeam, Team, TeamId};
pub use repository::TeamRepository;
pub use validation::{validate_team_name, TeamValidationError};
