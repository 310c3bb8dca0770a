//! Hero domain module
//!
//! Every hero belongs to exactly one team. Hero names are unique across
//! all teams.

mod entity;
mod repository;
mod validation;

#[cfg(test)]
pub use repository::MockHeroRepository;

pub use entity::{Hero, HeroId, NewHero};
pub use repository::HeroRepository;
pub use validation::{
    validate_hero_name, validate_level, validate_primary_power, HeroValidationError,
    DEFAULT_LEVEL, MAX_LEVEL, MIN_LEVEL,
};
