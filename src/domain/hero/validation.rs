//! Hero validation

use thiserror::Error;

use crate::domain::validation::exceeds_max_length;
use crate::domain::DomainError;

pub const MIN_LEVEL: i32 = 1;
pub const MAX_LEVEL: i32 = 100;
pub const DEFAULT_LEVEL: i32 = 1;

/// Errors that can occur during hero validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HeroValidationError {
    #[error("El nombre del héroe es requerido y no puede estar vacío")]
    EmptyName,

    #[error("El nombre no puede exceder 255 caracteres")]
    NameTooLong,

    #[error("Ya existe un héroe con el nombre '{0}'")]
    DuplicateName(String),

    #[error("Ya existe otro héroe con el nombre '{0}'")]
    NameTakenByOther(String),

    #[error("El nombre del héroe es requerido para la búsqueda")]
    MissingSearchName,

    #[error("No existe un equipo con ID {0}")]
    UnknownTeam(i64),

    #[error("El nivel debe estar entre 1 y 100")]
    LevelOutOfRange,

    #[error("El poder principal no puede exceder 255 caracteres")]
    PrimaryPowerTooLong,
}

impl HeroValidationError {
    /// Response field the error is reported under
    pub fn field(&self) -> &'static str {
        match self {
            Self::UnknownTeam(_) => "team_id",
            Self::LevelOutOfRange => "nivel",
            Self::PrimaryPowerTooLong => "poder_principal",
            _ => "nombre",
        }
    }
}

impl From<HeroValidationError> for DomainError {
    fn from(err: HeroValidationError) -> Self {
        DomainError::validation(err.field(), err.to_string())
    }
}

/// Validate a hero name, returning it trimmed
pub fn validate_hero_name(name: &str) -> Result<String, HeroValidationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(HeroValidationError::EmptyName);
    }

    if exceeds_max_length(trimmed) {
        return Err(HeroValidationError::NameTooLong);
    }

    Ok(trimmed.to_string())
}

pub fn validate_level(level: i32) -> Result<i32, HeroValidationError> {
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        return Err(HeroValidationError::LevelOutOfRange);
    }

    Ok(level)
}

/// Validate a primary power, returning it trimmed
pub fn validate_primary_power(power: &str) -> Result<String, HeroValidationError> {
    let trimmed = power.trim();

    if exceeds_max_length(trimmed) {
        return Err(HeroValidationError::PrimaryPowerTooLong);
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_hero_name() {
        assert_eq!(validate_hero_name(" Superman ").unwrap(), "Superman");
    }

    #[test]
    fn test_invalid_hero_name() {
        assert_eq!(validate_hero_name("\t "), Err(HeroValidationError::EmptyName));
        assert_eq!(
            validate_hero_name(&"x".repeat(256)),
            Err(HeroValidationError::NameTooLong)
        );
    }

    #[test]
    fn test_level_bounds() {
        for level in MIN_LEVEL..=MAX_LEVEL {
            assert_eq!(validate_level(level), Ok(level));
        }

        for level in [i32::MIN, -1, 0, 101, 150, i32::MAX] {
            assert_eq!(validate_level(level), Err(HeroValidationError::LevelOutOfRange));
        }
    }

    #[test]
    fn test_primary_power() {
        assert_eq!(validate_primary_power(" Vuelo ").unwrap(), "Vuelo");
        assert_eq!(
            validate_primary_power(&"p".repeat(256)),
            Err(HeroValidationError::PrimaryPowerTooLong)
        );
    }

    #[test]
    fn test_error_fields() {
        let err: DomainError = HeroValidationError::UnknownTeam(999).into();
        assert_eq!(
            err.field_messages("team_id"),
            Some(&["No existe un equipo con ID 999".to_string()][..])
        );

        let err: DomainError = HeroValidationError::LevelOutOfRange.into();
        assert_eq!(
            err.field_messages("nivel"),
            Some(&["El nivel debe estar entre 1 y 100".to_string()][..])
        );

        assert_eq!(HeroValidationError::PrimaryPowerTooLong.field(), "poder_principal");
        assert_eq!(HeroValidationError::EmptyName.field(), "nombre");
    }
}
