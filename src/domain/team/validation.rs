//! Team validation

use thiserror::Error;

use crate::domain::validation::exceeds_max_length;
use crate::domain::DomainError;

/// Errors that can occur during team validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamValidationError {
    #[error("El nombre del team es requerido y no puede estar vacío")]
    EmptyName,

    #[error("El nombre del team no puede exceder 255 caracteres")]
    NameTooLong,

    #[error("Ya existe un team con el nombre '{0}'")]
    DuplicateName(String),

    #[error("Ya existe otro team con el nombre '{0}'")]
    NameTakenByOther(String),

    #[error("El nombre del team es requerido para la búsqueda")]
    MissingSearchName,

    #[error("Debe proporcionar al menos un campo para actualizar (nombre o descripcion)")]
    NothingToUpdate,
}

impl TeamValidationError {
    /// Response field the error is reported under
    pub fn field(&self) -> &'static str {
        match self {
            Self::NothingToUpdate => "detail",
            _ => "nombre",
        }
    }
}

impl From<TeamValidationError> for DomainError {
    fn from(err: TeamValidationError) -> Self {
        DomainError::validation(err.field(), err.to_string())
    }
}

/// Validate a team name, returning it trimmed
pub fn validate_team_name(name: &str) -> Result<String, TeamValidationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(TeamValidationError::EmptyName);
    }

    if exceeds_max_length(trimmed) {
        return Err(TeamValidationError::NameTooLong);
    }

    Ok(trimmed.to_string())
}
