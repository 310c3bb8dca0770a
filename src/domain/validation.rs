//! Validation helpers shared by teams and heroes

use super::DomainError;

/// Upper bound for names and short text fields, in characters
pub const MAX_NAME_LENGTH: usize = 255;

/// Ids are system-assigned positive integers
pub fn validate_id(id: i64) -> Result<(), DomainError> {
    if id <= 0 {
        return Err(DomainError::validation(
            "id",
            "El ID debe ser un número positivo",
        ));
    }

    Ok(())
}

/// Trim optional free text; blank input is stored as absent
pub fn normalize_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

pub fn exceeds_max_length(value: &str) -> bool {
    value.chars().count() > MAX_NAME_LENGTH
}
