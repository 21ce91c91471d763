//! Field-level checks shared by the entity modules.

use crate::errors::ModelError;

/// Require a present, non-blank value. Returns the value untrimmed.
pub fn require_text<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, ModelError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(ModelError::Validation(format!("{field} must not be blank"))),
        None => Err(ModelError::Validation(format!("{field} is required"))),
    }
}

/// Reject values longer than `max` characters.
pub fn max_chars(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.chars().count() > max {
        return Err(ModelError::Validation(format!("{field} must be at most {max} characters")));
    }
    Ok(())
}

/// `true` when a patch value should overwrite the stored one.
pub fn is_supplied(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
