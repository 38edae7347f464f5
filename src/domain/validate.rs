// src/domain/validate.rs
//! Field validators shared by value-object constructors.
//!
//! Lengths are counted in characters, not bytes, so accented content is
//! measured the way editors see it.

use crate::domain::errors::{DomainError, DomainResult};

pub(crate) fn presence(field: &str, value: &str, operation: &'static str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid(operation, format!("Missing {field}.")));
    }
    Ok(())
}

pub(crate) fn length(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
    operation: &'static str,
) -> DomainResult<()> {
    let count = value.chars().count();
    if count < min || count > max {
        return Err(DomainError::invalid(
            operation,
            format!("{field} must be between {min} and {max} characters."),
        ));
    }
    Ok(())
}

pub(crate) fn min_length(
    field: &str,
    value: &str,
    min: usize,
    operation: &'static str,
) -> DomainResult<()> {
    if value.chars().count() < min {
        return Err(DomainError::invalid(
            operation,
            format!("{field} must be greater than {min} characters."),
        ));
    }
    Ok(())
}

pub(crate) fn max_length(
    field: &str,
    value: &str,
    max: usize,
    operation: &'static str,
) -> DomainResult<()> {
    if value.chars().count() > max {
        return Err(DomainError::invalid(
            operation,
            format!("{field} must be less than {max} characters."),
        ));
    }
    Ok(())
}
