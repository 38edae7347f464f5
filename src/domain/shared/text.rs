// src/domain/shared/text.rs
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::validate;

pub const MIN_TITLE_LENGTH: usize = 10;
pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_DESCRIPTION_LENGTH: usize = 300;
pub const MAX_FIRST_NAME_LENGTH: usize = 50;
pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 30;

static USERNAME_FORMAT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[A-Za-z0-9_-]+$").expect("username format pattern"));

/// Content headline, long enough to be descriptive and short enough for
/// display surfaces and search snippets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        const OP: &str = "Title::new";

        let value = value.into().trim().to_string();
        validate::presence("title", &value, OP)?;
        validate::length("title", &value, MIN_TITLE_LENGTH, MAX_TITLE_LENGTH, OP)?;
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Title> for String {
    fn from(value: Title) -> Self {
        value.0
    }
}

/// Explanatory text for entities and meta tags. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        const OP: &str = "Description::new";

        let value = value.into().trim().to_string();
        validate::max_length("description", &value, MAX_DESCRIPTION_LENGTH, OP)?;
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Description> for String {
    fn from(value: Description) -> Self {
        value.0
    }
}

/// Personal given name. Optional, so empty is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FirstName(String);

impl FirstName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        const OP: &str = "FirstName::new";

        let value = value.into().trim().to_string();
        validate::max_length("first name", &value, MAX_FIRST_NAME_LENGTH, OP)?;
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FirstName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Login and public handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        const OP: &str = "Username::new";

        let value = value.into().trim().to_string();
        validate::presence("username", &value, OP)?;
        validate::length(
            "username",
            &value,
            MIN_USERNAME_LENGTH,
            MAX_USERNAME_LENGTH,
            OP,
        )?;
        if !USERNAME_FORMAT_RE.is_match(&value) {
            return Err(DomainError::invalid(
                OP,
                "Username can only contain letters, numbers, underscores, and hyphens.",
            ));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_enforces_length_bounds() {
        assert!(Title::new("Too short").is_err());
        assert!(Title::new("A perfectly fine title").is_ok());
        assert!(Title::new("x".repeat(MAX_TITLE_LENGTH + 1)).is_err());
    }

    #[test]
    fn title_trims_whitespace() {
        let title = Title::new("  Learning French Basics  ").unwrap();
        assert_eq!(title.as_str(), "Learning French Basics");
    }

    #[test]
    fn description_accepts_empty() {
        assert!(Description::new("").is_ok());
        assert!(Description::default().is_empty());
        assert!(Description::new("x".repeat(MAX_DESCRIPTION_LENGTH + 1)).is_err());
    }

    #[test]
    fn username_rejects_invalid_characters() {
        assert!(Username::new("marie_claire-01").is_ok());
        assert!(Username::new("marie claire").is_err());
        assert!(Username::new("mc").is_err());
        assert!(Username::new("café").is_err());
    }
}
