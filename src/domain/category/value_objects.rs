// src/domain/category/value_objects.rs
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::validate;

pub const MIN_CATEGORY_NAME_LENGTH: usize = 1;
pub const MAX_CATEGORY_NAME_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        const OP: &str = "CategoryId::new";

        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::invalid(OP, "Missing category id."));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CategoryId> for String {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

/// User-facing category title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        const OP: &str = "CategoryName::new";

        let value = value.into().trim().to_string();
        validate::presence("category name", &value, OP)?;
        validate::length(
            "category name",
            &value,
            MIN_CATEGORY_NAME_LENGTH,
            MAX_CATEGORY_NAME_LENGTH,
            OP,
        )?;
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CategoryName> for String {
    fn from(value: CategoryName) -> Self {
        value.0
    }
}
