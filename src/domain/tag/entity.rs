// src/domain/tag/entity.rs
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::clock::Clock;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::value_objects::UserId;
use crate::domain::validate;

pub const MIN_TAG_NAME_LENGTH: usize = 1;
pub const MAX_TAG_NAME_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(String);

impl TagId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        const OP: &str = "TagId::new";

        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::invalid(OP, "Missing tag id."));
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

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Descriptive label for cross-cutting content discovery, outside the
/// category hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagName(String);

impl TagName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        const OP: &str = "TagName::new";

        let value = value.into().trim().to_string();
        validate::presence("tag name", &value, OP)?;
        validate::length(
            "tag name",
            &value,
            MIN_TAG_NAME_LENGTH,
            MAX_TAG_NAME_LENGTH,
            OP,
        )?;
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: TagName,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

impl Tag {
    /// The id, name, and creator are validated on construction, so there
    /// is nothing left to fail here.
    #[must_use]
    pub fn new(id: TagId, name: TagName, created_by: UserId, clock: &dyn Clock) -> Self {
        Self {
            id,
            name,
            created_by,
            created_at: clock.now(),
        }
    }
}
