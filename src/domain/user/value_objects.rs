// src/domain/user/value_objects.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        const OP: &str = "UserId::new";

        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::invalid(OP, "Missing user id."));
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

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// Permission level for system access and content management.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full system access and user management.
    Admin,
    /// Content management and publication control.
    Editor,
    /// Content creation and own-post management.
    Author,
    /// Basic access for content consumption.
    Subscriber,
    /// Anonymous read-only access.
    Visitor,
    /// Automated system access for integrations.
    Machine,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Author => "author",
            Self::Subscriber => "subscriber",
            Self::Visitor => "visitor",
            Self::Machine => "machine",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "editor" => Ok(Self::Editor),
            "author" => Ok(Self::Author),
            "subscriber" => Ok(Self::Subscriber),
            "visitor" => Ok(Self::Visitor),
            "machine" => Ok(Self::Machine),
            other => Err(DomainError::invalid(
                "Role::from_str",
                format!("Unknown role '{other}'."),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_strings() {
        for role in [
            Role::Admin,
            Role::Editor,
            Role::Author,
            Role::Subscriber,
            Role::Visitor,
            Role::Machine,
        ] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn user_id_rejects_blank_values() {
        assert!(UserId::new("").is_err());
        assert!(UserId::new("  ").is_err());
        assert_eq!(UserId::new(" u1 ").unwrap().as_str(), "u1");
    }
}
