// src/domain/user/entity.rs
use chrono::{DateTime, Utc};
use url::Url;

use crate::domain::clock::Clock;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::shared::{Description, Email, FirstName, Username};
use crate::domain::user::value_objects::{Role, UserId};

/// Authenticated person with role-based permissions.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Email,
    /// At least one role; most users carry exactly one.
    pub roles: Vec<Role>,
    pub first_name: FirstName,
    pub description: Description,
    pub picture_url: Option<Url>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUserParams {
    pub id: UserId,
    pub username: Username,
    pub email: Email,
    pub roles: Vec<Role>,
    pub first_name: FirstName,
    pub description: Description,
    pub picture_url: Option<Url>,
}

impl NewUserParams {
    #[must_use]
    pub fn new(id: UserId, username: Username, email: Email, roles: Vec<Role>) -> Self {
        Self {
            id,
            username,
            email,
            roles,
            first_name: FirstName::default(),
            description: Description::default(),
            picture_url: None,
        }
    }

    #[must_use]
    pub fn with_first_name(mut self, first_name: FirstName) -> Self {
        self.first_name = first_name;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: Description) -> Self {
        self.description = description;
        self
    }

    #[must_use]
    pub fn with_picture_url(mut self, picture_url: Url) -> Self {
        self.picture_url = Some(picture_url);
        self
    }
}

impl User {
    pub fn new(params: NewUserParams, clock: &dyn Clock) -> DomainResult<Self> {
        const OP: &str = "User::new";

        let now = clock.now();
        let user = Self {
            id: params.id,
            username: params.username,
            email: params.email,
            roles: params.roles,
            first_name: params.first_name,
            description: params.description,
            picture_url: params.picture_url,
            created_at: now,
            updated_at: now,
        };

        user.validate().map_err(|err| DomainError::wrap(OP, err))?;
        Ok(user)
    }

    pub fn validate(&self) -> DomainResult<()> {
        const OP: &str = "User::validate";

        if self.roles.is_empty() {
            return Err(DomainError::invalid(
                OP,
                "Missing roles. One role should be set.",
            ));
        }
        Ok(())
    }

    /// Name shown in bylines and greetings: first name when present,
    /// username otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.first_name.is_empty() {
            self.username.as_str()
        } else {
            self.first_name.as_str()
        }
    }
}
