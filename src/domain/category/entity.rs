// src/domain/category/entity.rs
use chrono::{DateTime, Utc};

use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::clock::Clock;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::shared::{Description, Slug};
use crate::domain::user::UserId;

/// Hierarchical content organization unit.
///
/// Categories structure learning material into at most three levels
/// (level, skill, topic). A category is an immutable snapshot; an update
/// produces a new validated instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
    pub description: Description,
    /// `None` for root categories.
    pub parent_id: Option<CategoryId>,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCategoryParams {
    pub id: CategoryId,
    pub name: CategoryName,
    pub created_by: UserId,
    pub description: Description,
    pub parent_id: Option<CategoryId>,
}

impl NewCategoryParams {
    #[must_use]
    pub fn new(id: CategoryId, name: CategoryName, created_by: UserId) -> Self {
        Self {
            id,
            name,
            created_by,
            description: Description::default(),
            parent_id: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: Description) -> Self {
        self.description = description;
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent_id: CategoryId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

impl Category {
    /// Creates a validated category, deriving its slug from the name.
    pub fn new(params: NewCategoryParams, clock: &dyn Clock) -> DomainResult<Self> {
        const OP: &str = "Category::new";

        let slug =
            Slug::generate(params.name.as_str()).map_err(|err| DomainError::wrap(OP, err))?;

        let category = Self {
            id: params.id,
            name: params.name,
            slug,
            description: params.description,
            parent_id: params.parent_id,
            created_by: params.created_by,
            created_at: clock.now(),
        };

        category.validate().map_err(|err| DomainError::wrap(OP, err))?;
        Ok(category)
    }

    /// Re-checks the invariants the public fields allow callers to break.
    pub fn validate(&self) -> DomainResult<()> {
        const OP: &str = "Category::validate";

        self.slug
            .validate()
            .map_err(|err| DomainError::wrap(OP, err))?;

        if self.parent_id.as_ref() == Some(&self.id) {
            return Err(DomainError::invalid(
                OP,
                "Category cannot be its own parent.",
            ));
        }

        Ok(())
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    #[must_use]
    pub fn has_parent(&self) -> bool {
        self.parent_id.is_some()
    }
}
