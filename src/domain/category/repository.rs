// src/domain/category/repository.rs
use async_trait::async_trait;

use crate::domain::category::entity::Category;
use crate::domain::category::path::CategoryPath;
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::shared::Slug;

/// Read access to the category catalog and hierarchy.
#[async_trait]
pub trait CategoryReadRepository: Send + Sync {
    async fn find_by_id(&self, id: &CategoryId) -> DomainResult<Option<Category>>;
    /// Top-level categories for main navigation.
    async fn list_roots(&self) -> DomainResult<Vec<Category>>;
    /// Direct subcategories of the given category.
    async fn list_children(&self, id: &CategoryId) -> DomainResult<Vec<Category>>;
}

/// Path construction and URL routing against the stored hierarchy.
#[async_trait]
pub trait CategoryPathRepository: Send + Sync {
    /// Returns the root-to-leaf chain ending at the given category.
    async fn build_path(&self, id: &CategoryId) -> DomainResult<CategoryPath>;

    /// Resolves decoded URL segments to the category they address.
    async fn find_by_path(&self, segments: &[String]) -> DomainResult<Option<Category>>;

    /// Checks slug uniqueness among siblings under the same parent;
    /// `None` means the root level.
    async fn is_slug_unique_in_parent(
        &self,
        slug: &Slug,
        parent_id: Option<&CategoryId>,
    ) -> DomainResult<bool>;
}
