// tests/support/mocks/categories.rs
use async_trait::async_trait;

use glossa_core::domain::category::{
    Category, CategoryId, CategoryPath, CategoryPathRepository,
};
use glossa_core::domain::errors::{DomainError, DomainResult};
use glossa_core::domain::shared::Slug;

/// Category hierarchy held in memory, linked through `parent_id`.
pub struct InMemoryCategoryRepo {
    categories: Vec<Category>,
}

impl InMemoryCategoryRepo {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    fn get(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| &category.id == id)
    }
}

#[async_trait]
impl CategoryPathRepository for InMemoryCategoryRepo {
    async fn build_path(&self, id: &CategoryId) -> DomainResult<CategoryPath> {
        const OP: &str = "InMemoryCategoryRepo::build_path";

        let mut current = self
            .get(id)
            .ok_or_else(|| DomainError::not_found(OP, format!("Category '{id}' not found.")))?;

        let mut chain = vec![current.clone()];
        while let Some(parent_id) = &current.parent_id {
            current = self.get(parent_id).ok_or_else(|| {
                DomainError::internal(OP, format!("Dangling parent '{parent_id}'."))
            })?;
            chain.push(current.clone());
        }

        chain.reverse();
        Ok(CategoryPath::new(chain))
    }

    async fn find_by_path(&self, segments: &[String]) -> DomainResult<Option<Category>> {
        let mut parent: Option<CategoryId> = None;
        let mut found: Option<Category> = None;

        for segment in segments {
            match self.categories.iter().find(|category| {
                category.slug.as_str() == segment.as_str() && category.parent_id == parent
            }) {
                Some(category) => {
                    parent = Some(category.id.clone());
                    found = Some(category.clone());
                }
                None => return Ok(None),
            }
        }

        Ok(found)
    }

    async fn is_slug_unique_in_parent(
        &self,
        slug: &Slug,
        parent_id: Option<&CategoryId>,
    ) -> DomainResult<bool> {
        Ok(!self.categories.iter().any(|category| {
            category.slug == *slug && category.parent_id.as_ref() == parent_id
        }))
    }
}
