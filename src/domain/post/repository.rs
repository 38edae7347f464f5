// src/domain/post/repository.rs
use async_trait::async_trait;

use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::Post;
use crate::domain::post::value_objects::PostId;
use crate::domain::shared::Slug;

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: Post) -> DomainResult<Post>;
    async fn update(&self, post: Post) -> DomainResult<Post>;
    async fn delete(&self, id: &PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: &PostId) -> DomainResult<Option<Post>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>>;
    async fn list_by_category(&self, category_id: &CategoryId) -> DomainResult<Vec<Post>>;
}

/// Time-based publishing support for background jobs.
#[async_trait]
pub trait PostScheduleRepository: Send + Sync {
    /// Posts queued for future publication, ready or not; the caller
    /// filters with [`Post::is_ready_to_publish`].
    async fn list_scheduled(&self) -> DomainResult<Vec<Post>>;
}

/// Data integrity checks for content creation.
#[async_trait]
pub trait PostValidationRepository: Send + Sync {
    /// Prevents URL conflicts when creating or renaming posts.
    async fn is_slug_unique(
        &self,
        slug: &Slug,
        exclude_id: Option<&PostId>,
    ) -> DomainResult<bool>;
}
