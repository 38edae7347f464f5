// src/domain/subscription/repository.rs
use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::shared::Email;
use crate::domain::subscription::entity::{Subscription, SubscriptionId};

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn insert(&self, subscription: Subscription) -> DomainResult<Subscription>;
    async fn update(&self, subscription: Subscription) -> DomainResult<Subscription>;
    async fn find_by_id(&self, id: &SubscriptionId) -> DomainResult<Option<Subscription>>;
    /// One subscription per address; used to reject duplicate signups.
    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Subscription>>;
    /// Recipients for the next newsletter batch.
    async fn list_active(&self) -> DomainResult<Vec<Subscription>>;
}
