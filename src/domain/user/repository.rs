// src/domain/user/repository.rs
use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::shared::{Email, Username};
use crate::domain::user::entity::User;
use crate::domain::user::value_objects::UserId;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: User) -> DomainResult<User>;
    async fn update(&self, user: User) -> DomainResult<User>;
    async fn find_by_id(&self, id: &UserId) -> DomainResult<Option<User>>;
    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;
    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;
}
