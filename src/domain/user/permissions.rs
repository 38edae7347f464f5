// src/domain/user/permissions.rs
use crate::domain::post::entity::Post;
use crate::domain::post::status::Status;
use crate::domain::user::entity::User;
use crate::domain::user::value_objects::{Role, UserId};

/// Capability set a caller must expose to act on the publishing workflow.
///
/// The workflow performs no identity lookups of its own; anything
/// satisfying this trait (a `User`, a test double) can authorize
/// transitions.
pub trait Authorizer: Send + Sync {
    fn id(&self) -> &UserId;

    fn has_role(&self, role: Role) -> bool;

    fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|role| self.has_role(*role))
    }
}

impl Authorizer for User {
    fn id(&self) -> &UserId {
        &self.id
    }

    fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

impl User {
    /// Authors, editors, and admins can create content.
    #[must_use]
    pub fn can_create_post(&self) -> bool {
        self.has_any_role(&[Role::Admin, Role::Editor, Role::Author])
    }

    /// Published content is public; anything else needs ownership or an
    /// editorial role.
    #[must_use]
    pub fn can_view_post(&self, post: &Post) -> bool {
        if post.status == Status::Published {
            return true;
        }
        post.owner == self.id || self.has_any_role(&[Role::Admin, Role::Editor])
    }

    /// Admins and editors edit any post; authors edit their own.
    #[must_use]
    pub fn can_edit_post(&self, post: &Post) -> bool {
        if self.has_any_role(&[Role::Admin, Role::Editor]) {
            return true;
        }
        post.owner == self.id && self.has_role(Role::Author)
    }

    /// Admins delete anything; owners may only clean up their drafts.
    #[must_use]
    pub fn can_delete_post(&self, post: &Post) -> bool {
        if self.has_role(Role::Admin) {
            return true;
        }
        post.owner == self.id && post.status == Status::Draft
    }

    #[must_use]
    pub fn can_publish_post(&self, post: &Post) -> bool {
        if self.has_any_role(&[Role::Admin, Role::Editor]) {
            return true;
        }
        post.owner == self.id && self.has_role(Role::Author)
    }

    #[must_use]
    pub fn can_schedule_post(&self, post: &Post) -> bool {
        self.can_publish_post(post)
    }

    /// Archiving stays with editorial roles to prevent content loss.
    #[must_use]
    pub fn can_archive_post(&self, _post: &Post) -> bool {
        self.has_any_role(&[Role::Admin, Role::Editor])
    }

    #[must_use]
    pub fn can_change_post_status(&self, post: &Post, target: Status) -> bool {
        match target {
            Status::Draft => self.can_edit_post(post),
            Status::Published => self.can_publish_post(post),
            Status::Scheduled => self.can_schedule_post(post),
            Status::Archived => self.can_archive_post(post),
        }
    }

    #[must_use]
    pub fn can_manage_categories(&self) -> bool {
        self.has_any_role(&[Role::Admin, Role::Editor])
    }

    #[must_use]
    pub fn can_manage_tags(&self) -> bool {
        self.has_any_role(&[Role::Admin, Role::Editor])
    }
}
