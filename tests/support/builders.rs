// tests/support/builders.rs
use chrono::{DateTime, Utc};

use glossa_core::domain::category::{Category, CategoryId, CategoryName};
use glossa_core::domain::post::{Post, PostContent, PostId, SchemaType, Status};
use glossa_core::domain::shared::{Description, Email, FirstName, Slug, Title, Username};
use glossa_core::domain::user::{Role, User, UserId};

use super::mocks::time::fixed_now;

pub fn sample_content() -> String {
    "Lire en français demande de la patience et un peu de méthode. ".repeat(8)
}

pub struct CategoryBuilder {
    id: String,
    name: String,
    parent_id: Option<String>,
}

impl CategoryBuilder {
    pub fn new() -> Self {
        Self {
            id: "cat-1".into(),
            name: "A1".into(),
            parent_id: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn build(self) -> Category {
        Category {
            id: CategoryId::new(self.id).unwrap(),
            name: CategoryName::new(&self.name).unwrap(),
            slug: Slug::generate(&self.name).unwrap(),
            description: Description::default(),
            parent_id: self.parent_id.map(|p| CategoryId::new(p).unwrap()),
            created_by: UserId::new("teacher-1").unwrap(),
            created_at: fixed_now(),
        }
    }
}

pub struct PostBuilder {
    id: String,
    owner: String,
    title: String,
    status: Status,
    approved: bool,
    published_at: Option<DateTime<Utc>>,
}

impl PostBuilder {
    pub fn new() -> Self {
        Self {
            id: "post-1".into(),
            owner: "author-1".into(),
            title: "Reading Comprehension for Beginners".into(),
            status: Status::Draft,
            approved: false,
            published_at: None,
        }
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn approved(mut self) -> Self {
        self.approved = true;
        self
    }

    pub fn published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    pub fn build(self) -> Post {
        let (approved_by, approved_at) = if self.approved {
            (Some(UserId::new("reviewer-1").unwrap()), Some(fixed_now()))
        } else {
            (None, None)
        };

        Post {
            id: PostId::new(self.id).unwrap(),
            owner: UserId::new(self.owner).unwrap(),
            title: Title::new(&self.title).unwrap(),
            content: PostContent::new(sample_content()).unwrap(),
            featured_image: None,
            status: self.status,
            slug: Slug::generate(&self.title).unwrap(),
            seo_title: None,
            seo_description: Description::default(),
            open_graph_title: None,
            open_graph_description: Description::default(),
            open_graph_image: None,
            canonical_url: None,
            schema_type: SchemaType::default(),
            published_at: self.published_at,
            approved_by,
            approved_at,
            created_at: fixed_now(),
            updated_at: fixed_now(),
            category: CategoryBuilder::new().build(),
        }
    }
}

pub struct UserBuilder {
    id: String,
    username: String,
    roles: Vec<Role>,
}

impl UserBuilder {
    pub fn new() -> Self {
        Self {
            id: "user-1".into(),
            username: "user_one".into(),
            roles: vec![Role::Author],
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn roles(mut self, roles: &[Role]) -> Self {
        self.roles = roles.to_vec();
        self
    }

    pub fn build(self) -> User {
        User {
            id: UserId::new(self.id).unwrap(),
            username: Username::new(&self.username).unwrap(),
            email: Email::new(format!("{}@example.com", self.username)).unwrap(),
            roles: self.roles,
            first_name: FirstName::default(),
            description: Description::default(),
            picture_url: None,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}
