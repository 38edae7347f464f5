// src/domain/post/entity.rs
use chrono::{DateTime, Utc};
use url::Url;

use crate::domain::category::entity::Category;
use crate::domain::clock::Clock;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::status::Status;
use crate::domain::post::value_objects::{PostContent, PostId, SchemaType};
use crate::domain::shared::markdown::strip_markdown;
use crate::domain::shared::{Description, Slug, Title};
use crate::domain::user::permissions::Authorizer;
use crate::domain::user::value_objects::{Role, UserId};

/// Average adult reading speed, in words per minute.
pub const AVERAGE_WORDS_PER_MINUTE: usize = 200;

const CANNOT_PUBLISH: &str = "User cannot publish this post.";
const CANNOT_APPROVE: &str = "User cannot approve this post.";
const CANNOT_SCHEDULE: &str = "User cannot schedule this post.";
const SCHEDULED_DATE_REQUIRED: &str = "Scheduled date is required for scheduled posts.";
const SCHEDULED_DATE_PAST: &str = "Scheduled date must be in the future.";

fn invalid_transition(from: Status, to: Status) -> String {
    format!("Invalid status transition from {from} to {to}.")
}

/// Learning article with content, SEO metadata, and the publishing
/// workflow.
///
/// Workflow operations are copy-on-write: `approve`, `schedule`, and
/// `publish` return a new `Post` and leave `self` untouched, so callers
/// must treat the previous value as stale.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub owner: UserId,
    pub title: Title,
    pub content: PostContent,
    pub featured_image: Option<Url>,
    pub status: Status,
    pub slug: Slug,

    // SEO and social metadata, all optional.
    pub seo_title: Option<Title>,
    pub seo_description: Description,
    pub open_graph_title: Option<Title>,
    pub open_graph_description: Description,
    pub open_graph_image: Option<Url>,
    pub canonical_url: Option<Url>,
    pub schema_type: SchemaType,

    /// When the post was or will be published. `None` unless published or
    /// scheduled.
    pub published_at: Option<DateTime<Utc>>,
    /// Set together with `approved_at` or not at all.
    pub approved_by: Option<UserId>,
    pub approved_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Every post belongs to exactly one category.
    pub category: Category,
}

#[derive(Debug, Clone)]
pub struct NewPostParams {
    pub id: PostId,
    pub owner: UserId,
    pub title: Title,
    pub content: PostContent,
    pub status: Status,
    pub category: Category,
    pub published_at: Option<DateTime<Utc>>,
    pub featured_image: Option<Url>,
    pub seo_title: Option<Title>,
    pub seo_description: Description,
    pub open_graph_title: Option<Title>,
    pub open_graph_description: Description,
    pub open_graph_image: Option<Url>,
    pub canonical_url: Option<Url>,
    pub schema_type: SchemaType,
}

impl NewPostParams {
    #[must_use]
    pub fn new(
        id: PostId,
        owner: UserId,
        title: Title,
        content: PostContent,
        status: Status,
        category: Category,
    ) -> Self {
        Self {
            id,
            owner,
            title,
            content,
            status,
            category,
            published_at: None,
            featured_image: None,
            seo_title: None,
            seo_description: Description::default(),
            open_graph_title: None,
            open_graph_description: Description::default(),
            open_graph_image: None,
            canonical_url: None,
            schema_type: SchemaType::default(),
        }
    }

    #[must_use]
    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    #[must_use]
    pub fn with_featured_image(mut self, featured_image: Url) -> Self {
        self.featured_image = Some(featured_image);
        self
    }

    #[must_use]
    pub fn with_seo_title(mut self, seo_title: Title) -> Self {
        self.seo_title = Some(seo_title);
        self
    }

    #[must_use]
    pub fn with_seo_description(mut self, seo_description: Description) -> Self {
        self.seo_description = seo_description;
        self
    }

    #[must_use]
    pub fn with_open_graph_title(mut self, open_graph_title: Title) -> Self {
        self.open_graph_title = Some(open_graph_title);
        self
    }

    #[must_use]
    pub fn with_open_graph_description(mut self, open_graph_description: Description) -> Self {
        self.open_graph_description = open_graph_description;
        self
    }

    #[must_use]
    pub fn with_open_graph_image(mut self, open_graph_image: Url) -> Self {
        self.open_graph_image = Some(open_graph_image);
        self
    }

    #[must_use]
    pub fn with_canonical_url(mut self, canonical_url: Url) -> Self {
        self.canonical_url = Some(canonical_url);
        self
    }

    #[must_use]
    pub fn with_schema_type(mut self, schema_type: SchemaType) -> Self {
        self.schema_type = schema_type;
        self
    }
}

impl Post {
    /// Creates a validated post, deriving its slug from the title. New
    /// posts always start unapproved.
    pub fn new(params: NewPostParams, clock: &dyn Clock) -> DomainResult<Self> {
        const OP: &str = "Post::new";

        let now = clock.now();
        let slug =
            Slug::generate(params.title.as_str()).map_err(|err| DomainError::wrap(OP, err))?;

        let post = Self {
            id: params.id,
            owner: params.owner,
            title: params.title,
            content: params.content,
            featured_image: params.featured_image,
            status: params.status,
            slug,
            seo_title: params.seo_title,
            seo_description: params.seo_description,
            open_graph_title: params.open_graph_title,
            open_graph_description: params.open_graph_description,
            open_graph_image: params.open_graph_image,
            canonical_url: params.canonical_url,
            schema_type: params.schema_type,
            published_at: params.published_at,
            approved_by: None,
            approved_at: None,
            created_at: now,
            updated_at: now,
            category: params.category,
        };

        post.validate(clock).map_err(|err| DomainError::wrap(OP, err))?;
        Ok(post)
    }

    /// Re-checks the invariants the public fields allow callers to break.
    pub fn validate(&self, clock: &dyn Clock) -> DomainResult<()> {
        const OP: &str = "Post::validate";

        self.slug
            .validate()
            .map_err(|err| DomainError::wrap(OP, err))?;
        self.category
            .validate()
            .map_err(|err| DomainError::wrap(OP, err))?;
        self.validate_workflow_fields(clock.now())
            .map_err(|err| DomainError::wrap(OP, err))
    }

    fn validate_workflow_fields(&self, now: DateTime<Utc>) -> DomainResult<()> {
        const OP: &str = "Post::validate_workflow_fields";

        if self.approved_by.is_some() != self.approved_at.is_some() {
            return Err(DomainError::invalid(
                OP,
                "Approval requires both an approver and an approval time.",
            ));
        }

        if self.status == Status::Scheduled {
            let Some(published_at) = self.published_at else {
                return Err(DomainError::invalid(OP, SCHEDULED_DATE_REQUIRED));
            };
            if published_at <= now {
                return Err(DomainError::invalid(OP, SCHEDULED_DATE_PAST));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_published(&self) -> bool {
        self.status == Status::Published
    }

    #[must_use]
    pub fn is_draft(&self) -> bool {
        self.status == Status::Draft
    }

    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.status == Status::Scheduled
    }

    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.approved_by.is_some() && self.approved_at.is_some()
    }

    /// Whether a scheduled post has reached its publication time. Drives
    /// the external scheduler's decision to flip it to published.
    #[must_use]
    pub fn is_ready_to_publish(&self, clock: &dyn Clock) -> bool {
        if !self.is_scheduled() {
            return false;
        }
        self.published_at
            .is_some_and(|published_at| published_at <= clock.now())
    }

    /// Checks the transition table and the actor's authority for moving to
    /// `target`.
    pub fn can_transition_to(&self, target: Status, actor: &dyn Authorizer) -> DomainResult<()> {
        const OP: &str = "Post::can_transition_to";

        if !self.status.can_transition_to(target) {
            return Err(DomainError::invalid(
                OP,
                invalid_transition(self.status, target),
            ));
        }

        match target {
            Status::Published => {
                // Only approved posts go live.
                if !self.is_approved() {
                    return Err(DomainError::invalid(OP, CANNOT_PUBLISH));
                }
                if !actor.has_any_role(&[Role::Admin, Role::Editor]) {
                    return Err(DomainError::forbidden(OP, CANNOT_PUBLISH));
                }
            }
            Status::Scheduled => {
                if !actor.has_any_role(&[Role::Admin, Role::Editor]) {
                    return Err(DomainError::forbidden(OP, CANNOT_SCHEDULE));
                }
            }
            Status::Archived => {
                if !actor.has_any_role(&[Role::Admin, Role::Editor]) {
                    return Err(DomainError::forbidden(
                        OP,
                        invalid_transition(self.status, target),
                    ));
                }
            }
            Status::Draft => {
                // Pulling a live post back to draft is an editorial call.
                if self.status == Status::Published
                    && !actor.has_any_role(&[Role::Admin, Role::Editor])
                {
                    return Err(DomainError::forbidden(
                        OP,
                        invalid_transition(self.status, target),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Records editorial approval without changing the status.
    ///
    /// Approvers need an editorial role, and may not approve their own
    /// post unless they are an admin.
    pub fn approve(&self, approver: &dyn Authorizer, clock: &dyn Clock) -> DomainResult<Self> {
        const OP: &str = "Post::approve";

        if !approver.has_any_role(&[Role::Admin, Role::Editor]) {
            return Err(DomainError::forbidden(OP, CANNOT_APPROVE));
        }

        if self.owner == *approver.id() && !approver.has_role(Role::Admin) {
            return Err(DomainError::forbidden(OP, CANNOT_APPROVE));
        }

        let now = clock.now();
        let mut approved = self.clone();
        approved.approved_by = Some(approver.id().clone());
        approved.approved_at = Some(now);
        approved.updated_at = now;
        Ok(approved)
    }

    /// Queues the post for publication at `publish_at`, which must be
    /// strictly in the future.
    pub fn schedule(
        &self,
        publish_at: DateTime<Utc>,
        actor: &dyn Authorizer,
        clock: &dyn Clock,
    ) -> DomainResult<Self> {
        const OP: &str = "Post::schedule";

        self.can_transition_to(Status::Scheduled, actor)
            .map_err(|err| DomainError::wrap(OP, err))?;

        if publish_at <= clock.now() {
            return Err(DomainError::invalid(OP, SCHEDULED_DATE_PAST));
        }

        let mut scheduled = self.clone();
        scheduled.status = Status::Scheduled;
        scheduled.published_at = Some(publish_at);
        scheduled.updated_at = clock.now();
        Ok(scheduled)
    }

    /// Publishes the post immediately.
    pub fn publish(&self, actor: &dyn Authorizer, clock: &dyn Clock) -> DomainResult<Self> {
        const OP: &str = "Post::publish";

        self.can_transition_to(Status::Published, actor)
            .map_err(|err| DomainError::wrap(OP, err))?;

        let now = clock.now();
        let mut published = self.clone();
        published.status = Status::Published;
        published.published_at = Some(now);
        published.updated_at = now;
        Ok(published)
    }

    /// Word count over markdown-stripped content.
    #[must_use]
    pub fn word_count(&self) -> usize {
        strip_markdown(self.content.as_str())
            .split_whitespace()
            .count()
    }

    /// Reading time in minutes at an average adult pace, never below one.
    #[must_use]
    pub fn estimated_reading_time(&self) -> usize {
        self.word_count().div_ceil(AVERAGE_WORDS_PER_MINUTE).max(1)
    }

    /// Plain-text preview truncated near `max_length` characters,
    /// preferring a word boundary in the second half of the window.
    #[must_use]
    pub fn excerpt(&self, max_length: usize) -> String {
        let content = strip_markdown(self.content.as_str());
        if content.chars().count() <= max_length {
            return content;
        }

        let mut truncated: String = content.chars().take(max_length).collect();
        if let Some(last_space) = truncated.rfind(' ') {
            if last_space > max_length / 2 {
                truncated.truncate(last_space);
            }
        }
        truncated.push_str("...");
        truncated
    }

    #[must_use]
    pub fn has_featured_image(&self) -> bool {
        self.featured_image.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::entity::NewCategoryParams;
    use crate::domain::category::value_objects::{CategoryId, CategoryName};
    use crate::domain::errors::ErrorCode;
    use chrono::{Duration, TimeZone};

    struct TestClock(DateTime<Utc>);

    impl Clock for TestClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn test_clock() -> TestClock {
        TestClock(Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap())
    }

    fn category(clock: &dyn Clock) -> Category {
        Category::new(
            NewCategoryParams::new(
                CategoryId::new("c1").unwrap(),
                CategoryName::new("A1").unwrap(),
                UserId::new("teacher-1").unwrap(),
            ),
            clock,
        )
        .unwrap()
    }

    fn params_with_content(content: &str, clock: &dyn Clock) -> NewPostParams {
        NewPostParams::new(
            PostId::new("p1").unwrap(),
            UserId::new("author-1").unwrap(),
            Title::new("Dix expressions pour parler du sport").unwrap(),
            PostContent::new(content).unwrap(),
            Status::Draft,
            category(clock),
        )
    }

    fn params(clock: &dyn Clock) -> NewPostParams {
        params_with_content(
            &"Le sport occupe une place importante dans la vie quotidienne. ".repeat(8),
            clock,
        )
    }

    #[test]
    fn new_derives_slug_and_starts_unapproved() {
        let clock = test_clock();
        let post = Post::new(params(&clock), &clock).unwrap();

        assert_eq!(post.slug.as_str(), "dix-expressions-pour-parler-du-sport");
        assert!(!post.is_approved());
        assert!(post.is_draft());
        assert_eq!(post.created_at, clock.now());
        assert_eq!(post.updated_at, clock.now());
    }

    #[test]
    fn scheduled_posts_must_carry_a_future_date() {
        let clock = test_clock();
        let mut p = params(&clock);
        p.status = Status::Scheduled;

        let missing = Post::new(p.clone(), &clock).unwrap_err();
        assert_eq!(missing.code(), ErrorCode::Invalid);

        let past = p
            .clone()
            .with_published_at(clock.now() - Duration::hours(1));
        assert_eq!(Post::new(past, &clock).unwrap_err().code(), ErrorCode::Invalid);

        let present = p.clone().with_published_at(clock.now());
        assert_eq!(
            Post::new(present, &clock).unwrap_err().code(),
            ErrorCode::Invalid
        );

        let future = p.with_published_at(clock.now() + Duration::hours(1));
        assert!(Post::new(future, &clock).is_ok());
    }

    #[test]
    fn approval_fields_come_jointly_or_not_at_all() {
        let clock = test_clock();
        let mut post = Post::new(params(&clock), &clock).unwrap();

        post.approved_by = Some(UserId::new("editor-1").unwrap());
        let err = post.validate(&clock).unwrap_err();
        assert_eq!(err.code(), ErrorCode::Invalid);

        post.approved_at = Some(clock.now());
        assert!(post.validate(&clock).is_ok());
    }

    #[test]
    fn word_count_ignores_markdown_syntax() {
        let clock = test_clock();
        let content = format!(
            "# Leçon du jour\n\n{}",
            "Le **sport** est une passion nationale en France. ".repeat(8)
        );
        let post = Post::new(params_with_content(&content, &clock), &clock).unwrap();

        // The header line is dropped; each sentence contributes 8 words.
        assert_eq!(post.word_count(), 64);
    }

    #[test]
    fn reading_time_rounds_up_and_never_drops_below_one_minute() {
        let clock = test_clock();

        let short = Post::new(params(&clock), &clock).unwrap();
        assert_eq!(short.estimated_reading_time(), 1);

        let long_content = "Le sport est une passion nationale en France. ".repeat(30);
        let long = Post::new(params_with_content(&long_content, &clock), &clock).unwrap();
        assert_eq!(long.word_count(), 240);
        assert_eq!(long.estimated_reading_time(), 2);
    }

    #[test]
    fn excerpt_truncates_at_a_word_boundary() {
        let clock = test_clock();
        let post = Post::new(params(&clock), &clock).unwrap();

        let excerpt = post.excerpt(50);
        assert!(excerpt.ends_with("..."));
        assert!(excerpt.chars().count() <= 53);
        // The cut lands between words, not inside one.
        assert!(!excerpt.trim_end_matches("...").ends_with(' '));

        let full = post.excerpt(20_000);
        assert!(!full.ends_with("..."));
    }
}
