// src/domain/post/value_objects.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::validate;

pub const MIN_POST_CONTENT_LENGTH: usize = 300;
pub const MAX_POST_CONTENT_LENGTH: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        const OP: &str = "PostId::new";

        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::invalid(OP, "Missing post id."));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PostId> for String {
    fn from(value: PostId) -> Self {
        value.0
    }
}

/// Main body text of a post.
///
/// The lower bound keeps articles substantial enough to teach something;
/// the upper bound keeps them digestible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        const OP: &str = "PostContent::new";

        let value = value.into().trim().to_string();
        validate::presence("post content", &value, OP)?;
        validate::min_length("post content", &value, MIN_POST_CONTENT_LENGTH, OP)?;
        validate::max_length("post content", &value, MAX_POST_CONTENT_LENGTH, OP)?;
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PostContent> for String {
    fn from(value: PostContent) -> Self {
        value.0
    }
}

/// Schema.org markup type for structured data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaType {
    Article,
    BlogPosting,
    #[default]
    EducationalContent,
    LearningResource,
    HowTo,
}

impl SchemaType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Article => "Article",
            Self::BlogPosting => "BlogPosting",
            Self::EducationalContent => "EducationalContent",
            Self::LearningResource => "LearningResource",
            Self::HowTo => "HowTo",
        }
    }

    #[must_use]
    pub const fn is_educational(self) -> bool {
        matches!(self, Self::EducationalContent | Self::LearningResource)
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Article" => Ok(Self::Article),
            "BlogPosting" => Ok(Self::BlogPosting),
            "EducationalContent" => Ok(Self::EducationalContent),
            "LearningResource" => Ok(Self::LearningResource),
            "HowTo" => Ok(Self::HowTo),
            other => Err(DomainError::invalid(
                "SchemaType::from_str",
                format!("Invalid schema type '{other}'."),
            )),
        }
    }
}
