// src/domain/post/status.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Publication state of a post in the editorial workflow.
///
/// Being a closed enum, unknown states cannot reach the transition table:
/// parsing rejects them up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Content in development, not visible to the public.
    Draft,
    /// Live content available to all readers.
    Published,
    /// Historical content removed from active circulation.
    Archived,
    /// Content queued for future publication.
    Scheduled,
}

impl Status {
    pub const ALL: [Self; 4] = [Self::Draft, Self::Published, Self::Archived, Self::Scheduled];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
            Self::Scheduled => "scheduled",
        }
    }

    /// Whether the editorial workflow allows moving to `target`.
    ///
    /// Staying in the current status is always allowed.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        if self == target {
            return true;
        }

        matches!(
            (self, target),
            (Self::Draft, Self::Published | Self::Scheduled)
                | (Self::Published, Self::Draft | Self::Archived)
                | (Self::Scheduled, Self::Draft | Self::Published)
                | (Self::Archived, Self::Published)
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            "scheduled" => Ok(Self::Scheduled),
            other => Err(DomainError::invalid(
                "Status::from_str",
                format!("Invalid status '{other}'."),
            )),
        }
    }
}
