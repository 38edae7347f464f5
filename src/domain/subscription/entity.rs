// src/domain/subscription/entity.rs
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::clock::Clock;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::shared::{Email, FirstName};
use crate::domain::subscription::status::SubscriptionStatus;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(String);

impl SubscriptionId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        const OP: &str = "SubscriptionId::new";

        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::invalid(OP, "Missing subscription id."));
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

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Newsletter enrollment with unsubscribe, resubscribe, and bounce
/// handling. Mutations are copy-on-write like the post workflow.
#[derive(Debug, Clone)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub first_name: FirstName,
    pub email: Email,
    pub status: SubscriptionStatus,
    /// Quick check mirroring `status == Active`.
    pub is_active: bool,
    pub subscribed_at: DateTime<Utc>,
    /// `None` while the subscription has never been cancelled.
    pub unsubscribed_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSubscriptionParams {
    pub id: SubscriptionId,
    pub first_name: FirstName,
    pub email: Email,
}

impl Subscription {
    /// Enrolls a subscriber, active immediately.
    #[must_use]
    pub fn new(params: NewSubscriptionParams, clock: &dyn Clock) -> Self {
        let now = clock.now();
        Self {
            id: params.id,
            first_name: params.first_name,
            email: params.email,
            status: SubscriptionStatus::Active,
            is_active: true,
            subscribed_at: now,
            unsubscribed_at: None,
            updated_at: now,
        }
    }

    /// Cancels an active subscription.
    pub fn unsubscribe(&self, clock: &dyn Clock) -> DomainResult<Self> {
        const OP: &str = "Subscription::unsubscribe";

        if self.status != SubscriptionStatus::Active {
            return Err(DomainError::conflict(OP, "Subscription is not active."));
        }

        let now = clock.now();
        let mut updated = self.clone();
        updated.status = SubscriptionStatus::Unsubscribed;
        updated.is_active = false;
        updated.unsubscribed_at = Some(now);
        updated.updated_at = now;
        Ok(updated)
    }

    /// Reactivates a voluntarily cancelled subscription. Bounced and
    /// complained addresses stay out.
    pub fn resubscribe(&self, clock: &dyn Clock) -> DomainResult<Self> {
        const OP: &str = "Subscription::resubscribe";

        if self.status == SubscriptionStatus::Active {
            return Err(DomainError::conflict(OP, "Subscription is already active."));
        }

        if self.status != SubscriptionStatus::Unsubscribed {
            return Err(DomainError::invalid(
                OP,
                "Cannot resubscribe: subscription was not voluntarily unsubscribed.",
            ));
        }

        let now = clock.now();
        let mut updated = self.clone();
        updated.status = SubscriptionStatus::Active;
        updated.is_active = true;
        updated.unsubscribed_at = None;
        updated.updated_at = now;
        Ok(updated)
    }

    /// Marks the address as permanently undeliverable.
    #[must_use]
    pub fn mark_bounced(&self, clock: &dyn Clock) -> Self {
        let mut updated = self.clone();
        updated.status = SubscriptionStatus::Bounced;
        updated.is_active = false;
        updated.updated_at = clock.now();
        updated
    }

    /// Records a spam complaint.
    #[must_use]
    pub fn mark_complained(&self, clock: &dyn Clock) -> Self {
        let mut updated = self.clone();
        updated.status = SubscriptionStatus::Complained;
        updated.is_active = false;
        updated.updated_at = clock.now();
        updated
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.is_active && self.status == SubscriptionStatus::Active
    }

    #[must_use]
    pub fn can_receive_emails(&self) -> bool {
        self.is_subscribed()
    }

    /// First name when present, email otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.first_name.is_empty() {
            self.email.as_str()
        } else {
            self.first_name.as_str()
        }
    }
}
