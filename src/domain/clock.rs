// src/domain/clock.rs
use chrono::{DateTime, Utc};

/// Source of the current UTC time.
///
/// Entity constructors and time-sensitive operations take this instead of
/// reading a global clock, so "past" and "future" checks stay deterministic
/// under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
