// src/infrastructure/time.rs
use chrono::{DateTime, Utc};

use crate::domain::clock::Clock;

/// Wall-clock implementation of [`Clock`] for production wiring.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
