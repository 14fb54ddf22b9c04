//! Time source used for `created_at` stamping.
//!
//! Kept as a trait so tests can pin the clock to a fixed instant.

use chrono::{DateTime, Utc};

/// Source of the creation instant read once per create.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time source used outside tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
