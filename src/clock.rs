//! Injectable time source.
//!
//! The catalog cache and the deck stores never call `Utc::now()` directly;
//! they go through a [`Clock`] so tests can control staleness and timestamps
//! deterministically instead of sleeping.

use chrono::{DateTime, Utc};

/// A source of the current wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The real system clock. Used everywhere outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
