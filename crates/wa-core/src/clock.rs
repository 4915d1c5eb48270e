//! Injectable time source for report timestamps.
//!
//! The engine never reads the wall clock itself; the caller supplies a
//! [`Clock`], which keeps reports reproducible under test.

use chrono::{DateTime, Utc};

/// Source of the `generated_at` timestamp.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Fixed clock at a Unix timestamp in seconds; the epoch if out of range.
    pub fn from_timestamp(secs: i64) -> Self {
        FixedClock(DateTime::from_timestamp(secs, 0).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
