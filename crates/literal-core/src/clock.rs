//! Wall-clock source for the `now()` timestamp literal.
//!
//! Reading the clock is the only time-varying behaviour in the parsers.
//! Deterministic callers and tests pass a [`FixedClock`] to
//! [`parse_timestamp_with_clock`](crate::parsers::parse_timestamp_with_clock).

use chrono::{Local, NaiveDateTime};

/// Source of the current local wall-clock instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// The process-wide system clock, in local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a preset instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
