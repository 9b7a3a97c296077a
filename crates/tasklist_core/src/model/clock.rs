//! Time source for task creation timestamps.

use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies creation timestamps in Unix epoch milliseconds.
pub trait Clock {
    fn now_epoch_ms(&self) -> i64;
}

/// Wall-clock implementation backed by `SystemTime`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        // A clock set before 1970 yields 0 rather than failing the add.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

/// Clock that always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_epoch_ms(&self) -> i64 {
        self.0
    }
}
