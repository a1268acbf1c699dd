// Rust guideline compliant 2026-10-19

//! Clock used to stamp issue timestamps.

use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Source of the current time.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Returns a clock that reads the system time.
#[must_use]
pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}

/// Returns a clock that always reports `at`.
#[must_use]
pub fn fixed_clock(at: DateTime<Utc>) -> Clock {
    Arc::new(move || at)
}
