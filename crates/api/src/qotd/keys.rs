//! Cache keys for the daily quote and the per-visitor markers.
//!
//! The formats are shared with any other writer of the same cache and must
//! not change.

use std::fmt;

use chrono::{DateTime, Utc};

/// TTL for both the daily quote entry and visitor markers.
pub const ENTRY_TTL_SECS: u64 = 86_400;

/// Value written to a visitor marker. Readers only check presence.
pub const VISITOR_FLAG_VALUE: &str = "1";

/// UTC calendar day, formatted `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateKey(String);

impl DateKey {
    pub fn from_datetime(now: DateTime<Utc>) -> Self {
        Self(now.format("%Y-%m-%d").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `qotd_{date}`
pub fn daily_key(date_key: &DateKey) -> String {
    format!("qotd_{}", date_key.as_str())
}

/// `qotd_requested_{visitor}_{date}`
pub fn visitor_key(visitor_id: &str, date_key: &DateKey) -> String {
    format!("qotd_requested_{}_{}", visitor_id, date_key.as_str())
}
