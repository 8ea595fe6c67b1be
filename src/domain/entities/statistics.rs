//! Usage statistics of a short link.

use chrono::{DateTime, Utc};

/// Statistics the service reports for one short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkStatistics {
    /// Creation timestamp exactly as sent by the service.
    pub created_at: String,
    pub is_custom: bool,
    pub original_url: String,
    pub short_url: String,
    pub visit_count: u64,
}

impl LinkStatistics {
    /// Parses `created_at` as RFC 3339, if it is in that format.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
