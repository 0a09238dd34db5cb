use chrono::{DateTime, Utc};

/// Short human-readable timestamp for the results header.
#[must_use]
pub fn format_completed_at(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}
