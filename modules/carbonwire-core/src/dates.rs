//! Shared timestamp parsing for `Article::published_at`.
//!
//! Three formats are accepted, tried in order: RFC-3339, a naive
//! `YYYY-MM-DDThh:mm:ss` (assumed UTC), and a bare `YYYY-MM-DD` (midnight UTC).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a `publishedAt` string using the three supported formats.
///
/// Returns `None` if the string is empty or matches none of them.
pub fn parse_published_at(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(DateTime::from_naive_utc_and_offset(naive, Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(DateTime::from_naive_utc_and_offset(date.and_hms_opt(0, 0, 0)?, Utc));
    }
    None
}

/// Format a parsed timestamp back into RFC-3339 with a `Z` suffix, the
/// canonical on-the-wire form every adapter is expected to emit.
pub fn to_rfc3339(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339() {
        assert!(parse_published_at("2026-01-05T14:42:50Z").is_some());
    }

    #[test]
    fn parses_naive_datetime() {
        assert!(parse_published_at("2026-01-05T14:42:50").is_some());
    }

    #[test]
    fn parses_bare_date() {
        assert!(parse_published_at("2026-01-05").is_some());
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert!(parse_published_at("").is_none());
        assert!(parse_published_at("not-a-date").is_none());
    }
}
