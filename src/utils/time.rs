//! Time and date utilities

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Get current Unix timestamp in seconds
pub fn current_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// Parse a client-supplied date into an instant.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM[:SS]` (read as UTC)
/// and plain `YYYY-MM-DD` calendar dates (midnight UTC).
pub fn parse_instant(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Human-readable calendar date, e.g. "September 1, 2026".
/// Unparseable input is returned as is.
pub fn display_date(input: &str) -> String {
    parse_instant(input)
        .map(|dt| dt.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_instant("2026-03-04T10:30:00+02:00").unwrap();
        assert_eq!(dt.hour(), 8);
        assert_eq!(dt.day(), 4);
    }

    #[test]
    fn test_parse_naive_forms() {
        assert!(parse_instant("2026-03-04T10:30:00").is_some());
        assert!(parse_instant("2026-03-04T10:30").is_some());
        assert!(parse_instant("2026-03-04 10:30:00").is_some());

        let date = parse_instant("2026-03-04").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2026, 3, 4));
        assert_eq!(date.hour(), 0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_instant("").is_none());
        assert!(parse_instant("tomorrow").is_none());
        assert!(parse_instant("2026-13-01").is_none());
        assert!(parse_instant("2026-02-30").is_none());
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2026-09-01"), "September 1, 2026");
        assert_eq!(display_date("someday"), "someday");
    }

    #[test]
    fn test_current_timestamp_is_recent() {
        assert!(current_timestamp() > 1_700_000_000);
    }
}
