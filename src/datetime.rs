//! Date/time utilities for ATOM.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

/// Truncate a datetime to whole seconds.
pub fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.trunc_subsecs(0)
}

/// Format a datetime as RFC 3339 with second precision and a `Z` suffix,
/// e.g. `2026-10-19T08:30:00Z`.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Current time as a second-precision timestamp string.
pub fn now_timestamp() -> String {
    format_timestamp(&truncate_to_seconds(Utc::now()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_truncate_to_seconds() {
        let dt = Utc
            .with_ymd_and_hms(2026, 10, 19, 8, 30, 15)
            .unwrap()
            .with_nanosecond(987_654_321)
            .unwrap();
        let truncated = truncate_to_seconds(dt);
        assert_eq!(truncated.nanosecond(), 0);
        assert_eq!(truncated.second(), 15);
    }

    #[test]
    fn test_format_timestamp() {
        let dt = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
        assert_eq!(format_timestamp(&dt), "2026-10-19T08:30:00Z");
    }

    #[test]
    fn test_now_timestamp_has_second_precision() {
        let ts = now_timestamp();
        let parsed = DateTime::parse_from_rfc3339(&ts).unwrap();
        assert_eq!(parsed.nanosecond(), 0);
        assert!(ts.ends_with('Z'));
        assert!(!ts.contains('.'));
    }
}
