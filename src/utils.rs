use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Rounds a monetary or score value to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Accepts `YYYY-MM-DD`, a naive `YYYY-MM-DDTHH:MM:SS[.f]` or an RFC 3339 timestamp.
pub fn is_iso8601(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
        || DateTime::parse_from_rfc3339(value).is_ok()
}
