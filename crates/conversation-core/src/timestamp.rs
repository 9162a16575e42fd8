//! Timestamp parsing and canonical formatting
//!
//! Transcripts carry RFC 3339 timestamps, usually with milliseconds. Stored
//! timestamps are always UTC with exactly three fractional digits so that
//! lexical order in SQLite equals chronological order.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};

use crate::error::CoreError;

/// Layout of the zone-less variant (interpreted as UTC)
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Accepted input encodings, tried in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampFormat {
    /// `2024-01-01T10:00:00.123Z` (canonical)
    Rfc3339Millis,
    /// `2024-01-01T10:00:00+02:00`
    Rfc3339,
    /// `2024-01-01T10:00:00`
    Naive,
}

/// Order in which [`parse_timestamp`] tries the formats
pub const ACCEPTED_FORMATS: [TimestampFormat; 3] = [
    TimestampFormat::Rfc3339Millis,
    TimestampFormat::Rfc3339,
    TimestampFormat::Naive,
];

impl TimestampFormat {
    fn parse(self, s: &str) -> Option<DateTime<Utc>> {
        match self {
            TimestampFormat::Rfc3339Millis if has_fraction(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|t| t.with_timezone(&Utc)),
            TimestampFormat::Rfc3339Millis => None,
            TimestampFormat::Rfc3339 => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|t| t.with_timezone(&Utc)),
            TimestampFormat::Naive => NaiveDateTime::parse_from_str(s, NAIVE_FORMAT)
                .ok()
                .map(|n| Utc.from_utc_datetime(&n)),
        }
    }
}

fn has_fraction(s: &str) -> bool {
    s.split_once('T')
        .map(|(_, time)| time.contains('.'))
        .unwrap_or(false)
}

/// Parse a timestamp, trying each of [`ACCEPTED_FORMATS`] in turn
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, CoreError> {
    let s = s.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|format| format.parse(s))
        .ok_or_else(|| CoreError::Timestamp(s.to_string()))
}

/// Parse a timestamp, falling back to the current time
pub fn parse_timestamp_or_now(s: Option<&str>) -> DateTime<Utc> {
    s.and_then(|s| parse_timestamp(s).ok())
        .unwrap_or_else(Utc::now)
}

/// Format a timestamp in the canonical stored form
pub fn format_timestamp(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}
