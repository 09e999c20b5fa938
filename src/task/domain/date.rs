//! Tolerant parsing of the date strings carried by task documents.
//!
//! Task documents have accumulated several date spellings over time:
//! compact `YYYYMMDD` values written by the deadline pickers, ISO 8601
//! timestamps, and legacy strings with a trailing `, <something>` suffix.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y%m%dT%H%M%S",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: [&str; 3] = ["%Y%m%d", "%Y-%m-%d", "%d.%m.%Y"];

/// Parses a task date string into a naive date-time.
///
/// Offsets present in the input are dropped after conversion to the
/// wall-clock time they were written in. Returns `None` when no known
/// spelling matches.
#[must_use]
pub fn parse_task_date(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    parse_known_spelling(trimmed).or_else(|| {
        // legacy values: keep everything before the first comma
        trimmed
            .split(',')
            .next()
            .map(str::trim)
            .filter(|head| !head.is_empty() && *head != trimmed)
            .and_then(parse_known_spelling)
    })
}

/// Parses a task date string as a UTC timestamp.
#[must_use]
pub fn parse_task_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    parse_task_date(raw).map(|naive| naive.and_utc())
}

/// Formats a calendar date in the compact `YYYYMMDD` spelling the action
/// endpoints expect.
#[must_use]
pub fn compact_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

fn parse_known_spelling(value: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.naive_local());
    }
    if let Ok(with_offset) = DateTime::parse_from_rfc2822(value) {
        return Some(with_offset.naive_local());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}
