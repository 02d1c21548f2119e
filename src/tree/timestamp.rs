//! Parsing of docker `Created` timestamps.

use crate::error::ForestError;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

const NAIVE_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
const NAIVE_FRACTION: &str = "%Y-%m-%dT%H:%M:%S%.f";
const OFFSET_FRACTION: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// Parse a creation timestamp.
///
/// Shapes are tried in order:
/// 1. `2023-01-01T10:00:00.123456789Z`: the last four characters are dropped and
///    the remainder must carry a fraction of at most six digits.
/// 2. `2023-01-01T10:00:00Z`: the trailing marker is dropped.
/// 3. `2023-01-01T10:00:00.123456789+01:00`: the fraction is cut or padded to six
///    digits and the offset is kept.
///
/// Naive shapes are taken as UTC.
pub fn parse_created(raw: &str) -> Result<DateTime<FixedOffset>, ForestError> {
    parse_nanosecond_zulu(raw)
        .or_else(|| parse_second_zulu(raw))
        .or_else(|| parse_with_offset(raw))
        .ok_or_else(|| ForestError::UnrecognizedTimestamp(raw.to_string()))
}

fn as_utc(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    Utc.from_utc_datetime(&naive).fixed_offset()
}

fn parse_nanosecond_zulu(raw: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = raw.get(..raw.len().checked_sub(4)?)?;
    let (_, fraction) = trimmed.rsplit_once('.')?;
    if fraction.is_empty() || fraction.len() > 6 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDateTime::parse_from_str(trimmed, NAIVE_FRACTION)
        .ok()
        .map(as_utc)
}

fn parse_second_zulu(raw: &str) -> Option<DateTime<FixedOffset>> {
    let mut chars = raw.chars();
    chars.next_back()?;
    NaiveDateTime::parse_from_str(chars.as_str(), NAIVE_SECONDS)
        .ok()
        .map(as_utc)
}

fn parse_with_offset(raw: &str) -> Option<DateTime<FixedOffset>> {
    let split = raw.len().checked_sub(6)?;
    let (body, offset) = (raw.get(..split)?, raw.get(split..)?);
    if !(offset.starts_with('+') || offset.starts_with('-')) || offset.as_bytes()[3] != b':' {
        return None;
    }
    let (seconds, fraction) = body.rsplit_once('.')?;
    if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let micros: String = fraction.chars().chain(std::iter::repeat('0')).take(6).collect();
    let normalized = format!("{}.{}{}", seconds, micros, offset);
    DateTime::parse_from_str(&normalized, OFFSET_FRACTION).ok()
}
