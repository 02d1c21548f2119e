//! Size and time formatting for tree labels.
//!
//! All rounding is round-half-to-even.

use chrono::{DateTime, Duration, FixedOffset};

const UNITS: [char; 5] = ['K', 'M', 'G', 'T', 'P'];
const ABSOLUTE_TIME_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// Deltas at or above this are shown as absolute timestamps.
const SHOW_DELTA_LIMIT_US: i64 = 3_600_499_999;
/// Deltas below this are shown in seconds.
const ONE_MINUTE_US: i64 = 60_499_999;
/// Deltas below this are shown as minutes and seconds.
const ONE_HOUR_US: i64 = 3_600_499_999;
/// Deltas at or below this are not shown at all for child nodes.
pub const TIME_HIDE_LIMIT_US: i64 = 999_999;

fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Integer division rounded half-to-even.
fn div_round_half_even(n: i64, d: i64) -> i64 {
    let (q, r) = (n.div_euclid(d), n.rem_euclid(d));
    match (2 * r).cmp(&d) {
        std::cmp::Ordering::Less => q,
        std::cmp::Ordering::Greater => q + 1,
        std::cmp::Ordering::Equal if q % 2 == 0 => q,
        std::cmp::Ordering::Equal => q + 1,
    }
}

/// `n / d` with one decimal digit, for `d` in {5, 10}.
fn one_decimal(n: i64, d: i64) -> String {
    let tenths = n * (10 / d);
    format!("{}.{}", tenths / 10, tenths % 10)
}

fn format_in_unit(bytes: i64, exp: f64, unit: char) -> Option<String> {
    let value = bytes as f64 / exp;
    if value < 10.0 {
        let n = round_half_even(bytes as f64 / (exp / 10.0));
        Some(format!("{}{}", one_decimal(n, 10), unit))
    } else if value < 20.0 {
        let n = round_half_even(bytes as f64 / (exp / 5.0));
        Some(format!("{}{}", one_decimal(n, 5), unit))
    } else if value < 1024.0 {
        Some(format!("{}{}", round_half_even(value), unit))
    } else {
        None
    }
}

/// Human readable byte count: `50B`, `0.5K`, `15.2M`, `500K`.
///
/// Accepts negative values since it also prints size deltas; those stay in bytes.
pub fn format_size(bytes: i64) -> String {
    if bytes < 100 {
        return format!("{}B", bytes);
    }
    let mut exp = 1.0_f64;
    for unit in UNITS {
        exp *= 1024.0;
        if let Some(formatted) = format_in_unit(bytes, exp, unit) {
            return formatted;
        }
    }
    format!("{}P", round_half_even(bytes as f64 / exp))
}

/// Timestamp as `YYYY.MM.DD HH:MM:SS` in its own offset.
pub fn format_absolute_time(time: &DateTime<FixedOffset>) -> String {
    time.format(ABSOLUTE_TIME_FORMAT).to_string()
}

/// Creation time relative to the parent.
///
/// `delta` is `None` for roots; roots and flat listings always get the
/// absolute time, as do deltas of an hour or more.
pub fn format_relative_time(
    delta: Option<Duration>,
    created: &DateTime<FixedOffset>,
    flat: bool,
) -> String {
    let micros = match delta {
        Some(delta) if !flat => delta.num_microseconds().unwrap_or(i64::MAX),
        _ => return format_absolute_time(created),
    };
    if micros >= SHOW_DELTA_LIMIT_US {
        return format_absolute_time(created);
    }

    let seconds = div_round_half_even(micros, 1_000_000);
    if micros < ONE_MINUTE_US {
        format!("+{}s", seconds)
    } else if micros < ONE_HOUR_US {
        format!("+{}:{:02}", seconds.div_euclid(60), seconds.rem_euclid(60))
    } else {
        let minutes = seconds.div_euclid(60);
        format!(
            "+{}:{:02}:{:02}",
            minutes.div_euclid(60),
            minutes.rem_euclid(60),
            seconds.rem_euclid(60)
        )
    }
}
