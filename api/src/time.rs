//! Clock and countdown formatting shared by both leagues.

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Shown in place of a countdown once the start time has passed.
pub const STARTING_SENTINEL: &str = "Starting...";

/// Parse an ISO-8601 clock duration such as `PT10M13.00S` into whole seconds.
///
/// Both components are optional and fractional seconds are dropped. Absent or
/// unrecognised input yields 0.
pub fn parse_iso_duration(text: Option<&str>) -> u32 {
    let Some(text) = text else {
        return 0;
    };
    let Some(start) = text.find("PT") else {
        return 0;
    };
    let rest = &text[start + 2..];

    let (minutes, rest) = match split_digits(rest) {
        (digits, tail) if !digits.is_empty() && tail.starts_with('M') => {
            (parse_component(digits), &tail[1..])
        }
        _ => (0, rest),
    };

    let seconds = match split_digits(rest) {
        (digits, tail) if !digits.is_empty() => {
            let tail = match tail.strip_prefix('.').map(split_digits) {
                Some((fraction, after)) if !fraction.is_empty() => after,
                _ => tail,
            };
            if tail.starts_with('S') { parse_component(digits) } else { 0 }
        }
        _ => 0,
    };

    minutes
        .saturating_mul(SECONDS_PER_MINUTE as u32)
        .saturating_add(seconds)
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn parse_component(digits: &str) -> u32 {
    digits.parse::<u64>().map(|n| n.min(u64::from(u32::MAX)) as u32).unwrap_or(u32::MAX)
}

/// Format seconds as `MM:SS`. Negative input is clamped to `00:00`.
pub fn format_clock(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{:02}:{:02}", seconds / SECONDS_PER_MINUTE, seconds % SECONDS_PER_MINUTE)
}

pub fn parse_instant(iso: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(iso)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Short wall-clock time (`07:00 PM`) of an ISO timestamp in the local zone.
/// Absent, empty or unparseable input yields an empty string.
pub fn format_local_time(iso: Option<&str>) -> String {
    format_time_in(iso, &Local)
}

pub fn format_time_in<Tz>(iso: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    iso.filter(|s| !s.trim().is_empty())
        .and_then(parse_instant)
        .map(|dt| dt.with_timezone(tz).format("%I:%M %p").to_string())
        .unwrap_or_default()
}

/// Format a remaining duration in milliseconds as `Hh Mm Ss`.
/// Hours are not rolled into days.
pub fn format_countdown(millis: i64) -> String {
    if millis < 0 {
        return STARTING_SENTINEL.to_string();
    }
    let total = millis / 1000;
    let hours = total / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total % SECONDS_PER_MINUTE;
    format!("{hours}h {minutes}m {seconds}s")
}

pub fn countdown_until(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_countdown(target.signed_duration_since(now).num_milliseconds())
}
