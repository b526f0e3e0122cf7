//! Parsing of the countdown target given on the command line.

use std::time::Duration;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use compact_str::ToCompactString;

use crate::{
    result::{CountdownError, Result},
    time::Timestamp,
};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Accepts epoch milliseconds, an RFC 3339 datetime, or a local
/// `YYYY-MM-DD HH:MM[:SS]`. Past instants are fine.
pub fn parse_target(input: &str) -> Result<Timestamp> {
    parse_target_in(input, &Local)
}

pub(crate) fn parse_target_in<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<Timestamp> {
    let input = input.trim();
    let invalid = || CountdownError::InvalidTarget(input.to_compact_string());

    if let Ok(millis) = input.parse::<i64>() {
        return Ok(millis);
    }

    if let Ok(at) = DateTime::parse_from_rfc3339(input) {
        return Ok(at.timestamp_millis());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
        .map(|at| at.timestamp_millis())
        .ok_or_else(invalid)
}

/// Parses durations like `90s`, `25m`, `1h30m` or `2h5m10s`. A bare
/// number is taken as seconds.
pub fn parse_duration(input: &str) -> Result<Duration> {
    let input = input.trim();
    let invalid = || CountdownError::InvalidDuration(input.to_compact_string());

    if input.is_empty() {
        return Err(invalid());
    }

    if let Ok(secs) = input.parse::<u64>() {
        return Ok(Duration::from_secs(secs));
    }

    let mut total: u64 = 0;
    let mut digits = String::new();
    for c in input.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }

        let unit = match c.to_ascii_lowercase() {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => return Err(invalid()),
        };
        let value: u64 = digits.parse().map_err(|_| invalid())?;
        total = value
            .checked_mul(unit)
            .and_then(|v| total.checked_add(v))
            .ok_or_else(invalid)?;
        digits.clear();
    }

    if !digits.is_empty() {
        return Err(invalid());
    }

    Ok(Duration::from_secs(total))
}
