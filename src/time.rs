//! Pure countdown arithmetic: splitting a millisecond delta into
//! hours, minutes and seconds, and rendering it.

use std::fmt;

/// Milliseconds since the Unix epoch.
pub type Timestamp = i64;

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;

/// Returned by [`remaining_seconds`] once the target lies in the past.
pub const TARGET_PASSED: i64 = -1;

/// Normalized time left until a target.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delta {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
}

impl Delta {
    pub const ZERO: Delta = Delta { hours: 0, minutes: 0, seconds: 0 };

    pub fn new(hours: u64, minutes: u8, seconds: u8) -> Self {
        debug_assert!(minutes < 60 && seconds < 60);
        Self { hours, minutes, seconds }
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours * 3600 + self.minutes as u64 * 60 + self.seconds as u64
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// `HH:MM:SS` when there are hours left, `MM:SS` otherwise.
impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours > 0 {
            write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
        } else {
            write!(f, "{:02}:{:02}", self.minutes, self.seconds)
        }
    }
}

/// Splits the time between `now` and `target` into a [`Delta`]. Yields
/// [`Delta::ZERO`] when `now` has reached or passed the target.
pub fn time_delta(now: Timestamp, target: Timestamp) -> Delta {
    let diff = target.saturating_sub(now);
    if diff <= 0 {
        return Delta::ZERO;
    }

    Delta {
        hours: (diff / MILLIS_PER_HOUR) as u64,
        minutes: (diff / MILLIS_PER_MINUTE % 60) as u8,
        seconds: (diff / MILLIS_PER_SECOND % 60) as u8,
    }
}

/// Whole seconds until `target`, or [`TARGET_PASSED`] once `target < now`.
pub fn remaining_seconds(now: Timestamp, target: Timestamp) -> i64 {
    if target < now {
        TARGET_PASSED
    } else {
        target.saturating_sub(now) / MILLIS_PER_SECOND
    }
}

pub fn format_delta(delta: &Delta) -> String {
    delta.to_string()
}
