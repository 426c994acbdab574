//! Wall-clock time values.
//!
//! Upstream records carry times as loose strings (`"9"`, `"9:30"`,
//! `"21:30:00"`). [`TimeOfDay::parse`] is the single tolerant entry point:
//! it either yields a validated second-precision time or nothing at all.
//! Invalid input never clamps, wraps, or panics.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A validated wall-clock time with second precision.
///
/// Canonical textual form is zero-padded `HH:MM:SS` (24-hour), which is what
/// [`fmt::Display`] and the serde implementations produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Parses a loose time string into a validated time.
    ///
    /// Accepts `H`, `H:M`, and `H:M:S` forms with 1–2 digit components.
    /// Anything else (empty components, non-digits, more than three
    /// components, out-of-range values) yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = [0u32; 3];
        let mut count = 0;
        for component in raw.trim().split(':') {
            if count == parts.len() {
                return None;
            }
            if component.is_empty() || component.len() > 2 {
                return None;
            }
            if !component.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            parts[count] = component.parse().ok()?;
            count += 1;
        }
        NaiveTime::from_hms_opt(parts[0], parts[1], parts[2]).map(Self)
    }

    /// Builds a time directly from components, if they are in range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self)
    }

    /// Seconds elapsed since midnight, in `0..86400`.
    pub fn seconds_from_midnight(&self) -> u32 {
        self.0.num_seconds_from_midnight()
    }

    /// Whole minutes elapsed since midnight, in `0..1440`.
    pub fn minute_of_day(&self) -> u32 {
        self.seconds_from_midnight() / 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.0.hour(),
            self.0.minute(),
            self.0.second()
        )
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid time of day: {raw:?}")))
    }
}

/// The club's configured night-tariff period.
///
/// The window may wrap past midnight (`start > end` means "from start,
/// through midnight, until end the next day"). A window whose bounds are
/// equal covers the whole day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl NightWindow {
    /// Whether `time` falls inside the window.
    ///
    /// The interval is half-open: a time exactly at `start` is inside, one
    /// exactly at `end` is outside. With equal bounds every time matches.
    pub fn contains(&self, time: TimeOfDay) -> bool {
        let t = time.seconds_from_midnight();
        let start = self.start.seconds_from_midnight();
        let end = self.end.seconds_from_midnight();

        if start == end {
            // Degenerate configuration, treated as a full-day window.
            true
        } else if start < end {
            start <= t && t < end
        } else {
            // Window wraps past midnight.
            t >= start || t < end
        }
    }
}
