//! Conversion between `HH:MM:SS` text and whole seconds.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, ScheduleError};

/// Parses `HH:MM:SS`, `MM:SS` or a bare seconds count into total seconds.
///
/// Components are not range checked, so `"5:75"` is 375 seconds. Empty
/// fields, signs and any non-digit character are rejected.
///
/// # Examples
///
/// ```rust
/// use syllabus_core::duration::parse_duration;
///
/// assert_eq!(parse_duration("1:05:00").unwrap(), 3900);
/// assert_eq!(parse_duration("5:3").unwrap(), 303);
/// assert_eq!(parse_duration("42").unwrap(), 42);
/// assert!(parse_duration("1:2:3:4").is_err());
/// ```
pub fn parse_duration(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ScheduleError::malformed_duration(text, "empty duration"));
    }

    let fields: Vec<&str> = trimmed.split(':').collect();
    if fields.len() > 3 {
        return Err(ScheduleError::malformed_duration(
            text,
            "expected HH:MM:SS, MM:SS or seconds",
        ));
    }

    fields.iter().try_fold(0u64, |total, field| {
        let value = parse_field(text, field)?;
        total
            .checked_mul(60)
            .and_then(|t| t.checked_add(value))
            .ok_or_else(|| ScheduleError::malformed_duration(text, "duration overflows"))
    })
}

fn parse_field(input: &str, field: &str) -> Result<u64> {
    if field.is_empty() {
        return Err(ScheduleError::malformed_duration(input, "empty component"));
    }
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ScheduleError::malformed_duration(
            input,
            format!("component '{field}' is not a non-negative integer"),
        ));
    }
    field
        .parse::<u64>()
        .map_err(|_| ScheduleError::malformed_duration(input, "component out of range"))
}

/// Formats seconds as zero-padded `HH:MM:SS`.
///
/// ```rust
/// use syllabus_core::duration::format_duration;
///
/// assert_eq!(format_duration(303), "00:05:03");
/// assert_eq!(format_duration(3900), "01:05:00");
/// ```
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// A video runtime in whole seconds, displayed and serialized as `HH:MM:SS`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VideoDuration(pub u64);

impl VideoDuration {
    /// Creates a duration from whole seconds.
    pub fn from_secs(seconds: u64) -> Self {
        Self(seconds)
    }

    /// Total seconds.
    pub fn as_secs(self) -> u64 {
        self.0
    }
}

impl FromStr for VideoDuration {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        parse_duration(s).map(Self)
    }
}

impl fmt::Display for VideoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(self.0))
    }
}

impl std::iter::Sum for VideoDuration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|d| d.0).sum())
    }
}

impl Serialize for VideoDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VideoDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
