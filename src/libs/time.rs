//! Duration and wall-clock formatting helpers.
//!
//! Every duration shown by kekatime goes through this module so the chip, the
//! details view and the progress summary agree on rounding:
//!
//! - Durations are floored to whole seconds and rendered as `HH:MM:SS`
//! - Negative durations are treated as zero
//! - Wall-clock times follow the user's [`ClockFormat`]
//!
//! ## Examples
//!
//! ```rust
//! use kekatime::libs::time::{format_clock, format_duration, ClockFormat};
//! use chrono::{Duration, NaiveDate};
//!
//! assert_eq!(format_duration(&(Duration::hours(7) + Duration::seconds(5))), "07:00:05");
//!
//! let at = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap().and_hms_opt(18, 5, 9).unwrap();
//! assert_eq!(format_clock(&at, ClockFormat::H12), "6:05:09 PM");
//! assert_eq!(format_clock(&at, ClockFormat::H24), "18:05:09");
//! ```

use crate::libs::messages::Message;
use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

/// How wall-clock instants are rendered.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ClockFormat {
    /// `18:05:09`
    #[serde(rename = "24h")]
    H24,
    /// `6:05:09 PM`
    #[default]
    #[serde(rename = "12h")]
    H12,
}

impl fmt::Display for ClockFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClockFormat::H24 => write!(f, "24h"),
            ClockFormat::H12 => write!(f, "12h"),
        }
    }
}

impl FromStr for ClockFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "24h" | "24" => Ok(ClockFormat::H24),
            "12h" | "12" => Ok(ClockFormat::H12),
            other => Err(Message::InvalidClockFormat(other.to_string()).to_string()),
        }
    }
}

/// A duration split into whole hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hms {
    pub h: i64,
    pub m: i64,
    pub s: i64,
}

/// Splits a millisecond count into hours, minutes and seconds (floored).
pub fn ms_to_hms(ms: i64) -> Hms {
    let ms = ms.max(0);
    Hms {
        h: ms / MS_PER_HOUR,
        m: (ms % MS_PER_HOUR) / MS_PER_MINUTE,
        s: (ms % MS_PER_MINUTE) / MS_PER_SECOND,
    }
}

pub fn duration_to_hms(duration: &Duration) -> Hms {
    ms_to_hms(duration.num_milliseconds())
}

/// Zero-padded `HH:MM:SS`.
pub fn format_hms(h: i64, m: i64, s: i64) -> String {
    format!("{:02}:{:02}:{:02}", h, m, s)
}

pub fn format_duration(duration: &Duration) -> String {
    let Hms { h, m, s } = duration_to_hms(duration);
    format_hms(h, m, s)
}

/// Break time as shown on the chip, e.g. `"45 min"`.
pub fn format_break_minutes(duration: &Duration) -> String {
    format!("{} min", duration.num_minutes().max(0))
}

/// Renders the time-of-day part of `time` per `format`.
pub fn format_clock(time: &NaiveDateTime, format: ClockFormat) -> String {
    let (h, m, s) = (time.hour(), time.minute(), time.second());
    match format {
        ClockFormat::H24 => format!("{:02}:{:02}:{:02}", h, m, s),
        ClockFormat::H12 => {
            let meridiem = if h >= 12 { "PM" } else { "AM" };
            let hour = match h % 12 {
                0 => 12,
                hour => hour,
            };
            format!("{}:{:02}:{:02} {}", hour, m, s, meridiem)
        }
    }
}
