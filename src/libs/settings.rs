//! Work-day policy: target length, break handling, notifications and clock format.
//!
//! ## Break policy
//!
//! The two policies are a business rule, not a display preference:
//!
//! ```text
//! Included:  checkout = first punch + target          completion measured on gross time
//! Excluded:  checkout = first punch + target + break  completion measured on effective time
//! ```

use crate::libs::messages::Message;
use crate::libs::time::ClockFormat;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MAX_WORK_HOURS: u32 = 12;
pub const MAX_WORK_MINUTES: u32 = 59;

const DEFAULT_WORK_HOURS: u32 = 8;
const DEFAULT_WORK_MINUTES: u32 = 30;

/// Whether break time counts towards the work-day target.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BreakPolicy {
    /// Breaks are part of the working hours; the day ends `target` after the first punch.
    Included,
    /// Breaks extend the day; only time spent punched in counts.
    #[default]
    Excluded,
}

impl BreakPolicy {
    /// The duration measured against the target under this policy.
    pub fn counted(&self, gross: Duration, effective: Duration) -> Duration {
        match self {
            BreakPolicy::Included => gross,
            BreakPolicy::Excluded => effective,
        }
    }

    /// Projected checkout instant for a day that started at `first_punch`.
    pub fn checkout(&self, first_punch: NaiveDateTime, target: Duration, breaks: Duration) -> NaiveDateTime {
        match self {
            BreakPolicy::Included => first_punch + target,
            BreakPolicy::Excluded => first_punch + target + breaks,
        }
    }
}

impl fmt::Display for BreakPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BreakPolicy::Included => write!(f, "included"),
            BreakPolicy::Excluded => write!(f, "excluded"),
        }
    }
}

impl FromStr for BreakPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "included" => Ok(BreakPolicy::Included),
            "excluded" => Ok(BreakPolicy::Excluded),
            other => Err(Message::InvalidBreakPolicy(other.to_string()).to_string()),
        }
    }
}

/// User-configurable work-day settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Settings {
    /// Target hours, `0..=12`.
    pub work_hours: u32,
    /// Target minutes on top of the hours, `0..=59`.
    pub work_minutes: u32,
    #[serde(default)]
    pub break_policy: BreakPolicy,
    #[serde(default = "enabled")]
    pub notifications_enabled: bool,
    #[serde(default)]
    pub clock_format: ClockFormat,
}

fn enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            work_hours: DEFAULT_WORK_HOURS,
            work_minutes: DEFAULT_WORK_MINUTES,
            break_policy: BreakPolicy::default(),
            notifications_enabled: true,
            clock_format: ClockFormat::default(),
        }
    }
}

impl Settings {
    /// The work-day target as a duration.
    pub fn target(&self) -> Duration {
        Duration::hours(self.work_hours as i64) + Duration::minutes(self.work_minutes as i64)
    }

    pub fn target_minutes(&self) -> i64 {
        self.work_hours as i64 * 60 + self.work_minutes as i64
    }

    /// Replaces out-of-range hours or minutes with the defaults.
    pub fn validated(self) -> Self {
        Settings {
            work_hours: if self.work_hours > MAX_WORK_HOURS {
                DEFAULT_WORK_HOURS
            } else {
                self.work_hours
            },
            work_minutes: if self.work_minutes > MAX_WORK_MINUTES {
                DEFAULT_WORK_MINUTES
            } else {
                self.work_minutes
            },
            ..self
        }
    }
}
