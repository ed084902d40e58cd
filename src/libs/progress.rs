//! Work-day completion: progress breakdown, percentage and the one-shot
//! "work day complete" latch.

use crate::libs::settings::Settings;
use crate::libs::time::{duration_to_hms, format_hms, ms_to_hms, Hms};
use chrono::Duration;
use serde::Serialize;

/// Progress of the fulfilled time against the configured target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// `HH:MM:SS` still to go.
    pub time_remaining: String,
    /// `HH:MM:SS` already fulfilled.
    pub hours_fulfilled: String,
    /// Whole percent, 100 once the target is reached.
    pub completion_percentage: u32,
    pub fulfilled_minutes: i64,
    pub remaining_minutes: i64,
    /// Seconds part of the fulfilled time.
    pub remaining_seconds: i64,
}

/// Breaks `fulfilled` down against `target`.
///
/// Remaining time is counted from whole remaining minutes minus the seconds
/// already spent in the current minute.
pub fn progress(fulfilled: Duration, target: Duration) -> Progress {
    let fulfilled = fulfilled.max(Duration::zero());
    let target_minutes = target.num_minutes();
    let Hms { h, m, s } = duration_to_hms(&fulfilled);

    let completion_percentage = if fulfilled >= target {
        100
    } else {
        (fulfilled.num_milliseconds() as f64 / target.num_milliseconds() as f64 * 100.0).floor() as u32
    };

    let fulfilled_minutes = h * 60 + m;
    let remaining_minutes = (target_minutes - fulfilled_minutes).max(0);
    let remaining_ms = (remaining_minutes * 60_000 - s * 1_000).max(0);
    let remaining = ms_to_hms(remaining_ms);

    Progress {
        time_remaining: format_hms(remaining.h, remaining.m, remaining.s),
        hours_fulfilled: format_hms(h, m, s),
        completion_percentage,
        fulfilled_minutes,
        remaining_minutes,
        remaining_seconds: s,
    }
}

/// Whether the counted time under the break policy reached the target.
pub fn is_completed(gross: Duration, effective: Duration, settings: &Settings) -> bool {
    settings.break_policy.counted(gross, effective) >= settings.target()
}

/// Completion for the progress bar, `0.0..=100.0`.
pub fn completion_ratio(gross: Duration, effective: Duration, settings: &Settings) -> f64 {
    let target = settings.target();
    if target.is_zero() {
        return 0.0;
    }
    let counted = settings.break_policy.counted(gross, effective);
    (counted.num_milliseconds() as f64 / target.num_milliseconds() as f64 * 100.0).clamp(0.0, 100.0)
}

/// Effective time as displayed: gross when breaks count as work, gross minus breaks otherwise.
pub fn displayed_effective(gross: Duration, breaks: Duration, settings: &Settings) -> Duration {
    settings
        .break_policy
        .counted(gross, (gross - breaks).max(Duration::zero()))
}

/// Remembers whether the completion notice already went out for the current
/// punched-in session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationLatch {
    sent: bool,
}

impl NotificationLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_sent(&self) -> bool {
        self.sent
    }

    /// Returns `true` when a completion notice should go out now.
    ///
    /// Punching out re-arms the latch.
    pub fn pending(&mut self, gross: Duration, effective: Duration, is_punched_in: bool, settings: &Settings) -> bool {
        if !is_punched_in {
            self.sent = false;
            return false;
        }
        settings.notifications_enabled && !self.sent && is_completed(gross, effective, settings)
    }

    /// Marks the notice as delivered for this session.
    pub fn fire(&mut self) {
        self.sent = true;
    }
}
