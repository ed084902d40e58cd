//! Attendance metrics calculation.
//!
//! Turns the normalised IN/OUT sequence of a day into the numbers shown on the
//! chip. The calculation is a pure function of the events, the evaluation
//! instant and the settings.
//!
//! ## Definitions
//!
//! ```text
//! effective = Σ closed sessions + (now - open IN)      if a session is open
//! gross     = (now | last punch) - first punch
//! breaks    = max(0, gross - effective)
//! ```
//!
//! ## Data quality
//!
//! Punch logs are noisy. The walk tolerates:
//! - a second IN while a session is open (ignored, sessions never nest)
//! - an OUT with no open session (ignored)
//! - a day made only of OUT punches (no effective time, gross still measured)
//!
//! ## Examples
//!
//! ```rust
//! use kekatime::libs::metrics::compute_metrics;
//! use kekatime::libs::punch::PunchEvent;
//! use kekatime::libs::settings::Settings;
//! use chrono::{Duration, NaiveDate};
//!
//! let day = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
//! let at = |h, m| day.and_hms_opt(h, m, 0).unwrap();
//! let events = vec![PunchEvent::punch_in(at(9, 0))];
//!
//! let snapshot = compute_metrics(&events, at(9, 30), &Settings::default());
//! assert_eq!(snapshot.effective, Duration::minutes(30));
//! assert!(snapshot.is_punched_in);
//! ```

use crate::libs::punch::{PunchEvent, PunchKind};
use crate::libs::settings::Settings;
use crate::libs::time::{format_clock, ClockFormat};
use chrono::{Duration, NaiveDateTime};

pub const COMPLETED: &str = "Completed";
pub const NOT_PUNCHED_IN: &str = "Not punched in";

/// An IN paired with its OUT, or still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkSession {
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

impl WorkSession {
    /// Length of the session, extrapolating an open one to `now`.
    pub fn duration(&self, now: NaiveDateTime) -> Duration {
        let end = self.end.unwrap_or(now);
        (end - self.start).max(Duration::zero())
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }
}

/// Projected end of the work day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkout {
    At(NaiveDateTime),
    Completed,
    NotPunchedIn,
}

impl Checkout {
    pub fn label(&self, format: ClockFormat) -> String {
        match self {
            Checkout::At(time) => format_clock(time, format),
            Checkout::Completed => COMPLETED.to_string(),
            Checkout::NotPunchedIn => NOT_PUNCHED_IN.to_string(),
        }
    }
}

/// Result of one full metrics calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSnapshot {
    pub effective: Duration,
    pub gross: Duration,
    pub breaks: Duration,
    pub is_punched_in: bool,
    pub expected_checkout: Checkout,
    pub first_punch: Option<NaiveDateTime>,
    pub last_punch: Option<NaiveDateTime>,
    pub sessions: Vec<WorkSession>,
}

impl MetricsSnapshot {
    /// The snapshot of a day without any usable punch.
    pub fn empty() -> Self {
        MetricsSnapshot {
            effective: Duration::zero(),
            gross: Duration::zero(),
            breaks: Duration::zero(),
            is_punched_in: false,
            expected_checkout: Checkout::NotPunchedIn,
            first_punch: None,
            last_punch: None,
            sessions: Vec::new(),
        }
    }
}

/// Pairs sorted events into work sessions; the last one may still be open.
pub fn sessions(events: &[PunchEvent]) -> Vec<WorkSession> {
    let mut sessions = Vec::new();
    let mut open_in: Option<NaiveDateTime> = None;

    for event in events {
        match (event.kind, open_in) {
            (PunchKind::In, None) => open_in = Some(event.time),
            (PunchKind::Out, Some(start)) => {
                sessions.push(WorkSession {
                    start,
                    end: Some(event.time),
                });
                open_in = None;
            }
            // duplicate IN or orphan OUT
            _ => {}
        }
    }

    if let Some(start) = open_in {
        sessions.push(WorkSession { start, end: None });
    }
    sessions
}

/// Computes the day's metrics at `now`.
///
/// `events` must be sorted (see [`crate::libs::punch::PunchLog::normalize`]).
/// Never fails; an empty slice yields [`MetricsSnapshot::empty`].
pub fn compute_metrics(events: &[PunchEvent], now: NaiveDateTime, settings: &Settings) -> MetricsSnapshot {
    let (first_event, last_punch) = match (events.first(), events.last()) {
        (Some(first), Some(last)) => (first.time, last.time),
        _ => return MetricsSnapshot::empty(),
    };
    // Orphan OUTs before the first IN do not open the day.
    let first_punch = events
        .iter()
        .find(|event| event.kind == PunchKind::In)
        .map_or(first_event, |event| event.time);

    let sessions = sessions(events);
    let is_punched_in = sessions.last().is_some_and(|s| s.is_open());

    // A clock running behind the punch log must not shrink gross below effective.
    let horizon = now.max(last_punch);

    let effective: Duration = sessions.iter().map(|s| s.duration(horizon)).sum();
    let gross = if is_punched_in { horizon } else { last_punch } - first_punch;
    let breaks = (gross - effective).max(Duration::zero());

    let checkout = settings.break_policy.checkout(first_punch, settings.target(), breaks);
    let expected_checkout = if now >= checkout {
        Checkout::Completed
    } else {
        Checkout::At(checkout)
    };

    MetricsSnapshot {
        effective,
        gross,
        breaks,
        is_punched_in,
        expected_checkout,
        first_punch: Some(first_punch),
        last_punch: Some(last_punch),
        sessions,
    }
}
