//! Raw punch records and their normalisation into IN/OUT events.

use crate::libs::time::{format_clock, ClockFormat};
use chrono::NaiveDateTime;
use std::fmt;

/// Premise label used when the portal does not name a location.
pub const UNKNOWN_PREMISE: &str = "Unknown";

/// Attendance status code as reported by the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchStatus {
    In,
    Out,
    Missing,
    Unknown(i64),
}

impl From<i64> for PunchStatus {
    fn from(code: i64) -> Self {
        match code {
            0 => PunchStatus::In,
            1 => PunchStatus::Out,
            4 => PunchStatus::Missing,
            other => PunchStatus::Unknown(other),
        }
    }
}

impl fmt::Display for PunchStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            PunchStatus::In => "IN",
            PunchStatus::Out => "OUT",
            PunchStatus::Missing => "MISSING",
            PunchStatus::Unknown(_) => "UNKNOWN",
        };
        write!(f, "{}", label)
    }
}

/// One raw attendance event for the day.
#[derive(Debug, Clone, PartialEq)]
pub struct PunchRecord {
    pub timestamp: NaiveDateTime,
    pub status: PunchStatus,
    pub is_deleted: bool,
    /// Site or location; only used to group the details view.
    pub premise: Option<String>,
}

impl PunchRecord {
    pub fn new(timestamp: NaiveDateTime, status: PunchStatus) -> Self {
        Self {
            timestamp,
            status,
            is_deleted: false,
            premise: None,
        }
    }

    pub fn at_premise(self, premise: &str) -> Self {
        Self {
            premise: Some(premise.to_string()),
            ..self
        }
    }

    pub fn deleted(self) -> Self {
        Self { is_deleted: true, ..self }
    }

    /// Text of one details-view cell: time (omitted for a missing punch) and status.
    pub fn cell(&self, format: ClockFormat) -> String {
        match self.status {
            PunchStatus::Missing => format!("• {}", self.status),
            PunchStatus::In | PunchStatus::Out => format!("→ {} {}", format_clock(&self.timestamp, format), self.status),
            PunchStatus::Unknown(_) => format!("• {} {}", format_clock(&self.timestamp, format), self.status),
        }
    }
}

/// Direction of an accepted punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchKind {
    In,
    Out,
}

/// A punch that survived normalisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PunchEvent {
    pub time: NaiveDateTime,
    pub kind: PunchKind,
}

impl PunchEvent {
    pub fn punch_in(time: NaiveDateTime) -> Self {
        Self { time, kind: PunchKind::In }
    }

    pub fn punch_out(time: NaiveDateTime) -> Self {
        Self { time, kind: PunchKind::Out }
    }
}

/// Records of a single premise, ordered by time.
#[derive(Debug, Clone, PartialEq)]
pub struct PremiseGroup {
    pub name: String,
    pub records: Vec<PunchRecord>,
}

impl PremiseGroup {
    /// Two cells per row; the last row may hold a single record.
    pub fn rows(&self) -> Vec<(&PunchRecord, Option<&PunchRecord>)> {
        self.records.chunks(2).map(|pair| (&pair[0], pair.get(1))).collect()
    }
}

/// Operations over the day's punch log.
pub trait PunchLog {
    /// Drops deleted and non IN/OUT records, then stable-sorts by time.
    fn normalize(&self) -> Vec<PunchEvent>;
    /// Groups live records by premise in order of first appearance.
    fn by_premise(&self) -> Vec<PremiseGroup>;
}

impl PunchLog for [PunchRecord] {
    fn normalize(&self) -> Vec<PunchEvent> {
        let mut events: Vec<PunchEvent> = self
            .iter()
            .filter(|r| !r.is_deleted)
            .filter_map(|r| match r.status {
                PunchStatus::In => Some(PunchEvent::punch_in(r.timestamp)),
                PunchStatus::Out => Some(PunchEvent::punch_out(r.timestamp)),
                _ => None,
            })
            .collect();
        // `sort_by_key` is stable, equal timestamps keep their input order.
        events.sort_by_key(|e| e.time);
        events
    }

    fn by_premise(&self) -> Vec<PremiseGroup> {
        let mut groups: Vec<PremiseGroup> = Vec::new();
        for record in self.iter().filter(|r| !r.is_deleted) {
            let name = record.premise.as_deref().filter(|p| !p.is_empty()).unwrap_or(UNKNOWN_PREMISE);
            match groups.iter_mut().find(|g| g.name == name) {
                Some(group) => group.records.push(record.clone()),
                None => groups.push(PremiseGroup {
                    name: name.to_string(),
                    records: vec![record.clone()],
                }),
            }
        }
        for group in groups.iter_mut() {
            group.records.sort_by_key(|r| r.timestamp);
        }
        groups
    }
}

/// Free-function form of [`PunchLog::normalize`].
pub fn normalize(records: &[PunchRecord]) -> Vec<PunchEvent> {
    records.normalize()
}
