//! Core library modules of kekatime.
//!
//! - **Attendance core**: punch normalisation, metrics, ticker, progress
//! - **Session**: the controller owning cache, ticker and notification latch
//! - **Infrastructure**: configuration, data storage, encrypted token, messages
//! - **Presentation**: terminal tables and the notification sink
//!
//! ```rust
//! use kekatime::libs::metrics::compute_metrics;
//! use kekatime::libs::punch::{PunchLog, PunchRecord, PunchStatus};
//! use kekatime::libs::settings::Settings;
//! use chrono::NaiveDate;
//!
//! let at = |h, m| NaiveDate::from_ymd_opt(2025, 3, 3).unwrap().and_hms_opt(h, m, 0).unwrap();
//! let log = vec![
//!     PunchRecord::new(at(9, 0), PunchStatus::In),
//!     PunchRecord::new(at(13, 0), PunchStatus::Out),
//! ];
//!
//! let snapshot = compute_metrics(&log.normalize(), at(14, 0), &Settings::default());
//! assert!(!snapshot.is_punched_in);
//! ```

pub mod clock;
pub mod config;
pub mod controller;
pub mod data_storage;
pub mod messages;
pub mod metrics;
pub mod notify;
pub mod progress;
pub mod punch;
pub mod secret;
pub mod settings;
pub mod ticker;
pub mod time;
pub mod view;
