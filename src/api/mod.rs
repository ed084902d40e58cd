//! Attendance data sources.
//!
//! The metrics core never talks to the network. Everything it needs from the
//! outside world comes through [`AttendanceSource`], which the session
//! controller calls at its only suspension points. The Keka portal client in
//! [`keka`] is the production implementation; tests plug in scripted sources.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kekatime::api::{keka::Keka, AttendanceSource, KekaConfig};
//! use chrono::Local;
//!
//! # async fn demo(config: KekaConfig) -> anyhow::Result<()> {
//! let keka = Keka::new(&config)?;
//! let records = keka.fetch_punch_records(Local::now().date_naive()).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::punch::PunchRecord;
use chrono::NaiveDate;
use thiserror::Error;

pub mod keka;

pub use keka::KekaConfig;

/// Why attendance data could not be obtained.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("The portal rejected the access token")]
    Unauthorized,

    #[error("The portal responded with HTTP {0}")]
    Status(u16),

    #[error("Unexpected response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Provider of the day's punch log and the current clock-in state.
#[allow(async_fn_in_trait)]
pub trait AttendanceSource {
    /// All punch records of `date`, in arrival order.
    async fn fetch_punch_records(&self, date: NaiveDate) -> Result<Vec<PunchRecord>, FetchError>;

    /// Whether the user is clocked in right now, according to the portal.
    async fn fetch_punch_status(&self) -> Result<bool, FetchError>;
}
