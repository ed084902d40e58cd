use super::{AttendanceSource, FetchError};
use crate::libs::messages::Message;
use crate::libs::punch::{PunchRecord, PunchStatus};
use crate::libs::{config::ConfigModule, secret::Secret};
use crate::msg_warning;
use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const TOKEN_FILE: &str = ".keka_token";
const SUMMARY_URL: &str = "k/attendance/api/mytime/attendance/summary";
const CLOCK_IN_URL: &str = "k/default/api/me/clockInDetailsForToday";
const CLOCKED_IN: i64 = 0;

#[derive(Debug, Deserialize)]
pub struct AttendanceSummary {
    #[serde(default)]
    pub data: Vec<AttendanceDay>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDay {
    pub attendance_date: String,
    #[serde(default)]
    pub time_entries: Vec<TimeEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub timestamp: String,
    pub punch_status: i64,
    pub modified_punch_status: Option<i64>,
    #[serde(default)]
    pub is_deleted: bool,
    pub premise_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ClockInResponse {
    data: ClockInDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClockInDetails {
    clock_in_status: i64,
}

impl AttendanceSummary {
    /// Punch records of the day whose `attendanceDate` matches `date`.
    ///
    /// Entries with an unreadable timestamp are skipped.
    pub fn records_for(&self, date: NaiveDate) -> Vec<PunchRecord> {
        let key = date.format("%Y-%m-%d").to_string();
        let Some(day) = self.data.iter().find(|d| d.attendance_date.contains(&key)) else {
            return Vec::new();
        };

        day.time_entries
            .iter()
            .filter_map(|entry| match parse_timestamp(&entry.timestamp) {
                Some(timestamp) => Some(entry.to_record(timestamp)),
                None => {
                    msg_warning!(Message::InvalidPunchTimestamp(entry.timestamp.clone()));
                    None
                }
            })
            .collect()
    }
}

impl TimeEntry {
    fn to_record(&self, timestamp: NaiveDateTime) -> PunchRecord {
        PunchRecord {
            timestamp,
            status: PunchStatus::from(self.modified_punch_status.unwrap_or(self.punch_status)),
            is_deleted: self.is_deleted,
            premise: self.premise_name.clone(),
        }
    }
}

/// Parses a portal timestamp into local wall-clock time.
///
/// Offset-qualified values are converted to the local zone, bare values are
/// taken as local already.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Local).naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// Keka portal client authenticated with a user-supplied bearer token.
pub struct Keka {
    client: Client,
    config: KekaConfig,
    token: String,
}

impl Keka {
    /// Creates a client, reading the stored access token or prompting for it.
    pub fn new(config: &KekaConfig) -> Result<Self> {
        let token = Self::secret().get_or_prompt()?;
        Ok(Self::with_token(config, &token))
    }

    pub fn with_token(config: &KekaConfig, token: &str) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            token: token.trim().to_string(),
        }
    }

    /// Encrypted storage of the access token.
    pub fn secret() -> Secret {
        Secret::new(TOKEN_FILE, &Message::PromptKekaToken.to_string())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let res = self.client.get(self.url(path)).bearer_auth(&self.token).send().await?;

        match res.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(FetchError::Unauthorized),
            status if !status.is_success() => Err(FetchError::Status(status.as_u16())),
            _ => {
                let body = res.text().await?;
                Ok(serde_json::from_str(&body)?)
            }
        }
    }
}

impl AttendanceSource for Keka {
    async fn fetch_punch_records(&self, date: NaiveDate) -> Result<Vec<PunchRecord>, FetchError> {
        let summary: AttendanceSummary = self.get(SUMMARY_URL).await?;
        Ok(summary.records_for(date))
    }

    async fn fetch_punch_status(&self) -> Result<bool, FetchError> {
        let details: ClockInResponse = self.get(CLOCK_IN_URL).await?;
        Ok(details.data.clock_in_status == CLOCKED_IN)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KekaConfig {
    /// Portal root, e.g. `https://acme.keka.com`.
    pub base_url: String,
}

impl KekaConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "keka".to_string(),
            name: "Keka".to_string(),
        }
    }

    pub fn init(config: &Option<KekaConfig>) -> Result<Self> {
        let default = config.clone().unwrap_or(Self { base_url: "".to_string() });
        Ok(Self {
            base_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptKekaBaseUrl.to_string())
                .default(default.base_url)
                .interact_text()?,
        })
    }
}
