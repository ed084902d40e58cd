//! Persistent configuration: the Keka portal and the work-day settings.
//!
//! Stored as pretty-printed JSON in the platform data directory. Every section
//! is optional so a fresh install runs with defaults and `init` only asks about
//! the modules the user picks.
//!
//! ```rust,no_run
//! use kekatime::libs::config::Config;
//!
//! let config = Config::read()?;
//! let settings = config.settings();
//! println!("target: {} min", settings.target_minutes());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::KekaConfig;
use crate::libs::messages::Message;
use crate::libs::settings::{BreakPolicy, Settings, MAX_WORK_HOURS, MAX_WORK_MINUTES};
use crate::libs::time::ClockFormat;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// An entry of the `init` module picker.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keka: Option<KekaConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Reads the stored configuration, or the default one when none is stored.
    pub fn read() -> Result<Config> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self) -> Result<()> {
        let file = File::create(Self::path()?)?;
        serde_json::to_writer_pretty(&file, &self)?;
        Ok(())
    }

    /// Removes the stored configuration. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    /// Effective work-day settings, out-of-range values replaced by defaults.
    pub fn settings(&self) -> Settings {
        self.settings.clone().unwrap_or_default().validated()
    }

    /// Interactive setup wizard, pre-filled with the stored values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            KekaConfig::module(),
            ConfigModule {
                key: "workday".to_string(),
                name: Message::ConfigModuleWorkday.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectConfigModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "keka" => config.keka = Some(KekaConfig::init(&config.keka)?),
                "workday" => {
                    msg_print!(Message::ConfigModuleWorkday);
                    config.settings = Some(Self::init_settings(&config.settings())?);
                }
                _ => {}
            }
        }

        Ok(config)
    }

    fn init_settings(default: &Settings) -> Result<Settings> {
        let theme = ColorfulTheme::default();

        let work_hours = Input::with_theme(&theme)
            .with_prompt(Message::PromptWorkHours.to_string())
            .default(default.work_hours)
            .validate_with(|value: &u32| if *value <= MAX_WORK_HOURS { Ok(()) } else { Err("0-12") })
            .interact_text()?;

        let work_minutes = Input::with_theme(&theme)
            .with_prompt(Message::PromptWorkMinutes.to_string())
            .default(default.work_minutes)
            .validate_with(|value: &u32| if *value <= MAX_WORK_MINUTES { Ok(()) } else { Err("0-59") })
            .interact_text()?;

        let policies = [BreakPolicy::Excluded, BreakPolicy::Included];
        let policy = Select::with_theme(&theme)
            .with_prompt(Message::PromptBreakPolicy.to_string())
            .items(&["No, breaks extend the day", "Yes, breaks are part of the day"])
            .default(policies.iter().position(|p| *p == default.break_policy).unwrap_or(0))
            .interact()?;

        let notifications_enabled = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptNotifications.to_string())
            .default(default.notifications_enabled)
            .interact()?;

        let formats = [ClockFormat::H12, ClockFormat::H24];
        let format = Select::with_theme(&theme)
            .with_prompt(Message::PromptClockFormat.to_string())
            .items(&formats.iter().map(|f| f.to_string()).collect::<Vec<_>>())
            .default(formats.iter().position(|f| *f == default.clock_format).unwrap_or(0))
            .interact()?;

        Ok(Settings {
            work_hours,
            work_minutes,
            break_policy: policies[policy],
            notifications_enabled,
            clock_format: formats[format],
        })
    }
}
