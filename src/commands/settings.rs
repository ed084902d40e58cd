use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::settings::{BreakPolicy, Settings};
use crate::libs::time::{format_duration, ClockFormat};
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use prettytable::{row, Table};

#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// Work hours per day (0-12)
    #[arg(long)]
    hours: Option<u32>,
    /// Minutes on top of the hours (0-59)
    #[arg(long)]
    minutes: Option<u32>,
    /// Whether breaks count towards work time: included or excluded
    #[arg(long)]
    break_policy: Option<BreakPolicy>,
    /// Notify when the work day is complete
    #[arg(long)]
    notifications: Option<bool>,
    /// Clock format: 12h or 24h
    #[arg(long)]
    clock: Option<ClockFormat>,
}

impl SettingsArgs {
    fn is_empty(&self) -> bool {
        self.hours.is_none()
            && self.minutes.is_none()
            && self.break_policy.is_none()
            && self.notifications.is_none()
            && self.clock.is_none()
    }

    fn apply(&self, current: Settings) -> Settings {
        Settings {
            work_hours: self.hours.unwrap_or(current.work_hours),
            work_minutes: self.minutes.unwrap_or(current.work_minutes),
            break_policy: self.break_policy.unwrap_or(current.break_policy),
            notifications_enabled: self.notifications.unwrap_or(current.notifications_enabled),
            clock_format: self.clock.unwrap_or(current.clock_format),
        }
    }
}

pub fn cmd(args: SettingsArgs) -> Result<()> {
    let mut config = Config::read()?;

    if !args.is_empty() {
        let requested = args.apply(config.settings());
        let settings = requested.clone().validated();
        if settings != requested {
            msg_warning!(Message::SettingsAdjusted(format_duration(&settings.target())));
        }
        config.settings = Some(settings);
        config.save()?;
        msg_success!(Message::SettingsSaved);
    }

    print(&config.settings());
    Ok(())
}

fn print(settings: &Settings) {
    let mut table = Table::new();
    table.add_row(row!["TARGET", "BREAKS", "NOTIFICATIONS", "CLOCK"]);
    table.add_row(row![
        format_duration(&settings.target()),
        settings.break_policy,
        if settings.notifications_enabled { "on" } else { "off" },
        settings.clock_format
    ]);
    table.printstd();
}
