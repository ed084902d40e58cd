use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigReloadFailed(error) => format!("Failed to reload configuration: {}", error),
            Message::ConfigModuleWorkday => "Work day".to_string(),
            Message::SelectConfigModules => "Select modules to configure".to_string(),
            Message::KekaNotConfigured => "Keka portal is not configured. Run `kekatime init` first.".to_string(),

            // === SETTINGS MESSAGES ===
            Message::SettingsSaved => "Settings saved".to_string(),
            Message::SettingsAdjusted(target) => format!("Work time out of range, using {}", target),
            Message::PromptWorkHours => "Work hours per day (0-12)".to_string(),
            Message::PromptWorkMinutes => "Additional minutes (0-59)".to_string(),
            Message::PromptBreakPolicy => "Breaks count towards work time?".to_string(),
            Message::PromptNotifications => "Notify when the work day is complete?".to_string(),
            Message::PromptClockFormat => "Clock format".to_string(),
            Message::InvalidBreakPolicy(value) => format!("Unknown break policy '{}', expected 'included' or 'excluded'", value),
            Message::InvalidClockFormat(value) => format!("Unknown clock format '{}', expected '12h' or '24h'", value),

            // === AUTH MESSAGES ===
            Message::PromptKekaBaseUrl => "Keka portal URL (e.g. https://acme.keka.com)".to_string(),
            Message::PromptKekaToken => "Keka access token".to_string(),
            Message::TokenRemoved => "Access token removed".to_string(),
            Message::TokenNotStored => "No access token stored".to_string(),
            Message::TokenRejected => "The access token was rejected. Run `kekatime logout` and enter a fresh one.".to_string(),

            // === FETCH MESSAGES ===
            Message::FetchStarted(request, forced) => format!("Fetching attendance (request #{}, forced: {})", request, forced),
            Message::FetchCoalesced => "Fetch already in flight, serving cached data".to_string(),
            Message::StaleResponseDiscarded(request, cached) => {
                format!("Discarding response of request #{}, cache holds #{}", request, cached)
            }
            Message::FetchFailed(error) => format!("Failed to fetch attendance: {}", error),
            Message::PunchStatusFailed(error) => format!("Failed to fetch clock-in status: {}", error),
            Message::InvalidPunchTimestamp(raw) => format!("Skipping punch with unreadable timestamp '{}'", raw),
            Message::DataUnavailable(error) => format!("Attendance data unavailable: {}", error),

            // === STATUS MESSAGES ===
            Message::StatusHeader(date) => format!("Attendance for {}", date),
            Message::LogsHeader(date) => format!("Punch logs for {}", date),
            Message::NoLogsAvailable => "No Logs Available".to_string(),
            Message::NotPunchedInToday => "You have not punched in today".to_string(),
            Message::PortalClockedIn => "Keka: clocked in".to_string(),
            Message::PortalClockedOut => "Keka: clocked out".to_string(),

            // === WATCH MESSAGES ===
            Message::WatchStarted => "Watching attendance. Press Enter to refresh, Ctrl+C to stop.".to_string(),
            Message::WatchStopped => "Stopped watching".to_string(),
            Message::SignalReceived(signal) => format!("Received {}, shutting down", signal),
            Message::SignalHandlerFailed(error) => format!("Failed to listen for shutdown signals: {}", error),
            Message::SettingsReloaded(target) => format!("Settings reloaded, target {}", target),
            Message::RefreshRequested => "Refresh requested".to_string(),
            Message::RedrawFailed(error) => format!("Failed to redraw the clock: {}", error),

            // === NOTIFICATION MESSAGES ===
            Message::PromptAllowNotifications => "Allow a notification when your work day is complete?".to_string(),
            Message::NotificationPromptFailed(error) => format!("Could not ask for notification permission: {}", error),
            Message::NotificationFailed(error) => format!("Failed to show notification: {}", error),
            Message::WorkHoursCompletedTitle => "Work hours completed 🎉".to_string(),
            Message::WorkHoursCompletedBody => "You’ve completed your work time. It's time to leave 🏡.".to_string(),
        };

        write!(f, "{}", text)
    }
}
