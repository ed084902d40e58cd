/// Every user-facing text of the application.
///
/// Variants carry the dynamic parts; the wording lives in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigReloadFailed(String),
    ConfigModuleWorkday,
    SelectConfigModules,
    KekaNotConfigured,

    // === SETTINGS MESSAGES ===
    SettingsSaved,
    SettingsAdjusted(String), // resulting target
    PromptWorkHours,
    PromptWorkMinutes,
    PromptBreakPolicy,
    PromptNotifications,
    PromptClockFormat,
    InvalidBreakPolicy(String),
    InvalidClockFormat(String),

    // === AUTH MESSAGES ===
    PromptKekaBaseUrl,
    PromptKekaToken,
    TokenRemoved,
    TokenNotStored,
    TokenRejected,

    // === FETCH MESSAGES ===
    FetchStarted(u64, bool), // request, forced
    FetchCoalesced,
    StaleResponseDiscarded(u64, u64), // request, cached request
    FetchFailed(String),
    PunchStatusFailed(String),
    InvalidPunchTimestamp(String),
    DataUnavailable(String),

    // === STATUS MESSAGES ===
    StatusHeader(String), // date
    LogsHeader(String),   // date
    NoLogsAvailable,
    NotPunchedInToday,
    PortalClockedIn,
    PortalClockedOut,

    // === WATCH MESSAGES ===
    WatchStarted,
    WatchStopped,
    SignalReceived(String),
    SignalHandlerFailed(String),
    SettingsReloaded(String), // resulting target
    RefreshRequested,
    RedrawFailed(String),

    // === NOTIFICATION MESSAGES ===
    PromptAllowNotifications,
    NotificationPromptFailed(String),
    NotificationFailed(String),
    WorkHoursCompletedTitle,
    WorkHoursCompletedBody,
}
