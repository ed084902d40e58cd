//! Notification delivery for the "work day complete" event.
//!
//! The evaluator in [`crate::libs::progress`] decides *when* to notify; a
//! [`NotificationSink`] decides *how* and whether the user allowed it.
//! Permission is requested lazily, only once a completion is pending.

use crate::libs::messages::Message;
use crate::{msg_debug, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};

/// Whether the user allows completion notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Permission {
    Granted,
    Denied,
    #[default]
    Undetermined,
}

/// A place completion notices can be shown.
#[allow(async_fn_in_trait)]
pub trait NotificationSink {
    /// Current permission, without prompting.
    fn permission(&self) -> Permission;

    /// Asks the user for permission. Only called while the permission is undetermined.
    async fn request_permission(&mut self) -> Permission;

    /// Displays a notice. Only called with a granted permission.
    fn show(&mut self, title: &str, body: &str) -> Result<()>;

    /// Resolves the permission, requesting it if still undetermined.
    async fn ensure_permission(&mut self) -> bool {
        match self.permission() {
            Permission::Granted => true,
            Permission::Denied => false,
            Permission::Undetermined => self.request_permission().await == Permission::Granted,
        }
    }
}

/// Terminal notifier: asks once through a confirmation prompt, then prints the
/// notice and rings the bell.
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    permission: Permission,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_permission(permission: Permission) -> Self {
        Self { permission }
    }
}

impl NotificationSink for ConsoleNotifier {
    fn permission(&self) -> Permission {
        self.permission
    }

    async fn request_permission(&mut self) -> Permission {
        let prompt = Message::PromptAllowNotifications.to_string();
        let answer = tokio::task::spawn_blocking(move || {
            Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .default(true)
                .interact()
        })
        .await;

        self.permission = match answer {
            Ok(Ok(true)) => Permission::Granted,
            Ok(Ok(false)) => Permission::Denied,
            // no terminal to ask on; try again next time
            Ok(Err(e)) => {
                msg_debug!(Message::NotificationPromptFailed(e.to_string()));
                Permission::Undetermined
            }
            Err(e) => {
                msg_debug!(Message::NotificationPromptFailed(e.to_string()));
                Permission::Undetermined
            }
        };
        self.permission
    }

    fn show(&mut self, title: &str, body: &str) -> Result<()> {
        print!("\x07");
        msg_success!(format!("{}\n   {}", title, body), true);
        Ok(())
    }
}
