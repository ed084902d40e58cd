//! Live attendance clock.
//!
//! Redraws the chip once per wall-clock second and asks the controller for a
//! snapshot on every tick, so the punch log is revalidated as soon as the
//! cache goes stale. Enter forces a refresh. Settings edited from another
//! terminal are picked up, and the completion notice shows once per
//! punched-in session.

use super::session;
use crate::api::AttendanceSource;
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::config::Config;
use crate::libs::controller::SessionController;
use crate::libs::messages::Message;
use crate::libs::notify::{ConsoleNotifier, NotificationSink};
use crate::libs::ticker;
use crate::libs::time::format_duration;
use crate::libs::view::View;
use crate::{msg_debug, msg_error, msg_info, msg_warning};
use anyhow::Result;
use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

const RELOAD_SETTINGS_EVERY: Duration = Duration::from_secs(5);

/// Drives one controller from the second ticker.
pub struct Watcher<S, C = SystemClock, N = ConsoleNotifier> {
    controller: SessionController<S, C>,
    notifier: tokio::sync::Mutex<N>,
    refresh: Arc<AtomicBool>,
    last_reload: Cell<Instant>,
}

impl<S: AttendanceSource, C: Clock, N: NotificationSink> Watcher<S, C, N> {
    pub fn new(controller: SessionController<S, C>, notifier: N) -> Self {
        Self {
            controller,
            notifier: tokio::sync::Mutex::new(notifier),
            refresh: Arc::new(AtomicBool::new(false)),
            last_reload: Cell::new(Instant::now()),
        }
    }

    pub fn controller(&self) -> &SessionController<S, C> {
        &self.controller
    }

    /// Flag that forces a refresh on the next tick once set.
    pub fn refresh_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.refresh)
    }

    /// One second of the live clock. Returns the chip line to draw, or `None`
    /// while nothing was fetched yet.
    pub async fn on_tick(&self) -> Option<String> {
        let forced = self.refresh.swap(false, Ordering::SeqCst);
        if forced {
            msg_debug!(Message::RefreshRequested);
        }
        self.controller.get_snapshot(forced).await;

        if self.last_reload.get().elapsed() >= RELOAD_SETTINGS_EVERY {
            self.last_reload.set(Instant::now());
            self.reload_settings();
        }

        let view = self.controller.tick()?;
        let settings = self.controller.settings();
        let line = View::chip_line(&view, &settings, &self.controller.status());

        let mut notifier = self.notifier.lock().await;
        self.controller.notify_if_done(&mut *notifier, &view).await;
        Some(line)
    }

    fn reload_settings(&self) {
        match Config::read() {
            Ok(config) => {
                let settings = config.settings();
                if settings != self.controller.settings() {
                    self.controller.on_settings_changed(settings.clone());
                    msg_debug!(Message::SettingsReloaded(format_duration(&settings.target())));
                }
            }
            Err(e) => msg_warning!(Message::ConfigReloadFailed(e.to_string())),
        }
    }
}

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let watcher = Watcher::new(session(&config)?, ConsoleNotifier::new());
    listen_for_enter(watcher.refresh_handle());

    msg_info!(Message::WatchStarted);
    watcher.controller().get_snapshot(true).await;

    let watcher = &watcher;
    ticker::run(
        || SystemClock.now(),
        move || async move {
            if let Some(line) = watcher.on_tick().await {
                redraw(&line);
            }
        },
        shutdown_signal(),
    )
    .await;

    println!();
    msg_info!(Message::WatchStopped);
    Ok(())
}

fn redraw(line: &str) {
    print!("\r\x1b[2K{}", line);
    if let Err(e) = io::stdout().flush() {
        msg_debug!(Message::RedrawFailed(e.to_string()));
    }
}

/// Sets `refresh` for every line read from stdin. Runs on a plain thread so a
/// pending read never holds up runtime shutdown.
fn listen_for_enter(refresh: Arc<AtomicBool>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if line.is_err() {
                break;
            }
            refresh.store(true, Ordering::SeqCst);
        }
    });
}

/// Resolves on SIGTERM or SIGINT (Ctrl+C on Windows).
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => msg_info!(Message::SignalReceived("SIGTERM".to_string())),
                    _ = sigint.recv() => msg_info!(Message::SignalReceived("SIGINT".to_string())),
                }
                return;
            }
            (Err(e), _) | (_, Err(e)) => msg_warning!(Message::SignalHandlerFailed(e.to_string())),
        }
    }

    match tokio::signal::ctrl_c().await {
        Ok(()) => msg_info!(Message::SignalReceived("Ctrl+C".to_string())),
        Err(e) => msg_error!(Message::SignalHandlerFailed(e.to_string())),
    }
}
