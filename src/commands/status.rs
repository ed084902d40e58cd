use super::session;
use crate::libs::config::Config;
use crate::libs::controller::FetchStatus;
use crate::libs::messages::Message;
use crate::libs::progress::completion_ratio;
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_warning};
use anyhow::Result;
use chrono::Local;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let controller = session(&config)?;
    let settings = controller.settings();

    let snapshot = controller.get_snapshot(true).await;
    if let FetchStatus::Unavailable(reason) = controller.status() {
        msg_warning!(Message::DataUnavailable(reason));
        return Ok(());
    }

    msg_print!(Message::StatusHeader(Local::now().format("%Y-%m-%d").to_string()), true);
    if snapshot.first_punch.is_none() {
        msg_info!(Message::NotPunchedInToday);
        return Ok(());
    }

    if let Some(view) = controller.get_ticker_view() {
        View::chip(&view, &settings)?;
        let progress = controller.get_progress(settings.break_policy.counted(view.running_gross, view.running_effective));
        View::progress(&progress, completion_ratio(view.running_gross, view.running_effective, &settings))?;
    }

    match controller.punch_badge() {
        Some(true) => msg_print!(Message::PortalClockedIn),
        Some(false) => msg_print!(Message::PortalClockedOut),
        None => {}
    }
    Ok(())
}
