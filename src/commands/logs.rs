use super::session;
use crate::libs::config::Config;
use crate::libs::controller::FetchStatus;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use chrono::Local;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let controller = session(&config)?;

    controller.get_snapshot(true).await;
    if let FetchStatus::Unavailable(reason) = controller.status() {
        msg_warning!(Message::DataUnavailable(reason));
        return Ok(());
    }

    msg_print!(Message::LogsHeader(Local::now().format("%Y-%m-%d").to_string()), true);
    View::logs(&controller.premises(), &controller.settings())
}
