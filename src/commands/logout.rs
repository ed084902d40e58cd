use crate::{api::keka::Keka, libs::messages::Message, msg_info, msg_success};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    if Keka::secret().forget()? {
        msg_success!(Message::TokenRemoved);
    } else {
        msg_info!(Message::TokenNotStored);
    }
    Ok(())
}
