//! Command-line interface.
//!
//! Every subcommand lives in its own module with an `Args` struct (when it
//! takes arguments) and a `cmd` entry point.

pub mod init;
pub mod logout;
pub mod logs;
pub mod settings;
pub mod status;
pub mod watch;

use crate::api::keka::Keka;
use crate::libs::config::Config;
use crate::libs::controller::SessionController;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the Keka portal and the work day")]
    Init(init::InitArgs),
    #[command(about = "Show today's effective, gross and break time")]
    Status,
    #[command(about = "Show today's punch logs grouped by premise")]
    Logs,
    #[command(about = "Live attendance clock with a heads-up when the work day is done")]
    Watch,
    #[command(about = "Show or change the work-day settings")]
    Settings(settings::SettingsArgs),
    #[command(about = "Forget the stored access token")]
    Logout,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Status => status::cmd().await,
            Commands::Logs => logs::cmd().await,
            Commands::Watch => watch::cmd().await,
            Commands::Settings(args) => settings::cmd(args),
            Commands::Logout => logout::cmd(),
        }
    }
}

/// A controller over the configured Keka portal, with the stored settings.
pub(crate) fn session(config: &Config) -> Result<SessionController<Keka>> {
    let keka = config.keka.as_ref().ok_or_else(|| msg_error_anyhow!(Message::KekaNotConfigured))?;
    Ok(SessionController::new(Keka::new(keka)?, config.settings()))
}
