//! # kekatime - attendance clock for the Keka HR portal
//!
//! Reads the day's punch-in/punch-out log, derives effective, gross and break
//! time, projects the expected checkout and keeps the numbers ticking every
//! second between refreshes.
//!
//! ## Layout
//!
//! - [`libs::punch`], [`libs::metrics`]: the pure calculation core
//! - [`libs::ticker`], [`libs::progress`]: live counters and completion tracking
//! - [`libs::controller`]: the session controller owning cache and ticker state
//! - [`api`]: attendance sources, including the Keka HTTP client
//! - [`commands`]: the `kekatime` command line
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kekatime::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
