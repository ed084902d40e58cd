use crate::libs::controller::{FetchStatus, TickerView};
use crate::libs::messages::Message;
use crate::libs::progress::{completion_ratio, displayed_effective, Progress};
use crate::libs::punch::PremiseGroup;
use crate::libs::settings::Settings;
use crate::libs::time::{format_break_minutes, format_clock, format_duration};
use anyhow::Result;
use prettytable::{row, Table};

const BAR_WIDTH: usize = 30;

pub struct View {}

impl View {
    /// The chip: effective, gross and break time with the expected checkout.
    pub fn chip(view: &TickerView, settings: &Settings) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["CHECK-IN", "EFFECTIVE", "GROSS", "BREAK", "CHECKOUT", "STATUS"]);
        table.add_row(row![
            Self::check_in(view, settings),
            format_duration(&displayed_effective(view.running_gross, view.breaks, settings)),
            format_duration(&view.running_gross),
            format_break_minutes(&view.breaks),
            view.expected_checkout.label(settings.clock_format),
            if view.is_punched_in { "IN" } else { "OUT" }
        ]);
        table.printstd();

        Ok(())
    }

    /// Single-line rendition of the chip for in-place redraws. A failed last
    /// fetch is flagged with ⚠️ while the previous data keeps ticking.
    pub fn chip_line(view: &TickerView, settings: &Settings, status: &FetchStatus) -> String {
        format!(
            "{}{} in {}  {}  gross {}  break {}  checkout {}  {}",
            Self::status_marker(status),
            if view.is_punched_in { "●" } else { "○" },
            Self::check_in(view, settings),
            format_duration(&displayed_effective(view.running_gross, view.breaks, settings)),
            format_duration(&view.running_gross),
            format_break_minutes(&view.breaks),
            view.expected_checkout.label(settings.clock_format),
            Self::progress_bar(completion_ratio(view.running_gross, view.running_effective, settings)),
        )
    }

    /// Check-in time in the configured clock format, `--` before the first IN.
    pub fn check_in(view: &TickerView, settings: &Settings) -> String {
        view.first_punch
            .map(|time| format_clock(&time, settings.clock_format))
            .unwrap_or_else(|| "--".to_string())
    }

    pub fn status_marker(status: &FetchStatus) -> &'static str {
        match status {
            FetchStatus::Unavailable(_) => "⚠️ ",
            _ => "",
        }
    }

    /// Punch logs per premise, two punches per row.
    pub fn logs(groups: &[PremiseGroup], settings: &Settings) -> Result<()> {
        if groups.is_empty() {
            println!("{}", Message::NoLogsAvailable);
            return Ok(());
        }

        for group in groups {
            let mut table = Table::new();
            table.set_titles(row![group.name, ""]);
            for (first, second) in group.rows() {
                table.add_row(row![
                    first.cell(settings.clock_format),
                    second.map(|record| record.cell(settings.clock_format)).unwrap_or_default()
                ]);
            }
            table.printstd();
        }

        Ok(())
    }

    pub fn progress(progress: &Progress, ratio: f64) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["FULFILLED", "REMAINING", "DONE"]);
        table.add_row(row![
            progress.hours_fulfilled,
            progress.time_remaining,
            format!("{}%", progress.completion_percentage)
        ]);
        table.printstd();
        println!("{}", Self::progress_bar(ratio));

        Ok(())
    }

    /// `[██████░░░░] 60.00%` for a ratio in percent.
    pub fn progress_bar(ratio: f64) -> String {
        let ratio = ratio.clamp(0.0, 100.0);
        let filled = ((ratio / 100.0) * BAR_WIDTH as f64).round() as usize;
        format!("[{}{}] {:.2}%", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled), ratio)
    }
}
