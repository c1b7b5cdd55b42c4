//! CLI command definitions.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand, ValueEnum};

use eventcal_core::calendar::EventStatus;
use eventcal_core::serde::parse_datetime;

/// Eventcal - Plan events, invite members and browse them month by month
#[derive(Debug, Parser)]
#[command(name = "eventcal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Name of the local user the commands act for.
    #[arg(long, env = "EVENTCAL_USER", default_value = "me")]
    pub user: String,

    /// Seed the calendar with demo events before running the command.
    #[arg(long)]
    pub demo: bool,

    /// Import events from a JSON array of rows before running the command.
    #[arg(long, value_name = "FILE")]
    pub import: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// CLI status filter (with clap ValueEnum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    Running,
    Completed,
}

impl From<StatusFilter> for EventStatus {
    fn from(status: StatusFilter) -> Self {
        match status {
            StatusFilter::Running => EventStatus::Running,
            StatusFilter::Completed => EventStatus::Completed,
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a month grid with your events.
    Month {
        /// Month to show (YYYY-M). Defaults to the current month.
        #[arg(long)]
        month: Option<String>,
    },
    /// List your events.
    List {
        /// Only running or completed events.
        #[arg(long, value_enum)]
        status: Option<StatusFilter>,
    },
    /// Show the calendar feed: invitations first, then your own events.
    Feed,
    /// Find your events starting within a window (inclusive).
    SearchRange {
        /// Window start (YYYY-MM-DDTHH:MM or YYYY-MM-DD HH:MM:SS).
        #[arg(long, value_parser = parse_datetime)]
        from: NaiveDateTime,
        /// Window end.
        #[arg(long, value_parser = parse_datetime)]
        to: NaiveDateTime,
    },
    /// Find events whose title contains the text (case-sensitive).
    SearchTitle {
        #[arg(long)]
        title: String,
    },
}
