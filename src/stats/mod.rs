//! Descriptive statistics over a filtered trip table.
//!
//! Each routine computes a report value whose `Display` output depends only on
//! the table. [`report`] renders one to the console followed by how long the
//! computation took.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;
pub mod utility;

use std::fmt;
use std::io::Write;
use std::time::Instant;
use tracing::{info, warn};

use crate::error::StatsError;
use crate::table::TripTable;

pub use duration::{DurationStats, duration_stats};
pub use station::{StationStats, station_stats};
pub use time::{TimeStats, time_stats};
pub use user::{BirthYearStats, UserStats, user_stats};

/// The four report types offered in the statistics menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsKind {
    Time,
    Stations,
    Durations,
    Users,
}

impl StatsKind {
    /// Menu tokens, in menu order.
    pub const TOKENS: [&'static str; 4] = ["1", "2", "3", "4"];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "1" => Some(StatsKind::Time),
            "2" => Some(StatsKind::Stations),
            "3" => Some(StatsKind::Durations),
            "4" => Some(StatsKind::Users),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatsKind::Time => "Time statistics",
            StatsKind::Stations => "Stations statistics",
            StatsKind::Durations => "Trips Durations statistics",
            StatsKind::Users => "User info statistics",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatsReport {
    Time(TimeStats),
    Stations(StationStats),
    Durations(DurationStats),
    Users(UserStats),
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsReport::Time(s) => fmt::Display::fmt(s, f),
            StatsReport::Stations(s) => fmt::Display::fmt(s, f),
            StatsReport::Durations(s) => fmt::Display::fmt(s, f),
            StatsReport::Users(s) => fmt::Display::fmt(s, f),
        }
    }
}

/// Computes one report over `table`.
pub fn compute(kind: StatsKind, table: &TripTable) -> Result<StatsReport, StatsError> {
    Ok(match kind {
        StatsKind::Time => StatsReport::Time(time_stats(table)),
        StatsKind::Stations => StatsReport::Stations(station_stats(table)),
        StatsKind::Durations => StatsReport::Durations(duration_stats(table)?),
        StatsKind::Users => StatsReport::Users(user_stats(table)),
    })
}

/// Computes and prints one report followed by its timing line.
///
/// A [`StatsError`] is printed in place of the report rather than returned.
#[tracing::instrument(skip(table, out), fields(rows = table.len()))]
pub fn report<W: Write>(kind: StatsKind, table: &TripTable, out: &mut W) -> std::io::Result<()> {
    let started = Instant::now();
    let rendered = compute(kind, table).map(|r| r.to_string());
    let elapsed = started.elapsed();

    match rendered {
        Ok(text) => {
            info!(elapsed_ms = elapsed.as_millis() as u64, "Report computed");
            write!(out, "{text}")?;
        }
        Err(e) => {
            warn!(error = %e, "Report failed");
            writeln!(out, "Cannot compute {}: {e}.", kind.label())?;
        }
    }

    write!(
        out,
        "\n\nThis took {:.3} seconds.\n\n\n{}\n",
        elapsed.as_secs_f64(),
        "-".repeat(70)
    )
}

pub(crate) fn banner(title: &str) -> String {
    let rule = "-".repeat(30);
    format!("{rule} Viewing {title} Statistics {rule}")
}

pub(crate) fn or_no_data<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "no data".to_string(), |v| v.to_string())
}
