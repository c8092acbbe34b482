use std::fmt;

use super::banner;
use crate::error::StatsError;
use crate::table::TripTable;

/// Sum and count over recorded trip durations, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total_seconds: f64,
    pub count: usize,
}

impl DurationStats {
    pub fn total_hours(&self) -> f64 {
        self.total_seconds / 3600.0
    }

    pub fn average_minutes(&self) -> f64 {
        self.total_seconds / self.count as f64 / 60.0
    }
}

/// Totals the recorded durations, skipping trips without one.
///
/// # Errors
///
/// [`StatsError::NoDurations`] when no trip has a duration, since the
/// average would be undefined.
pub fn duration_stats(table: &TripTable) -> Result<DurationStats, StatsError> {
    let (total_seconds, count) = table
        .trips()
        .iter()
        .filter_map(|t| t.trip_duration)
        .filter(|d| !d.is_nan())
        .fold((0.0, 0usize), |(sum, n), d| (sum + d, n + 1));

    if count == 0 {
        return Err(StatsError::NoDurations);
    }

    Ok(DurationStats {
        total_seconds,
        count,
    })
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", banner("Trips Durations"))?;
        write!(
            f,
            "\n\nThe total Duration of all trips is: {:.2} Hours.\n",
            self.total_hours()
        )?;
        write!(
            f,
            "\n\nThe average Duration of all trips is: {:.2} Minutes.\n",
            self.average_minutes()
        )
    }
}
