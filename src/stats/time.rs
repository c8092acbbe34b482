use chrono::Weekday;
use std::fmt;

use super::utility::mode;
use super::{banner, or_no_data};
use crate::table::{TripTable, day_name};

/// Most common month, day of week and start hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub popular_month: Option<u32>,
    pub popular_day: Option<Weekday>,
    pub popular_hour: Option<u32>,
}

pub fn time_stats(table: &TripTable) -> TimeStats {
    let trips = table.trips();
    TimeStats {
        popular_month: mode(trips.iter().map(|t| t.month)),
        popular_day: mode(trips.iter().map(|t| t.day_of_week)),
        popular_hour: mode(trips.iter().map(|t| t.hour)),
    }
}

impl fmt::Display for TimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", banner("Time"))?;
        write!(
            f,
            "\n\nThe Most Common Month is: {}\n",
            or_no_data(self.popular_month)
        )?;
        write!(
            f,
            "\n\nThe Most Common Day of the week is: {}\n",
            or_no_data(self.popular_day.map(day_name))
        )?;
        write!(
            f,
            "\n\nThe Most Common Hour is: {}\n",
            or_no_data(self.popular_hour)
        )
    }
}
