use std::fmt;

use super::utility::mode;
use super::{banner, or_no_data};
use crate::table::TripTable;

/// Most common start station, end station and start/end pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub popular_start: Option<String>,
    pub popular_end: Option<String>,
    /// (start, end). Only trips with both stations recorded count.
    pub popular_trip: Option<(String, String)>,
}

pub fn station_stats(table: &TripTable) -> StationStats {
    let trips = table.trips();
    let starts = trips.iter().filter_map(|t| t.start_station.as_deref());
    let ends = trips.iter().filter_map(|t| t.end_station.as_deref());
    let pairs = trips
        .iter()
        .filter_map(|t| Some((t.start_station.as_deref()?, t.end_station.as_deref()?)));

    StationStats {
        popular_start: mode(starts).map(str::to_string),
        popular_end: mode(ends).map(str::to_string),
        popular_trip: mode(pairs).map(|(start, end)| (start.to_string(), end.to_string())),
    }
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", banner("Stations"))?;
        write!(
            f,
            "\n\nThe Most Common Start Station is: {}\n",
            or_no_data(self.popular_start.as_deref())
        )?;
        write!(
            f,
            "\n\nThe Most Common End Station is: {}\n",
            or_no_data(self.popular_end.as_deref())
        )?;
        match &self.popular_trip {
            Some((start, end)) => write!(
                f,
                "\n\nThe Most Common Trip is: (from) {start} (to) {end}\n"
            ),
            None => write!(f, "\n\nThe Most Common Trip is: no data\n"),
        }
    }
}
