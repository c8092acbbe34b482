//! In-memory trip table for one city.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Week ordering used when asking for a day, Saturday first.
pub const DAYS_OF_WEEK: [Weekday; 7] = [
    Weekday::Sat,
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Full English day name, e.g. "Monday".
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parses a full day name, ignoring case.
pub fn parse_day_name(name: &str) -> Option<Weekday> {
    DAYS_OF_WEEK
        .iter()
        .copied()
        .find(|d| day_name(*d).eq_ignore_ascii_case(name.trim()))
}

/// A single trip with its derived time columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: Option<String>,
    /// Seconds.
    pub trip_duration: Option<f64>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    // derived from start_time
    pub month: u32,
    pub day_of_week: Weekday,
    pub hour: u32,
}

impl Trip {
    /// A trip with only its start time set; derived columns are filled in.
    pub fn starting_at(start_time: NaiveDateTime) -> Self {
        Trip {
            start_time,
            end_time: None,
            trip_duration: None,
            start_station: None,
            end_station: None,
            user_type: None,
            gender: None,
            birth_year: None,
            month: start_time.month(),
            day_of_week: start_time.weekday(),
            hour: start_time.hour(),
        }
    }

    pub fn day_name(&self) -> &'static str {
        day_name(self.day_of_week)
    }
}

/// Which optional demographic columns a city's dataset carries.
///
/// Decided once from the CSV header at load time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSchema {
    pub gender: bool,
    pub birth_year: bool,
}

impl TableSchema {
    pub fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Self {
        let mut schema = TableSchema::default();
        for header in headers {
            match header.trim() {
                "Gender" => schema.gender = true,
                "Birth Year" => schema.birth_year = true,
                _ => {}
            }
        }
        schema
    }
}

/// Ordered trips for one city.
#[derive(Debug, Clone)]
pub struct TripTable {
    city: String,
    schema: TableSchema,
    trips: Vec<Trip>,
}

impl TripTable {
    pub fn new(city: impl Into<String>, schema: TableSchema, trips: Vec<Trip>) -> Self {
        Self {
            city: city.into(),
            schema,
            trips,
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn schema(&self) -> TableSchema {
        self.schema
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Keeps only the trips matching `keep`, preserving order.
    pub fn retain(mut self, keep: impl FnMut(&Trip) -> bool) -> Self {
        self.trips.retain(keep);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_derived_columns() {
        let trip = Trip::starting_at(ts("2017-06-23 15:09:32"));
        assert_eq!(trip.month, 6);
        assert_eq!(trip.hour, 15);
        assert_eq!(trip.day_of_week, Weekday::Fri);
        assert_eq!(trip.day_name(), "Friday");
    }

    #[test]
    fn test_parse_day_name() {
        assert_eq!(parse_day_name("sunday"), Some(Weekday::Sun));
        assert_eq!(parse_day_name("SATURDAY"), Some(Weekday::Sat));
        assert_eq!(parse_day_name("funday"), None);
    }

    #[test]
    fn test_days_start_on_saturday() {
        assert_eq!(DAYS_OF_WEEK[0], Weekday::Sat);
        assert_eq!(DAYS_OF_WEEK[6], Weekday::Fri);
    }

    #[test]
    fn test_schema_from_headers() {
        let full = TableSchema::from_headers(["Start Time", "Gender", "Birth Year"]);
        assert!(full.gender && full.birth_year);

        let core = TableSchema::from_headers(["Start Time", "User Type"]);
        assert_eq!(core, TableSchema::default());
    }

    #[test]
    fn test_retain_preserves_order() {
        let trips = vec![
            Trip::starting_at(ts("2017-01-01 08:00:00")),
            Trip::starting_at(ts("2017-02-01 09:00:00")),
            Trip::starting_at(ts("2017-01-02 10:00:00")),
        ];
        let table = TripTable::new("chicago", TableSchema::default(), trips);
        let january = table.retain(|t| t.month == 1);

        let hours: Vec<u32> = january.trips().iter().map(|t| t.hour).collect();
        assert_eq!(hours, vec![8, 10]);
    }
}
