//! Reads a city's trip CSV into a [`TripTable`] and applies month/day filters.

use chrono::NaiveDateTime;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use crate::catalog::CityCatalog;
use crate::error::LoadError;
use crate::filters::{DayFilter, MonthFilter, Selection};
use crate::table::{TableSchema, Trip, TripTable};

/// Columns every city dataset must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Start Time",
    "Start Station",
    "End Station",
    "Trip Duration",
    "User Type",
];

/// Names a row-index column gets when a data frame is exported with its index.
const INDEX_COLUMNS: [&str; 2] = ["Unnamed: 0", ""];

const START_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
];

/// A row as it appears in the CSV. Columns not named here are ignored.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration", default)]
    trip_duration: Option<f64>,
    #[serde(rename = "Start Station", default)]
    start_station: Option<String>,
    #[serde(rename = "End Station", default)]
    end_station: Option<String>,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

fn parse_start_time(value: &str) -> Option<NaiveDateTime> {
    START_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

impl RawTrip {
    fn into_trip(self, start_time: NaiveDateTime) -> Trip {
        Trip {
            end_time: self.end_time,
            trip_duration: self.trip_duration,
            start_station: self.start_station,
            end_station: self.end_station,
            user_type: self.user_type,
            gender: self.gender,
            birth_year: self.birth_year.map(|y| y.round() as i32),
            ..Trip::starting_at(start_time)
        }
    }
}

/// Loads every row of the CSV at `path` into a table for `city`.
///
/// # Errors
///
/// Fails if the file cannot be opened, a required column is missing, a row
/// cannot be decoded, or any Start Time cannot be parsed.
#[tracing::instrument(skip_all, fields(city = %city, path = %path.display()))]
pub fn load_table(city: &str, path: &Path) -> Result<TripTable, LoadError> {
    let started = Instant::now();
    let csv_err = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(file);

    let headers = rdr.headers().map_err(csv_err)?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }
    if headers.get(0).is_some_and(|h| INDEX_COLUMNS.contains(&h)) {
        debug!("Dropping leading index column");
    }
    let schema = TableSchema::from_headers(headers.iter());

    let mut trips = Vec::new();
    for (i, result) in rdr.deserialize().enumerate() {
        let raw: RawTrip = result.map_err(csv_err)?;
        let start_time =
            parse_start_time(&raw.start_time).ok_or_else(|| LoadError::Timestamp {
                path: path.to_path_buf(),
                row: i + 1,
                value: raw.start_time.clone(),
            })?;
        trips.push(raw.into_trip(start_time));
    }

    info!(
        rows = trips.len(),
        gender = schema.gender,
        birth_year = schema.birth_year,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Trip table loaded"
    );
    Ok(TripTable::new(city, schema, trips))
}

/// Keeps only trips in `month` and on `day`. Both filters apply together.
pub fn apply_filters(table: TripTable, month: MonthFilter, day: DayFilter) -> TripTable {
    let before = table.len();

    let table = match month {
        MonthFilter::All => table,
        MonthFilter::Only(m) => table.retain(|t| t.month == m),
    };
    let table = match day {
        DayFilter::All => table,
        DayFilter::Only(d) => table.retain(|t| t.day_of_week == d),
    };

    debug!(before, after = table.len(), %month, %day, "Filters applied");
    table
}

/// Resolves the selected city, loads its data fresh and applies the selection.
pub fn load_data(
    catalog: &CityCatalog,
    data_dir: &Path,
    selection: &Selection,
) -> anyhow::Result<TripTable> {
    let path = catalog.resolve(&selection.city, data_dir)?;
    let table = load_table(&selection.city, &path)?;
    Ok(apply_filters(table, selection.month, selection.day))
}
