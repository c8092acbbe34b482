//! Pages through raw trips five at a time.

use csv::WriterBuilder;
use std::io::Write;

use crate::table::{Trip, TripTable};

pub const PAGE_SIZE: usize = 5;

/// The trips at `start..start + PAGE_SIZE`, clamped to the table. Empty past the end.
pub fn window(table: &TripTable, start: usize) -> &[Trip] {
    let trips = table.trips();
    let from = start.min(trips.len());
    let to = start.saturating_add(PAGE_SIZE).min(trips.len());
    &trips[from..to]
}

fn headers(table: &TripTable) -> Vec<&'static str> {
    let schema = table.schema();
    let mut headers = vec![
        "",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if schema.gender {
        headers.push("Gender");
    }
    if schema.birth_year {
        headers.push("Birth Year");
    }
    headers.extend(["month", "day_of_week", "hour"]);
    headers
}

fn record(table: &TripTable, index: usize, trip: &Trip) -> Vec<String> {
    let text = |v: &Option<String>| v.clone().unwrap_or_default();
    let schema = table.schema();

    let mut fields = vec![
        index.to_string(),
        trip.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
        text(&trip.end_time),
        trip.trip_duration.map(|d| d.to_string()).unwrap_or_default(),
        text(&trip.start_station),
        text(&trip.end_station),
        text(&trip.user_type),
    ];
    if schema.gender {
        fields.push(text(&trip.gender));
    }
    if schema.birth_year {
        fields.push(trip.birth_year.map(|y| y.to_string()).unwrap_or_default());
    }
    fields.push(trip.month.to_string());
    fields.push(trip.day_name().to_string());
    fields.push(trip.hour.to_string());
    fields
}

/// Prints the window starting at `start` as CSV, prefixed with each row's index.
pub fn print_window<W: Write>(table: &TripTable, start: usize, out: &mut W) -> anyhow::Result<()> {
    writeln!(
        out,
        "\nPrinting rows from {} to {} ...\n",
        start,
        start.saturating_add(PAGE_SIZE)
    )?;

    let rows = window(table, start);
    if rows.is_empty() {
        writeln!(out, "(no rows)\n")?;
        return Ok(());
    }

    let mut writer = WriterBuilder::new().from_writer(&mut *out);
    writer.write_record(headers(table))?;
    for (offset, trip) in rows.iter().enumerate() {
        writer.write_record(record(table, start + offset, trip))?;
    }
    writer.flush()?;
    drop(writer);

    writeln!(out, "\n")?;
    Ok(())
}
