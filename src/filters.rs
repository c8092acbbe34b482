//! Asks the user which city to load and how to narrow it down.

use chrono::Weekday;
use std::fmt;
use std::io::{BufRead, Write};
use tracing::info;

use crate::catalog::CityCatalog;
use crate::error::PromptError;
use crate::prompt::Console;
use crate::table::{DAYS_OF_WEEK, day_name, parse_day_name};

const MONTHS: [&str; 12] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    /// 1-12.
    Only(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("All"),
            MonthFilter::Only(m) => write!(f, "{m}"),
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("All"),
            DayFilter::Only(d) => f.write_str(day_name(*d)),
        }
    }
}

/// How the user wants the table narrowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Month,
    Day,
    Both,
    None,
}

impl FilterMode {
    const TOKENS: [&'static str; 4] = ["month", "day", "both", "no"];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "month" => Some(FilterMode::Month),
            "day" => Some(FilterMode::Day),
            "both" => Some(FilterMode::Both),
            "no" => Some(FilterMode::None),
            _ => None,
        }
    }

    fn wants_month(self) -> bool {
        matches!(self, FilterMode::Month | FilterMode::Both)
    }

    fn wants_day(self) -> bool {
        matches!(self, FilterMode::Day | FilterMode::Both)
    }
}

/// Month number for a "1".."12" token.
pub fn parse_month(token: &str) -> Option<u32> {
    token.parse().ok().filter(|m| (1..=12).contains(m))
}

/// City plus optional month and day restrictions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Lower-cased catalog name.
    pub city: String,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl Selection {
    pub fn all(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            month: MonthFilter::All,
            day: DayFilter::All,
        }
    }
}

/// Walks the user through city, filter mode, month and day.
pub fn select_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &CityCatalog,
) -> Result<Selection, PromptError> {
    console.say(&format!(
        "\nChoose one of the {} available cities to start exploring.",
        catalog.len()
    ))?;
    let city = console.choose(&catalog.names())?;

    console.say(
        "\nWould you like to filter based on Month only, Day of Week, Both, or No filters at all?",
    )?;
    let token = console.choose(&FilterMode::TOKENS)?;
    let mode = FilterMode::from_token(&token).ok_or(PromptError::Unrecognized(token))?;

    let mut selection = Selection::all(city.to_lowercase());

    if mode.wants_month() {
        console.say("\nWhich month? (1 = January ... 12 = December)")?;
        let month = console.choose(&MONTHS)?;
        selection.month = parse_month(&month)
            .map(MonthFilter::Only)
            .ok_or(PromptError::Unrecognized(month))?;
    }

    if mode.wants_day() {
        console.say("\nWhich day of the week?")?;
        let tokens: Vec<String> = DAYS_OF_WEEK
            .iter()
            .map(|d| day_name(*d).to_lowercase())
            .collect();
        let options: Vec<&str> = tokens.iter().map(String::as_str).collect();
        let day = console.choose(&options)?;
        selection.day = parse_day_name(&day)
            .map(DayFilter::Only)
            .ok_or(PromptError::Unrecognized(day))?;
    }

    info!(
        city = %selection.city,
        month = %selection.month,
        day = %selection.day,
        "Filters selected"
    );
    Ok(selection)
}
