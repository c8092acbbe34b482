//! The interactive session: pick filters, optionally page through rows,
//! view statistics, then restart or quit.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::config::Settings;
use crate::explore::{PAGE_SIZE, print_window};
use crate::filters::select_filters;
use crate::loader::load_data;
use crate::prompt::Console;
use crate::stats::{StatsKind, report};
use crate::table::TripTable;

enum State {
    SelectFilters,
    OfferExplore(TripTable),
    Explore { table: TripTable, index: usize },
    StatsMenu(TripTable),
    OfferRestart,
    Terminate,
}

impl State {
    fn name(&self) -> &'static str {
        match self {
            State::SelectFilters => "select_filters",
            State::OfferExplore(_) => "offer_explore",
            State::Explore { .. } => "explore",
            State::StatsMenu(_) => "stats_menu",
            State::OfferRestart => "offer_restart",
            State::Terminate => "terminate",
        }
    }
}

pub struct Session<'a, R, W> {
    console: Console<R, W>,
    settings: &'a Settings,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(console: Console<R, W>, settings: &'a Settings) -> Self {
        Self { console, settings }
    }

    /// Runs until the user declines to restart.
    ///
    /// # Errors
    ///
    /// Fails when the input stream closes or the selected city's data cannot be loaded.
    pub fn run(&mut self) -> Result<()> {
        let mut state = State::SelectFilters;

        loop {
            debug!(state = state.name(), "Session state");
            state = match state {
                State::SelectFilters => State::OfferExplore(self.select_and_load()?),
                State::OfferExplore(table) => {
                    let question = format!(
                        "\nWould you like to explore \"{}\" dataset first? (yes / no): ",
                        table.city()
                    );
                    if self.console.confirm(&question)? {
                        State::Explore { table, index: 0 }
                    } else {
                        State::StatsMenu(table)
                    }
                }
                State::Explore { table, index } => {
                    print_window(&table, index, self.console.out())?;
                    let question = format!(
                        "\nWould you like to continue exploring \"{}\" dataset? (yes / no): ",
                        table.city()
                    );
                    if self.console.confirm(&question)? {
                        State::Explore {
                            table,
                            index: index.saturating_add(PAGE_SIZE),
                        }
                    } else {
                        State::StatsMenu(table)
                    }
                }
                State::StatsMenu(table) => {
                    self.stats_menu(&table)?;
                    State::OfferRestart
                }
                State::OfferRestart => {
                    if self.console.confirm("\n\n\nWould you like to restart?")? {
                        State::SelectFilters
                    } else {
                        State::Terminate
                    }
                }
                State::Terminate => {
                    info!("Session finished");
                    return Ok(());
                }
            };
        }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    fn select_and_load(&mut self) -> Result<TripTable> {
        self.console
            .say("\nYou have started a script for exploring bikeshare data in the US.\n")?;
        let selection = select_filters(&mut self.console, &self.settings.catalog)?;
        let table = load_data(&self.settings.catalog, &self.settings.data_dir, &selection)
            .with_context(|| format!("failed to load trip data for {}", selection.city))?;
        info!(city = table.city(), rows = table.len(), "Table ready");
        Ok(table)
    }

    fn stats_menu(&mut self, table: &TripTable) -> Result<()> {
        self.console.say("\n\nLet's get to the statistics...")?;

        loop {
            self.console.say("What type of analysis do you want to see?\n")?;
            for token in StatsKind::TOKENS {
                if let Some(kind) = StatsKind::from_token(token) {
                    self.console.say(&format!("\n{}: {token}", kind.label()))?;
                }
            }

            let token = self.console.choose(&StatsKind::TOKENS)?;
            if let Some(kind) = StatsKind::from_token(&token) {
                report(kind, table, self.console.out())?;
            }

            if !self
                .console
                .confirm("\n\nWould you like to see another type of statistics?")?
            {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CityCatalog, CityEntry};
    use std::env;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn settings(dir_name: &str) -> Settings {
        let dir = env::temp_dir().join(dir_name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("tiny.csv"),
            "Start Time,Trip Duration,Start Station,End Station,User Type\n\
             2017-01-01 08:00:00,60,A,B,Subscriber\n\
             2017-01-01 08:30:00,120,A,C,Customer\n\
             2017-01-02 09:00:00,180,B,C,Subscriber\n",
        )
        .unwrap();

        let catalog = CityCatalog::new(vec![CityEntry {
            name: "tiny".into(),
            file: PathBuf::from("tiny.csv"),
        }])
        .unwrap();
        Settings {
            catalog,
            data_dir: dir,
        }
    }

    fn run(settings: &Settings, script: &str) -> (Result<()>, String) {
        let console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let mut session = Session::new(console, settings);
        let result = session.run();
        let (_, out) = session.into_console().into_parts();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_straight_through_session() {
        let settings = settings("bikeshare_explorer_session_straight");
        let (result, out) = run(&settings, "tiny\nno\nno\n3\nno\nno\n");

        result.unwrap();
        assert!(out.contains("The total Duration of all trips is: 0.10 Hours."));
        assert!(out.contains("The average Duration of all trips is: 2.00 Minutes."));
        assert!(!out.contains("Printing rows"));
    }

    #[test]
    fn test_explore_advances_by_page() {
        let settings = settings("bikeshare_explorer_session_explore");
        let (result, out) = run(&settings, "tiny\nno\nyes\nyes\nno\n1\nno\nno\n");

        result.unwrap();
        assert!(out.contains("Printing rows from 0 to 5 ..."));
        assert!(out.contains("Printing rows from 5 to 10 ..."));
        assert!(out.contains("(no rows)"));
        assert!(out.contains("The Most Common Hour is: 8"));
    }

    #[test]
    fn test_restart_reloads() {
        let settings = settings("bikeshare_explorer_session_restart");
        let script = "tiny\nday\nmonday\nno\n4\nno\nyes\ntiny\nno\nno\n4\nno\nno\n";
        let (result, out) = run(&settings, script);

        result.unwrap();
        assert_eq!(out.matches("You have started a script").count(), 2);
        // Monday has one Subscriber; the unfiltered reload has two
        assert!(out.contains("Subscriber    1"));
        assert!(out.contains("Subscriber    2"));
    }

    #[test]
    fn test_closed_input_ends_with_error() {
        let settings = settings("bikeshare_explorer_session_eof");
        let (result, _) = run(&settings, "tiny\nno\n");
        assert!(result.is_err());
    }
}
