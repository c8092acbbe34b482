use std::fmt;

use super::utility::{mode, value_counts};
use super::{banner, or_no_data};
use crate::table::TripTable;

/// Earliest, latest and most common birth year among trips that record one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: Option<i32>,
    pub latest: Option<i32>,
    pub most_common: Option<i32>,
}

/// User type breakdown plus whatever demographics the city's dataset has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    /// `None` when the dataset has no Gender column.
    pub genders: Option<Vec<(String, usize)>>,
    /// `None` when the dataset has no Birth Year column.
    pub birth_years: Option<BirthYearStats>,
}

pub fn user_stats(table: &TripTable) -> UserStats {
    let trips = table.trips();
    let schema = table.schema();

    let counts = |values: Vec<&str>| {
        value_counts(values)
            .into_iter()
            .map(|(v, n)| (v.to_string(), n))
            .collect::<Vec<_>>()
    };

    let user_types = counts(trips.iter().filter_map(|t| t.user_type.as_deref()).collect());

    let genders = schema
        .gender
        .then(|| counts(trips.iter().filter_map(|t| t.gender.as_deref()).collect()));

    let birth_years = schema.birth_year.then(|| {
        let years = || trips.iter().filter_map(|t| t.birth_year);
        BirthYearStats {
            earliest: years().min(),
            latest: years().max(),
            most_common: mode(years()),
        }
    });

    UserStats {
        user_types,
        genders,
        birth_years,
    }
}

fn write_counts(f: &mut fmt::Formatter<'_>, counts: &[(String, usize)]) -> fmt::Result {
    if counts.is_empty() {
        return writeln!(f, "no data");
    }
    let width = counts.iter().map(|(v, _)| v.chars().count()).max().unwrap_or(0);
    for (value, count) in counts {
        writeln!(f, "{value:<width$}    {count}")?;
    }
    Ok(())
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", banner("User Types"))?;
        write!(f, "\nUser types and their counts are: \n\n")?;
        write_counts(f, &self.user_types)?;

        if let Some(genders) = &self.genders {
            write!(f, "\n\nGender types and their counts are: \n\n")?;
            write_counts(f, genders)?;
        }

        if let Some(years) = &self.birth_years {
            write!(
                f,
                "\n\nThe Earliest year of birth is: {}.\n",
                or_no_data(years.earliest)
            )?;
            write!(
                f,
                "\nThe Most Recent year of birth is: {}.\n",
                or_no_data(years.latest)
            )?;
            write!(
                f,
                "\nThe Most common year of birth is: {}.\n",
                or_no_data(years.most_common)
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{TableSchema, Trip};
    use chrono::NaiveDateTime;

    fn trip(user_type: &str, gender: Option<&str>, birth_year: Option<i32>) -> Trip {
        let ts = NaiveDateTime::parse_from_str("2017-01-01 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        Trip {
            user_type: Some(user_type.to_string()),
            gender: gender.map(str::to_string),
            birth_year,
            ..Trip::starting_at(ts)
        }
    }

    #[test]
    fn test_full_demographics() {
        let schema = TableSchema {
            gender: true,
            birth_year: true,
        };
        let table = TripTable::new(
            "chicago",
            schema,
            vec![
                trip("Subscriber", Some("Male"), Some(1985)),
                trip("Customer", None, None),
                trip("Subscriber", Some("Female"), Some(1992)),
                trip("Subscriber", Some("Male"), Some(1992)),
            ],
        );
        let stats = user_stats(&table);

        assert_eq!(
            stats.user_types,
            vec![("Subscriber".to_string(), 3), ("Customer".to_string(), 1)]
        );
        assert_eq!(
            stats.genders,
            Some(vec![("Male".to_string(), 2), ("Female".to_string(), 1)])
        );
        assert_eq!(
            stats.birth_years,
            Some(BirthYearStats {
                earliest: Some(1985),
                latest: Some(1992),
                most_common: Some(1992),
            })
        );

        let text = stats.to_string();
        assert!(text.contains("Gender types and their counts are:"));
        assert!(text.contains("The Earliest year of birth is: 1985."));
        assert!(text.contains("The Most common year of birth is: 1992."));
        assert!(text.contains("Subscriber    3"));
        assert!(text.contains("Customer      1"));
    }

    #[test]
    fn test_counts_align_non_ascii_values() {
        let table = TripTable::new(
            "chicago",
            TableSchema::default(),
            vec![trip("Abonné", None, None), trip("Subscriber", None, None)],
        );
        let text = user_stats(&table).to_string();
        assert!(text.contains("Abonné        1"));
        assert!(text.contains("Subscriber    1"));
    }

    #[test]
    fn test_missing_gender_column_is_skipped() {
        let table = TripTable::new(
            "washington",
            TableSchema::default(),
            vec![trip("Subscriber", None, None), trip("Customer", None, None)],
        );
        let stats = user_stats(&table);

        assert_eq!(stats.genders, None);
        assert_eq!(stats.birth_years, None);

        let text = stats.to_string();
        assert!(text.contains("User types and their counts are:"));
        assert!(!text.contains("Gender"));
        assert!(!text.contains("year of birth"));
    }

    #[test]
    fn test_empty_birth_year_column_reports_no_data() {
        let schema = TableSchema {
            gender: false,
            birth_year: true,
        };
        let table = TripTable::new("chicago", schema, vec![trip("Customer", None, None)]);
        let text = user_stats(&table).to_string();
        assert!(text.contains("The Earliest year of birth is: no data."));
    }
}
