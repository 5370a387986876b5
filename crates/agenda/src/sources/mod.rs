//! School holiday data sources.
//!
//! Both sources implement [`agenda_core::SchoolHolidaySource`] and report
//! failures as `HolidayError::DataSource`.

pub mod csv_file;
pub mod error;
pub mod opendata;

use std::collections::BTreeSet;

use agenda_core::SchoolBreak;
use chrono::{Datelike, NaiveDate};

pub use csv_file::CsvFileSource;
pub use error::{Result, SourceError};
pub use opendata::{OpenDataSource, DEFAULT_OPEN_DATA_URL};

/// Orders breaks by first day and drops exact duplicates.
///
/// The open data API returns one row per academy, so the same break appears
/// several times for a zone.
pub(crate) fn dedup_breaks(breaks: impl IntoIterator<Item = SchoolBreak>) -> Vec<SchoolBreak> {
    let unique: BTreeSet<(NaiveDate, NaiveDate, String)> = breaks
        .into_iter()
        .map(|b| (b.first_day, b.last_day, b.name))
        .collect();
    unique
        .into_iter()
        .map(|(first_day, last_day, name)| SchoolBreak::new(name, first_day, last_day))
        .collect()
}

/// True when the break has at least one day in `year`.
pub(crate) fn overlaps_year(school_break: &SchoolBreak, year: i32) -> bool {
    school_break.first_day.year() <= year && school_break.last_day.year() >= year
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_dedup_breaks() {
        let christmas = SchoolBreak::new(
            "Vacances de Noël",
            make_date(2025, 12, 20),
            make_date(2026, 1, 4),
        );
        let winter = SchoolBreak::new(
            "Vacances d'Hiver",
            make_date(2026, 2, 21),
            make_date(2026, 3, 8),
        );
        let breaks = dedup_breaks(vec![winter.clone(), christmas.clone(), christmas.clone()]);
        assert_eq!(breaks, vec![christmas, winter]);
    }

    #[test]
    fn test_overlaps_year() {
        let christmas = SchoolBreak::new(
            "Vacances de Noël",
            make_date(2025, 12, 20),
            make_date(2026, 1, 4),
        );
        assert!(overlaps_year(&christmas, 2025));
        assert!(overlaps_year(&christmas, 2026));
        assert!(!overlaps_year(&christmas, 2027));
    }
}
