//! School breaks from a local CSV export of the school calendar.
//!
//! Expected columns: `date,vacances_zone_a,vacances_zone_b,vacances_zone_c,nom_vacances`,
//! one row per calendar day.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use agenda_core::{HolidayError, SchoolBreak, SchoolHolidaySource, SchoolZone};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use tracing::debug;

use super::error::{Result, SourceError};
use super::overlaps_year;
use crate::serde::{deserialize_flag, deserialize_optional_string};

/// Name given to flagged days without a break name.
const UNNAMED_BREAK: &str = "Vacances scolaires";

#[derive(Debug, Deserialize)]
struct Row {
    date: NaiveDate,
    #[serde(deserialize_with = "deserialize_flag")]
    vacances_zone_a: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    vacances_zone_b: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    vacances_zone_c: bool,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    nom_vacances: Option<String>,
}

impl Row {
    fn is_day_off(&self, zone: SchoolZone) -> bool {
        match zone {
            SchoolZone::A => self.vacances_zone_a,
            SchoolZone::B => self.vacances_zone_b,
            SchoolZone::C => self.vacances_zone_c,
        }
    }
}

/// Breaks of one zone read from a dataset.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct Dataset {
    pub breaks: Vec<SchoolBreak>,
    /// Years with at least one row, flagged or not.
    pub years: BTreeSet<i32>,
}

/// Reads the rows of `reader` and merges consecutive days off sharing a name
/// into breaks.
pub(crate) fn read_breaks<R: io::Read>(reader: R, zone: SchoolZone) -> Result<Dataset> {
    let mut csv = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut days_off: BTreeMap<NaiveDate, String> = BTreeMap::new();
    let mut years = BTreeSet::new();

    for row in csv.deserialize::<Row>() {
        let row = row?;
        years.insert(row.date.year());
        if row.is_day_off(zone) {
            let name = row
                .nom_vacances
                .unwrap_or_else(|| UNNAMED_BREAK.to_string());
            days_off.insert(row.date, name);
        }
    }

    let mut breaks: Vec<SchoolBreak> = Vec::new();
    for (date, name) in days_off {
        match breaks.last_mut() {
            Some(last) if last.name == name && last.last_day.succ_opt() == Some(date) => {
                last.last_day = date;
            }
            _ => breaks.push(SchoolBreak::new(name, date, date)),
        }
    }
    Ok(Dataset { breaks, years })
}

/// School holiday source backed by a CSV file.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
    name: String,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self, year: i32, zone: SchoolZone) -> Result<Vec<SchoolBreak>> {
        let file = std::fs::File::open(&self.path)?;
        let dataset = read_breaks(io::BufReader::new(file), zone)?;
        if !dataset.years.contains(&year) {
            return Err(SourceError::NotCovered {
                zone: zone.dataset_name().to_string(),
                year,
            });
        }
        Ok(dataset
            .breaks
            .into_iter()
            .filter(|b| overlaps_year(b, year))
            .collect())
    }
}

impl SchoolHolidaySource for CsvFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn school_breaks(
        &self,
        year: i32,
        zone: SchoolZone,
    ) -> std::result::Result<Vec<SchoolBreak>, HolidayError> {
        let breaks = self.load(year, zone).map_err(|e| {
            HolidayError::DataSource(format!("{}: {e}", self.path.display()))
        })?;
        debug!(path = %self.name, breaks = breaks.len(), %zone, year, "read school breaks");
        Ok(breaks)
    }
}
