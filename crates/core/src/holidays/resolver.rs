use tracing::debug;

use super::bank::bank_holidays;
use super::error::{HolidayError, Result};
use super::types::{HolidaySet, SchoolBreak};
use super::zones::{BankZone, SchoolZone};
use crate::locale::Locale;

/// Provider of school break periods.
///
/// Implementations may perform network or file I/O. Failures are reported as
/// [`HolidayError::DataSource`].
pub trait SchoolHolidaySource {
    /// Short description used in logs.
    fn name(&self) -> &str;

    /// Every break of `zone` overlapping `year`. Breaks may extend past the
    /// year boundaries.
    fn school_breaks(&self, year: i32, zone: SchoolZone) -> Result<Vec<SchoolBreak>>;
}

/// Collects school and bank holidays for a year.
pub struct HolidayResolver {
    locale: Locale,
    school_source: Option<Box<dyn SchoolHolidaySource>>,
}

impl HolidayResolver {
    /// Creates a resolver without a school holiday source. Bank holidays are
    /// computed locally and are always available.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            school_source: None,
        }
    }

    /// Sets the source queried for school breaks.
    pub fn with_school_source(mut self, source: Box<dyn SchoolHolidaySource>) -> Self {
        self.school_source = Some(source);
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Resolves holidays from raw zone identifiers.
    ///
    /// Both identifiers are validated before any source is queried. Without
    /// zones the result is empty.
    pub fn resolve(
        &self,
        year: i32,
        school_zone: Option<&str>,
        bank_zone: Option<&str>,
    ) -> Result<HolidaySet> {
        let school_zone = school_zone.map(str::parse::<SchoolZone>).transpose()?;
        let bank_zone = bank_zone.map(str::parse::<BankZone>).transpose()?;
        self.resolve_zones(year, school_zone, bank_zone)
    }

    /// Resolves holidays for already validated zones.
    pub fn resolve_zones(
        &self,
        year: i32,
        school_zone: Option<SchoolZone>,
        bank_zone: Option<BankZone>,
    ) -> Result<HolidaySet> {
        let mut holidays = HolidaySet::new();
        if school_zone.is_none() && bank_zone.is_none() {
            return Ok(holidays);
        }

        if let Some(zone) = school_zone {
            let source = self.school_source.as_deref().ok_or_else(|| {
                HolidayError::DataSource("no school holiday source configured".to_string())
            })?;
            let breaks = source.school_breaks(year, zone)?;
            debug!(
                source = source.name(),
                zone = %zone,
                breaks = breaks.len(),
                "Fetched school breaks"
            );
            for school_break in &breaks {
                holidays.extend(school_break.holidays_in_year(year));
            }
        }

        if let Some(zone) = bank_zone {
            let bank = bank_holidays(year, zone, self.locale);
            debug!(zone = %zone, count = bank.len(), "Computed bank holidays");
            holidays.extend(bank);
        }

        Ok(holidays)
    }
}
