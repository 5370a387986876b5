use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::holidays::HolidayCategory;

/// The holiday information attached to a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHoliday {
    /// Merged label of every holiday falling on this day.
    pub label: String,
    /// Categories that contributed to the label.
    pub categories: Vec<HolidayCategory>,
}

impl DayHoliday {
    /// Returns true if a bank holiday falls on this day.
    pub fn is_bank_holiday(&self) -> bool {
        self.categories.contains(&HolidayCategory::Bank)
    }

    /// Returns true if this day is part of a school break.
    pub fn is_school_break(&self) -> bool {
        self.categories.contains(&HolidayCategory::School)
    }
}

/// One calendar date of the generated year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    pub weekday: Weekday,
    /// Position in the year, starting at 1.
    pub ordinal: u32,
    pub holiday: Option<DayHoliday>,
}

impl Day {
    /// Creates a day without any holiday attached.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weekday: date.weekday(),
            ordinal: date.ordinal(),
            holiday: None,
        }
    }

    /// Attaches holiday information to this day.
    pub fn with_holiday(mut self, holiday: Option<DayHoliday>) -> Self {
        self.holiday = holiday;
        self
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Returns true on Saturdays and Sundays.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday, Weekday::Sat | Weekday::Sun)
    }

    /// Returns true if the day should be shaded in calendar grids.
    pub fn is_day_off(&self) -> bool {
        self.is_weekend() || self.holiday.is_some()
    }

    /// Holiday label, if any.
    pub fn label(&self) -> Option<&str> {
        self.holiday.as_ref().map(|h| h.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_day_attributes() {
        let day = Day::new(make_date(2026, 2, 1));
        assert_eq!(day.weekday, Weekday::Sun);
        assert_eq!(day.ordinal, 32);
        assert_eq!((day.year(), day.month(), day.day()), (2026, 2, 1));
        assert!(day.is_weekend());
        assert!(day.is_day_off());
        assert_eq!(day.label(), None);
    }

    #[test]
    fn test_day_with_holiday() {
        let day = Day::new(make_date(2026, 7, 14)).with_holiday(Some(DayHoliday {
            label: "Bastille Day".to_string(),
            categories: vec![HolidayCategory::Bank],
        }));
        assert!(!day.is_weekend());
        assert!(day.is_day_off());
        assert_eq!(day.label(), Some("Bastille Day"));
        let holiday = day.holiday.as_ref().unwrap();
        assert!(holiday.is_bank_holiday());
        assert!(!holiday.is_school_break());
    }
}
