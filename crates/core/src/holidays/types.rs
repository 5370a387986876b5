use std::collections::BTreeSet;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::DayHoliday;

/// Separator used when several holidays fall on the same day.
pub const LABEL_SEPARATOR: &str = " / ";

/// Kind of holiday. Bank holidays sort first when labels are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayCategory {
    Bank,
    School,
}

impl fmt::Display for HolidayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HolidayCategory::Bank => f.write_str("bank"),
            HolidayCategory::School => f.write_str("school"),
        }
    }
}

/// A labeled holiday on a single date.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub category: HolidayCategory,
    pub label: String,
}

impl Holiday {
    pub fn new(date: NaiveDate, label: impl Into<String>, category: HolidayCategory) -> Self {
        Self {
            date,
            category,
            label: label.into(),
        }
    }

    pub fn bank(date: NaiveDate, label: impl Into<String>) -> Self {
        Self::new(date, label, HolidayCategory::Bank)
    }

    pub fn school(date: NaiveDate, label: impl Into<String>) -> Self {
        Self::new(date, label, HolidayCategory::School)
    }
}

/// A contiguous school break, both ends inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolBreak {
    pub name: String,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

impl SchoolBreak {
    pub fn new(name: impl Into<String>, first_day: NaiveDate, last_day: NaiveDate) -> Self {
        Self {
            name: name.into(),
            first_day,
            last_day,
        }
    }

    /// Every day of the break falling in `year`.
    pub fn days_in_year(&self, year: i32) -> impl Iterator<Item = NaiveDate> + '_ {
        self.first_day
            .iter_days()
            .take_while(move |date| *date <= self.last_day && date.year() <= year)
            .filter(move |date| date.year() == year)
    }

    /// One school holiday per day of the break falling in `year`.
    pub fn holidays_in_year(&self, year: i32) -> impl Iterator<Item = Holiday> + '_ {
        self.days_in_year(year)
            .map(move |date| Holiday::school(date, self.name.clone()))
    }
}

/// Ordered, de-duplicated set of holidays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySet {
    holidays: BTreeSet<Holiday>,
}

impl HolidaySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a holiday. Returns false if the exact same holiday was present.
    pub fn insert(&mut self, holiday: Holiday) -> bool {
        self.holidays.insert(holiday)
    }

    /// Merges every holiday of `other` into this set.
    pub fn union(mut self, other: HolidaySet) -> Self {
        self.holidays.extend(other.holidays);
        self
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Holidays in (date, category, label) order.
    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        self.holidays.iter()
    }

    /// Holidays falling on `date`, bank holidays first.
    pub fn on(&self, date: NaiveDate) -> impl Iterator<Item = &Holiday> {
        let first = Holiday::bank(date, String::new());
        self.holidays
            .range(first..)
            .take_while(move |h| h.date == date)
    }

    /// Merges every holiday on `date` into a single label.
    ///
    /// Identical labels are kept once and the rest are joined with
    /// [`LABEL_SEPARATOR`], bank holidays first, then school breaks, each
    /// group in lexical order.
    pub fn day_holiday(&self, date: NaiveDate) -> Option<DayHoliday> {
        let mut labels: Vec<&str> = Vec::new();
        let mut categories: Vec<HolidayCategory> = Vec::new();

        for holiday in self.on(date) {
            if !labels.contains(&holiday.label.as_str()) {
                labels.push(&holiday.label);
            }
            if !categories.contains(&holiday.category) {
                categories.push(holiday.category);
            }
        }

        if labels.is_empty() {
            return None;
        }

        Some(DayHoliday {
            label: labels.join(LABEL_SEPARATOR),
            categories,
        })
    }
}

impl FromIterator<Holiday> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = Holiday>>(iter: I) -> Self {
        Self {
            holidays: iter.into_iter().collect(),
        }
    }
}

impl Extend<Holiday> for HolidaySet {
    fn extend<I: IntoIterator<Item = Holiday>>(&mut self, iter: I) {
        self.holidays.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_holiday_set_deduplicates() {
        let mut set = HolidaySet::new();
        assert!(set.insert(Holiday::bank(make_date(2026, 7, 14), "Bastille Day")));
        assert!(!set.insert(Holiday::bank(make_date(2026, 7, 14), "Bastille Day")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_on_returns_only_matching_date() {
        let set: HolidaySet = [
            Holiday::bank(make_date(2026, 5, 1), "Labour Day"),
            Holiday::school(make_date(2026, 5, 8), "Spring break"),
            Holiday::bank(make_date(2026, 5, 8), "Victory in Europe Day"),
            Holiday::bank(make_date(2026, 5, 14), "Ascension Day"),
        ]
        .into_iter()
        .collect();

        let on_may_8: Vec<_> = set.on(make_date(2026, 5, 8)).collect();
        assert_eq!(on_may_8.len(), 2);
        assert_eq!(on_may_8[0].category, HolidayCategory::Bank);
        assert_eq!(on_may_8[1].category, HolidayCategory::School);
        assert_eq!(set.on(make_date(2026, 5, 2)).count(), 0);
    }

    #[test]
    fn test_on_starts_at_first_holiday_of_date() {
        let date = make_date(2026, 5, 8);
        let set: HolidaySet = [
            Holiday::school(make_date(2026, 5, 7), "Pont"),
            Holiday::school(date, "Pont"),
            Holiday::bank(date, "Armistice 1945"),
            Holiday::bank(date, ""),
            Holiday::bank(make_date(2026, 5, 9), "Later"),
        ]
        .into_iter()
        .collect();

        let on: Vec<(HolidayCategory, &str)> = set
            .on(date)
            .map(|h| (h.category, h.label.as_str()))
            .collect();
        assert_eq!(
            on,
            vec![
                (HolidayCategory::Bank, ""),
                (HolidayCategory::Bank, "Armistice 1945"),
                (HolidayCategory::School, "Pont"),
            ]
        );
        assert_eq!(set.on(make_date(2026, 5, 10)).count(), 0);
    }

    #[test]
    fn test_day_holiday_merges_labels() {
        let date = make_date(2026, 5, 8);
        let set: HolidaySet = [
            Holiday::school(date, "Spring break"),
            Holiday::bank(date, "Victory in Europe Day"),
            Holiday::school(date, "Spring break"),
        ]
        .into_iter()
        .collect();

        let merged = set.day_holiday(date).unwrap();
        assert_eq!(merged.label, "Victory in Europe Day / Spring break");
        assert_eq!(
            merged.categories,
            vec![HolidayCategory::Bank, HolidayCategory::School]
        );
        assert_eq!(set.day_holiday(make_date(2026, 5, 9)), None);
    }

    #[test]
    fn test_day_holiday_keeps_identical_labels_once() {
        let date = make_date(2026, 12, 25);
        let set: HolidaySet = [
            Holiday::bank(date, "Christmas"),
            Holiday::school(date, "Christmas"),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.day_holiday(date).unwrap().label, "Christmas");
    }

    #[test]
    fn test_union() {
        let a: HolidaySet = [Holiday::bank(make_date(2026, 1, 1), "New Year's Day")]
            .into_iter()
            .collect();
        let b: HolidaySet = [Holiday::school(make_date(2026, 1, 2), "Christmas holidays")]
            .into_iter()
            .collect();
        let merged = a.union(b);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_school_break_clipped_to_year() {
        let winter = SchoolBreak::new(
            "Christmas holidays",
            make_date(2025, 12, 20),
            make_date(2026, 1, 4),
        );
        let days_2026: Vec<_> = winter.days_in_year(2026).collect();
        assert_eq!(days_2026.len(), 4);
        assert_eq!(days_2026[0], make_date(2026, 1, 1));

        let days_2025: Vec<_> = winter.days_in_year(2025).collect();
        assert_eq!(days_2025.len(), 12);
        assert_eq!(winter.days_in_year(2027).count(), 0);

        let holidays: Vec<_> = winter.holidays_in_year(2026).collect();
        assert!(holidays
            .iter()
            .all(|h| h.category == HolidayCategory::School && h.label == "Christmas holidays"));
    }
}
