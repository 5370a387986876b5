use chrono::{Datelike, NaiveDate};

use super::error::{CalendarError, Result};

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// Checks that `year` can be rendered as a four-digit agenda.
pub fn validate_year(year: i32) -> Result<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::InvalidYear(year))
    }
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    validate_year(year)?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidMonth(month))
}

/// Every date of `year`, January 1st first.
pub fn days_of_year(year: i32) -> Result<Vec<NaiveDate>> {
    let start = first_of_month(year, 1)?;
    Ok(start
        .iter_days()
        .take_while(|date| date.year() == year)
        .collect())
}

/// Number of days in `year` as counted by the date library.
pub fn days_in_year(year: i32) -> Result<u32> {
    let start = first_of_month(year, 1)?;
    Ok(start.iter_days().take_while(|d| d.year() == year).count() as u32)
}

/// Every date of the given month.
pub fn days_of_month(year: i32, month: u32) -> Result<Vec<NaiveDate>> {
    let start = first_of_month(year, month)?;
    Ok(start
        .iter_days()
        .take_while(|date| date.month() == month)
        .collect())
}

pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    Ok(days_of_month(year, month)?.len() as u32)
}

/// Lays the month out as Monday-first weeks.
///
/// Cells before the first day and after the last day of the month are `None`.
pub fn month_grid(year: i32, month: u32) -> Result<Vec<[Option<NaiveDate>; 7]>> {
    let mut weeks = Vec::with_capacity(6);
    let mut week = [None; 7];

    for date in days_of_month(year, month)? {
        let column = date.weekday().num_days_from_monday() as usize;
        week[column] = Some(date);
        if column == 6 {
            weeks.push(week);
            week = [None; 7];
        }
    }
    if week.iter().any(Option::is_some) {
        weeks.push(week);
    }

    Ok(weeks)
}
