//! Calendar dates of a single year.
//!
//! Pure date arithmetic on top of `chrono::NaiveDate`; leap years are left to
//! the date library.

mod error;
mod types;
mod year;

pub use error::{CalendarError, Result};
pub use types::{Day, DayHoliday};
pub use year::{
    days_in_month, days_in_year, days_of_month, days_of_year, is_leap_year, month_grid,
    validate_year, MAX_YEAR, MIN_YEAR,
};
