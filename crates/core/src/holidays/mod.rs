//! School and bank holidays.
//!
//! Bank holidays are computed here from the Easter date and fixed-date rules.
//! School breaks come from a [`SchoolHolidaySource`]; implementations that
//! perform I/O live outside this crate.

mod bank;
mod error;
mod resolver;
mod types;
mod zones;

pub use bank::{bank_holidays, easter_sunday};
pub use error::{HolidayError, Result};
pub use resolver::{HolidayResolver, SchoolHolidaySource};
pub use types::{Holiday, HolidayCategory, HolidaySet, SchoolBreak};
pub use zones::{BankZone, SchoolZone};
