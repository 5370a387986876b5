//! agenda_core - calendar, holiday and page model for the agenda generator.
//!
//! This crate is the Functional Core of the project: every function is pure
//! except for the [`holidays::SchoolHolidaySource`] seam, whose implementations
//! live in the binary crate.

pub mod calendar;
pub mod document;
pub mod holidays;
pub mod locale;

pub use calendar::{CalendarError, Day, DayHoliday};
pub use document::{build, Document, Links, Page, PageId, PageKind};
pub use holidays::{
    BankZone, Holiday, HolidayCategory, HolidayError, HolidayResolver, HolidaySet, SchoolBreak,
    SchoolHolidaySource, SchoolZone,
};
pub use locale::Locale;
