//! Language used for month, weekday and holiday names.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Display language of the generated agenda.
///
/// Passed explicitly to whatever needs localized text; there is no
/// process-wide locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

const WEEKDAYS_EN: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const WEEKDAYS_FR: [&str; 7] = [
    "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
];

const WEEKDAYS_SHORT_EN: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const WEEKDAYS_SHORT_FR: [&str; 7] = ["lun.", "mar.", "mer.", "jeu.", "ven.", "sam.", "dim."];

impl Locale {
    /// Full month name for `month` in `1..=12`.
    ///
    /// Out-of-range months yield an empty string.
    pub fn month_name(self, month: u32) -> &'static str {
        let table = match self {
            Locale::En => &MONTHS_EN,
            Locale::Fr => &MONTHS_FR,
        };
        month
            .checked_sub(1)
            .and_then(|i| table.get(i as usize))
            .copied()
            .unwrap_or("")
    }

    /// Full weekday name.
    pub fn weekday_name(self, weekday: Weekday) -> &'static str {
        let i = weekday.num_days_from_monday() as usize;
        match self {
            Locale::En => WEEKDAYS_EN[i],
            Locale::Fr => WEEKDAYS_FR[i],
        }
    }

    /// Abbreviated weekday name, used in calendar grid headers.
    pub fn weekday_abbrev(self, weekday: Weekday) -> &'static str {
        let i = weekday.num_days_from_monday() as usize;
        match self {
            Locale::En => WEEKDAYS_SHORT_EN[i],
            Locale::Fr => WEEKDAYS_SHORT_FR[i],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a locale tag is not supported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported locale: {0} (expected one of: en, fr)")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    /// Accepts bare language tags as well as POSIX locale names such as
    /// `fr_FR.UTF-8`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = s
            .split(['_', '-', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" | "c" | "posix" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}
