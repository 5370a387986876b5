//! Serde helper functions for holiday datasets.
//!
//! The open data API publishes instants in UTC while breaks are whole local
//! days, and the CSV export spells booleans `True`/`False`.

use chrono::{DateTime, Duration, NaiveDate};
use serde::{Deserialize, Deserializer};

/// Deserialize an RFC 3339 instant into the nearest calendar date.
///
/// `2025-12-19T23:00:00+00:00` is midnight in Paris and becomes 2025-12-20.
/// Plain `YYYY-MM-DD` dates are accepted as is.
pub fn deserialize_nearest_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_nearest_date(&s).map_err(serde::de::Error::custom)
}

pub(crate) fn parse_nearest_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(s)
        .map(|instant| (instant.naive_utc() + Duration::hours(12)).date())
        .map_err(|e| format!("invalid date {s:?}: {e}"))
}

/// Deserialize a `True`/`False` flag, case insensitive. Empty cells are false.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid flag {other:?} (expected True or False)"
        ))),
    }
}

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}
