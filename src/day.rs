//! Day-of-year helpers.
//!
//! Verse-of-the-day resources are addressed by ordinal day (1–366). These
//! helpers convert the usual date representations into that ordinal.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

use crate::error::{Result, YouVersionError};

/// Day of the year for the given date (1..=366).
pub fn day_of_year(date: NaiveDate) -> u16 {
    date.ordinal() as u16
}

/// Day of the year for the local date right now.
pub fn current_day_of_year() -> u16 {
    day_of_year(Local::now().date_naive())
}

/// Day of the year for a UNIX timestamp (seconds, UTC).
pub fn day_of_year_from_timestamp(secs: i64) -> Result<u16> {
    let dt =
        DateTime::from_timestamp(secs, 0).ok_or(YouVersionError::InvalidTimestamp { secs })?;
    Ok(day_of_year(dt.date_naive()))
}

/// Day of the year for an ISO-8601 date or datetime string
/// (`2024-03-30` or `2024-03-30T12:00:00`).
pub fn day_of_year_from_iso_date(value: &str) -> Result<u16> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(day_of_year(date));
    }

    let dt = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")?;
    Ok(day_of_year(dt.date()))
}
