//! Date formatting and day arithmetic on top of `chrono`.
//!
//! The localized formatters go through `chrono`'s locale tables, so month and
//! weekday names come from the library rather than from hand-written lists.

use crate::error::{Result, TippError};
use chrono::{Datelike, Locale, Months, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use serde::Deserialize;
use tracing::debug;

const ISO_FORMAT: &str = "%Y-%m-%d";
const FULL_GERMAN_FORMAT: &str = "%A, %-d. %B %Y";
const FULL_US_FORMAT: &str = "%A, %B %-d, %Y";

/// How a date should be rendered for the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    Iso,
    FullGerman,
    FullUs,
}

/// First column of a rendered month sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

/// `2025-12-31`
pub fn to_iso_string(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// `Dienstag, 22. Januar 2019`
pub fn to_full_german_string(date: NaiveDate) -> String {
    format_localized(date, FULL_GERMAN_FORMAT, Locale::de_DE)
}

/// `Wednesday, January 5, 2022`
pub fn to_full_us_string(date: NaiveDate) -> String {
    format_localized(date, FULL_US_FORMAT, Locale::en_US)
}

// Locale-aware formatting lives on DateTime, so pin the date to midnight UTC.
fn format_localized(date: NaiveDate, fmt: &str, locale: Locale) -> String {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
        .format_localized(fmt, locale)
        .to_string()
}

pub fn format(date: NaiveDate, style: DateStyle) -> String {
    match style {
        DateStyle::Iso => to_iso_string(date),
        DateStyle::FullGerman => to_full_german_string(date),
        DateStyle::FullUs => to_full_us_string(date),
    }
}

/// Number of days between two dates, independent of argument order.
pub fn diff_between_dates(a: NaiveDate, b: NaiveDate) -> i64 {
    a.signed_duration_since(b).num_days().abs()
}

pub fn parse_iso(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, ISO_FORMAT)
        .map_err(|e| TippError::invalid_date(trimmed, e.to_string()))
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(TippError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        TippError::invalid_date(format!("{:04}-{:02}", year, month), "year out of range")
    })
}

pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = first_of_month(year, month)?;
    // December of the last supported year has no following month.
    match first.checked_add_months(Months::new(1)) {
        Some(next) => Ok(diff_between_dates(first, next) as u32),
        None => Ok(31),
    }
}

/// Parses the console entry for the calendar program: `MM YYYY`, `MM/YYYY`
/// or `MM.YYYY`.
pub fn parse_month_year(input: &str) -> Result<(i32, u32)> {
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == '/' || c == '.')
        .filter(|part| !part.is_empty())
        .collect();

    let [month, year] = parts.as_slice() else {
        return Err(TippError::invalid_date(input.trim(), "expected 'MM YYYY'"));
    };

    let month: u32 = month
        .parse()
        .map_err(|_| TippError::invalid_date(input.trim(), "month is not a number"))?;
    let year: i32 = year
        .parse()
        .map_err(|_| TippError::invalid_date(input.trim(), "year is not a number"))?;

    if !(1..=12).contains(&month) {
        return Err(TippError::InvalidMonth(month));
    }
    Ok((year, month))
}

/// Renders a month sheet: title line, weekday header, then one row per week.
pub fn month_calendar(year: i32, month: u32, week_start: WeekStart) -> Result<String> {
    let first = first_of_month(year, month)?;
    let days = days_in_month(year, month)?;
    debug!(year, month, days, ?week_start, "rendering month sheet");

    let (header, offset) = match week_start {
        WeekStart::Monday => (
            "Mo Tu We Th Fr Sa Su",
            first.weekday().num_days_from_monday(),
        ),
        WeekStart::Sunday => (
            "Su Mo Tu We Th Fr Sa",
            first.weekday().num_days_from_sunday(),
        ),
    };

    let cells: Vec<String> = (0..offset)
        .map(|_| "  ".to_string())
        .chain((1..=days).map(|day| format!("{:>2}", day)))
        .collect();

    let mut lines = vec![first.format("%B %Y").to_string(), header.to_string()];
    lines.extend(cells.chunks(7).map(|week| week.join(" ")));
    Ok(lines.join("\n") + "\n")
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
