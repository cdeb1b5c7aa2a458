//! Clock-time arithmetic and calendar helpers.
//!
//! Converts between `HH:MM` strings and minute counts, formats minute totals
//! for display and export, and computes ISO-8601 week coordinates and the
//! Monday-start week window used by the filtered views.

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime, Timelike};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Parses a `HH:MM` clock-time string.
pub fn parse_hm(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT).map_err(|_| msg_error_anyhow!(Message::InvalidClockTime(raw.to_string())))
}

/// Parses a `YYYY-MM-DD` date string.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| msg_error_anyhow!(Message::InvalidDate(raw.to_string())))
}

/// Minute of day for a clock time. Seconds are ignored.
pub fn minute_of_day(time: NaiveTime) -> i64 {
    time.hour() as i64 * 60 + time.minute() as i64
}

/// Difference between two `HH:MM` strings in minutes.
///
/// The result may be zero or negative; callers reject non-positive durations
/// where that is a business rule.
pub fn diff_minutes(start: &str, end: &str) -> Result<i64> {
    Ok(minute_of_day(parse_hm(end)?) - minute_of_day(parse_hm(start)?))
}

/// Minute difference between two already-parsed clock times.
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    minute_of_day(end) - minute_of_day(start)
}

/// Formats a minute total as zero-padded `HH:MM`.
///
/// The hours component is not wrapped at 24, so `format_hm(1500)` yields
/// `"25:00"`. Negative totals clamp to `"00:00"`.
pub fn format_hm(total_minutes: i64) -> String {
    let total = total_minutes.max(0);
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Formats a minute total as decimal hours with two places, e.g. `"1.50"`.
pub fn format_hours(total_minutes: i64) -> String {
    format!("{:.2}", total_minutes as f64 / 60.0)
}

/// The local calendar date, i.e. the user's wall-clock day rather than the
/// UTC day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// ISO-8601 week coordinates `(year, week)` for a date.
///
/// Near year boundaries the ISO week-year can differ from the calendar year:
/// 2021-01-01 belongs to week 53 of ISO year 2020.
pub fn iso_week(date: NaiveDate) -> (i32, u32) {
    let week = date.iso_week();
    (week.year(), week.week())
}

/// ISO week label in `YYYY-Www` form, e.g. `"2020-W53"`.
///
/// Zero-padding keeps lexicographic ordering consistent with chronological
/// ordering within a year.
pub fn year_week(date: NaiveDate) -> String {
    let (year, week) = iso_week(date);
    format!("{}-W{:02}", year, week)
}

/// Inclusive Monday-start 7-day window containing `reference`.
pub fn week_window(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = reference - Duration::days(reference.weekday().num_days_from_monday() as i64);
    (monday, monday + Duration::days(6))
}
