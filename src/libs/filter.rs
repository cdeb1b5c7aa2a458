//! Ledger filtering and aggregation.
//!
//! Selects entries for the day/week/all views and sums minutes per day and,
//! for the admin view, per employee per ISO week.

use crate::libs::clock::{week_window, year_week};
use crate::libs::entry::Entry;
use chrono::NaiveDate;
use clap::ValueEnum;

/// Placeholder owner for rows that reach the admin view without an account id.
pub const UNKNOWN_USER: &str = "unknown";

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum EntryView {
    #[default]
    Day,
    Week,
    All,
}

/// Selects the entries matching `view` relative to `reference`.
///
/// The week view is a Monday-start 7-day window, inclusive on both ends.
pub fn filter_entries(entries: &[Entry], view: EntryView, reference: NaiveDate) -> Vec<Entry> {
    match view {
        EntryView::All => entries.to_vec(),
        EntryView::Day => entries.iter().filter(|e| e.date == reference).cloned().collect(),
        EntryView::Week => {
            let (monday, sunday) = week_window(reference);
            entries.iter().filter(|e| e.date >= monday && e.date <= sunday).cloned().collect()
        }
    }
}

/// Minute totals per date, ordered by first occurrence in `entries`.
pub fn sum_minutes_by_date(entries: &[Entry]) -> Vec<(NaiveDate, i64)> {
    let mut totals: Vec<(NaiveDate, i64)> = Vec::new();
    for entry in entries {
        match totals.iter_mut().find(|(date, _)| *date == entry.date) {
            Some((_, minutes)) => *minutes += entry.minutes,
            None => totals.push((entry.date, entry.minutes)),
        }
    }
    totals
}

/// One admin-view row: total minutes for an employee in an ISO week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekTotal {
    pub user_id: String,
    pub year_week: String,
    pub minutes: i64,
}

/// Minute totals per (employee, ISO week) pair, most recent week first.
///
/// Entries without an owner are bucketed under [`UNKNOWN_USER`]. The
/// descending sort compares the `YYYY-Www` labels lexicographically, which
/// matches chronological order because both components are zero-padded.
pub fn group_by_user_and_week(entries: &[Entry]) -> Vec<WeekTotal> {
    let mut totals: Vec<WeekTotal> = Vec::new();
    for entry in entries {
        let user_id = entry.user_id.clone().unwrap_or_else(|| UNKNOWN_USER.to_string());
        let year_week = year_week(entry.date);
        match totals.iter_mut().find(|t| t.user_id == user_id && t.year_week == year_week) {
            Some(total) => total.minutes += entry.minutes,
            None => totals.push(WeekTotal { user_id, year_week, minutes: entry.minutes }),
        }
    }
    totals.sort_by(|a, b| b.year_week.cmp(&a.year_week).then_with(|| a.user_id.cmp(&b.user_id)));
    totals
}
