//! Terminal tables for the ledger, subtotals, timer status and admin view.

use crate::libs::clock::{format_hm, DATE_FORMAT, TIME_FORMAT};
use crate::libs::entry::Entry;
use crate::libs::filter::WeekTotal;
use crate::libs::timer::RunningTimer;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn entries(entries: &[Entry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "PROJECT", "ORDER", "START", "END", "TIME", "NOTES"]);
        for entry in entries {
            table.add_row(row![
                short_id(&entry.id),
                entry.date.format(DATE_FORMAT),
                entry.project,
                entry.activity.as_deref().unwrap_or("-"),
                clock(entry.start),
                clock(entry.end),
                format_hm(entry.minutes),
                entry.notes.as_deref().unwrap_or(""),
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn day_totals(totals: &[(NaiveDate, i64)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "TIME"]);
        for (date, minutes) in totals {
            table.add_row(row![date.format(DATE_FORMAT), format_hm(*minutes)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn week_totals(totals: &[WeekTotal]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["EMPLOYEE", "WEEK", "TIME", "HOURS"]);
        for total in totals {
            table.add_row(row![
                total.user_id,
                total.year_week,
                format_hm(total.minutes),
                format!("{:.2}", total.minutes as f64 / 60.0),
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn timer(timer: &RunningTimer, now: NaiveDateTime) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["PROJECT", "ORDER", "SINCE", "ELAPSED"]);
        table.add_row(row![
            timer.project,
            timer.activity.as_deref().unwrap_or("-"),
            timer.start_ts.format(TIME_FORMAT),
            format_hm(timer.elapsed_minutes(now)),
        ]);
        table.printstd();

        Ok(())
    }
}

/// Entry ids are UUIDs; the first block is plenty for the CLI to address
/// them and keeps the table narrow.
fn short_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}

/// Renders an optional clock time for a table cell as zero-padded `HH:MM`,
/// falling back to a dash when the entry carries no start/end time.
fn clock(time: Option<NaiveTime>) -> String {
    match time {
        Some(time) => time.format(TIME_FORMAT).to_string(),
        None => "-".to_string(),
    }
}
