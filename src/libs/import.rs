//! Bulk import of spreadsheet exports.
//!
//! Reads a delimited table, maps localized or English column headers onto
//! entry fields, and normalizes loosely formatted cells. A row is accepted
//! only when, after normalization, it has a date, a project, and a positive
//! minute count (supplied directly or derived from start/end). Rejected rows
//! are dropped silently; only the aggregate counts are surfaced to the user.
//!
//! Real-world exports are messy: the reader sniffs `,` vs `;` delimiters and
//! falls back to Windows-1252 decoding when the bytes are not valid UTF-8.

use crate::libs::clock::{diff_minutes, parse_date, parse_hm};
use crate::libs::entry::Entry;
use crate::libs::normalize::{normalize_date, normalize_time};
use anyhow::Result;
use chrono::NaiveTime;
use std::fs;
use std::path::Path;

/// Outcome of an import run: the accepted entries and the dropped-row count.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub entries: Vec<Entry>,
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Date,
    Project,
    Activity,
    Notes,
    Start,
    End,
    Minutes,
}

/// Maps a header cell onto an entry field. Norwegian and English spellings
/// are both in circulation.
fn column_role(header: &str) -> Option<Column> {
    match header.trim().to_lowercase().as_str() {
        "dato" | "date" => Some(Column::Date),
        "arbeidssted" | "prosjekt" | "project" | "site" => Some(Column::Project),
        "ordrenr" | "ordre" | "order" | "activity" => Some(Column::Activity),
        "notat" | "kommentar" | "notes" => Some(Column::Notes),
        "start" | "fra" => Some(Column::Start),
        "slutt" | "til" | "end" => Some(Column::End),
        "minutter" | "min" | "minutes" => Some(Column::Minutes),
        _ => None,
    }
}

/// Reads and parses a delimited file from disk.
pub fn read_table(path: &Path) -> Result<ImportReport> {
    let bytes = fs::read(path)?;
    let text = decode(&bytes);
    parse_table(&text)
}

/// Windows spreadsheet exports are frequently Windows-1252 rather than UTF-8.
fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned(),
    }
}

/// Parses delimited text into accepted entries.
pub fn parse_table(text: &str) -> Result<ImportReport> {
    let delimiter = sniff_delimiter(text);
    let mut reader = csv::ReaderBuilder::new().delimiter(delimiter).flexible(true).from_reader(text.as_bytes());

    let columns: Vec<Option<Column>> = reader.headers()?.iter().map(column_role).collect();

    let mut report = ImportReport::default();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(_) => {
                report.skipped += 1;
                continue;
            }
        };

        let cell = |role: Column| -> String {
            columns
                .iter()
                .position(|c| *c == Some(role))
                .and_then(|i| record.get(i))
                .unwrap_or_default()
                .trim()
                .to_string()
        };

        let date = normalize_date(&cell(Column::Date));
        let project = cell(Column::Project);
        let start = normalize_time(&cell(Column::Start));
        let end = normalize_time(&cell(Column::End));
        let minutes = row_minutes(&cell(Column::Minutes), &start, &end);

        let (date, minutes) = match (parse_date(&date).ok(), minutes) {
            (Some(date), Some(minutes)) if !project.is_empty() && minutes > 0 => (date, minutes),
            _ => {
                report.skipped += 1;
                continue;
            }
        };

        let mut entry = Entry::new(date, &project);
        entry.activity = non_empty(cell(Column::Activity));
        entry.notes = non_empty(cell(Column::Notes));
        entry.start = parse_time(&start);
        entry.end = parse_time(&end);
        entry.minutes = minutes;
        report.entries.push(entry);
    }

    Ok(report)
}

/// Positive minute count for a row: the minutes cell when it parses, else
/// the difference of the normalized clock times.
fn row_minutes(raw: &str, start: &str, end: &str) -> Option<i64> {
    if let Ok(minutes) = raw.parse::<i64>() {
        return Some(minutes);
    }
    if start.is_empty() || end.is_empty() {
        return None;
    }
    diff_minutes(start, end).ok()
}

fn parse_time(normalized: &str) -> Option<NaiveTime> {
    if normalized.is_empty() {
        return None;
    }
    parse_hm(normalized).ok()
}

fn non_empty(cell: String) -> Option<String> {
    if cell.is_empty() {
        None
    } else {
        Some(cell)
    }
}

/// Picks `;` when the header line contains more semicolons than commas.
fn sniff_delimiter(text: &str) -> u8 {
    let header = text.lines().next().unwrap_or_default();
    let semicolons = header.matches(';').count();
    let commas = header.matches(',').count();
    if semicolons > commas {
        b';'
    } else {
        b','
    }
}
