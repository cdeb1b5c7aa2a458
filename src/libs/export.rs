//! Ledger export to spreadsheet formats.
//!
//! Produces one rectangular table: a fixed header row and one data row per
//! entry, sorted ascending by date. The `Hours` column is the minute total
//! as decimal hours with two places, and embedded newlines in notes are
//! collapsed to spaces so every format stays one-line-per-entry.

use crate::libs::clock::{format_hours, DATE_FORMAT, TIME_FORMAT};
use crate::libs::entry::Entry;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

pub const EXPORT_HEADER: [&str; 8] = ["Date", "Project/Site", "Order/Activity", "Notes", "Start", "End", "Minutes", "Hours"];

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for universal spreadsheet compatibility.
    Csv,
    /// Pretty-printed JSON of the same rows for programmatic use.
    Json,
    /// Excel workbook with a formatted header row.
    Excel,
}

/// One pre-formatted export row.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportRow {
    pub date: String,
    pub project: String,
    pub activity: String,
    pub notes: String,
    pub start: String,
    pub end: String,
    pub minutes: i64,
    pub hours: String,
}

/// Flattens entries into export rows, sorted ascending by date.
pub fn build_rows(entries: &[Entry]) -> Vec<ExportRow> {
    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.date);

    sorted
        .into_iter()
        .map(|entry| ExportRow {
            date: entry.date.format(DATE_FORMAT).to_string(),
            project: entry.project.clone(),
            activity: entry.activity.clone().unwrap_or_default(),
            notes: flatten_notes(entry.notes.as_deref().unwrap_or_default()),
            start: entry.start.map(|t| t.format(TIME_FORMAT).to_string()).unwrap_or_default(),
            end: entry.end.map(|t| t.format(TIME_FORMAT).to_string()).unwrap_or_default(),
            minutes: entry.minutes,
            hours: format_hours(entry.minutes),
        })
        .collect()
}

/// Collapses embedded line breaks to single spaces.
fn flatten_notes(notes: &str) -> String {
    notes.split(['\r', '\n']).filter(|part| !part.is_empty()).collect::<Vec<_>>().join(" ")
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output_path`, or to a default
    /// timestamped file name next to the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("tidbok_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    /// Writes the ledger table in the configured format.
    pub fn export(&self, entries: &[Entry]) -> Result<()> {
        let rows = build_rows(entries);

        match self.format {
            ExportFormat::Csv => self.export_csv(&rows)?,
            ExportFormat::Json => self.export_json(&rows)?,
            ExportFormat::Excel => self.export_excel(&rows)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_csv(&self, rows: &[ExportRow]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(EXPORT_HEADER)?;

        for row in rows {
            wtr.write_record(&[
                row.date.clone(),
                row.project.clone(),
                row.activity.clone(),
                row.notes.clone(),
                row.start.clone(),
                row.end.clone(),
                row.minutes.to_string(),
                row.hours.clone(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, rows: &[ExportRow]) -> Result<()> {
        let json = serde_json::to_string_pretty(rows)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, rows: &[ExportRow]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        for (col, title) in EXPORT_HEADER.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        }

        for (i, row) in rows.iter().enumerate() {
            let r = i as u32 + 1;
            worksheet.write_string(r, 0, &row.date)?;
            worksheet.write_string(r, 1, &row.project)?;
            worksheet.write_string(r, 2, &row.activity)?;
            worksheet.write_string(r, 3, &row.notes)?;
            worksheet.write_string(r, 4, &row.start)?;
            worksheet.write_string(r, 5, &row.end)?;
            worksheet.write_number(r, 6, row.minutes as f64)?;
            worksheet.write_string(r, 7, &row.hours)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
