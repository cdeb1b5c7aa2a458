//! Wire representation of ledger entries.
//!
//! The backend stores clock times as `HH:MM:SS` and creation stamps as
//! RFC 3339 timestamps, while the local model keeps minute-resolution times
//! and a local timezone stamp. The two pure mapping functions here are the
//! core's entire contract with the wire format: they round-trip `id`,
//! `date`, `project` and `minutes` exactly, and normalize empty-string
//! optionals to absent in both directions.

use crate::libs::entry::{Entry, EntryPatch};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

const ROW_TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryRow {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub date: NaiveDate,
    pub project: String,
    #[serde(default)]
    pub activity: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, with = "hms_option")]
    pub start: Option<NaiveTime>,
    #[serde(default, with = "hms_option")]
    pub end: Option<NaiveTime>,
    pub minutes: i64,
    pub created_at: DateTime<Utc>,
}

/// Maps a local entry onto its wire row.
pub fn entry_to_row(entry: &Entry) -> EntryRow {
    EntryRow {
        id: entry.id.clone(),
        user_id: entry.user_id.clone(),
        date: entry.date,
        project: entry.project.clone(),
        activity: entry.activity.clone(),
        notes: entry.notes.clone(),
        start: entry.start,
        end: entry.end,
        minutes: entry.minutes,
        created_at: entry.created_at.with_timezone(&Utc),
    }
}

/// Maps a wire row back onto a local entry.
///
/// Backends sometimes hand back empty strings where a column was never
/// populated; those collapse to absent optionals.
pub fn row_to_entry(row: &EntryRow) -> Entry {
    Entry {
        id: row.id.clone(),
        date: row.date,
        project: row.project.clone(),
        activity: clean(row.activity.clone()),
        notes: clean(row.notes.clone()),
        start: row.start,
        end: row.end,
        minutes: row.minutes,
        created_at: row.created_at.with_timezone(&Local),
        user_id: clean(row.user_id.clone()),
    }
}

/// Builds the partial-row JSON body for a remote update from a local patch.
///
/// Only touched fields appear in the object; cleared optionals become
/// explicit nulls so the backend column is emptied rather than left alone.
pub fn patch_to_json(patch: &EntryPatch) -> serde_json::Value {
    let mut body = serde_json::Map::new();
    if let Some(date) = patch.date {
        body.insert("date".into(), json!(date));
    }
    if let Some(project) = &patch.project {
        body.insert("project".into(), json!(project));
    }
    if let Some(activity) = &patch.activity {
        body.insert("activity".into(), json!(activity));
    }
    if let Some(notes) = &patch.notes {
        body.insert("notes".into(), json!(notes));
    }
    if let Some(start) = &patch.start {
        body.insert("start".into(), json!(start.map(|t| t.format(ROW_TIME_FORMAT).to_string())));
    }
    if let Some(end) = &patch.end {
        body.insert("end".into(), json!(end.map(|t| t.format(ROW_TIME_FORMAT).to_string())));
    }
    if let Some(minutes) = patch.minutes {
        body.insert("minutes".into(), json!(minutes));
    }
    serde_json::Value::Object(body)
}

fn clean(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Serde adapter storing optional clock times as `HH:MM:SS` strings.
mod hms_option {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(time) => serializer.serialize_some(&time.format(ROW_TIME_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.filter(|s| !s.is_empty()) {
            Some(raw) => NaiveTime::parse_from_str(&raw, ROW_TIME_FORMAT)
                .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M"))
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
