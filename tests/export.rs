#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use tempfile::TempDir;
    use tidbok::libs::entry::Entry;
    use tidbok::libs::export::{build_rows, ExportFormat, Exporter};

    fn entry(date: (i32, u32, u32), project: &str, minutes: i64) -> Entry {
        let mut entry = Entry::new(NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(), project);
        entry.minutes = minutes;
        entry
    }

    #[test]
    fn test_build_rows_sorts_ascending_by_date() {
        let entries = vec![entry((2024, 3, 7), "B", 30), entry((2024, 3, 4), "A", 60)];
        let rows = build_rows(&entries);
        assert_eq!(rows[0].date, "2024-03-04");
        assert_eq!(rows[1].date, "2024-03-07");
    }

    #[test]
    fn test_build_rows_formats_hours_to_two_decimals() {
        let rows = build_rows(&[entry((2024, 3, 4), "A", 90)]);
        assert_eq!(rows[0].minutes, 90);
        assert_eq!(rows[0].hours, "1.50");
    }

    #[test]
    fn test_build_rows_collapses_newlines_in_notes() {
        let mut e = entry((2024, 3, 4), "A", 60);
        e.notes = Some("first line\nsecond line\r\nthird".to_string());
        let rows = build_rows(&[e]);
        assert_eq!(rows[0].notes, "first line second line third");
    }

    #[test]
    fn test_build_rows_formats_clock_times() {
        let mut e = entry((2024, 3, 4), "A", 510);
        e.start = NaiveTime::from_hms_opt(9, 0, 0);
        e.end = NaiveTime::from_hms_opt(17, 30, 0);
        let rows = build_rows(&[e]);
        assert_eq!(rows[0].start, "09:00");
        assert_eq!(rows[0].end, "17:30");
    }

    #[test]
    fn test_export_csv_writes_header_and_rows() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("ledger.csv");

        let mut e = entry((2024, 3, 4), "Site A", 90);
        e.activity = Some("A-100".to_string());
        Exporter::new(ExportFormat::Csv, Some(output.clone())).export(&[e]).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), "Date,Project/Site,Order/Activity,Notes,Start,End,Minutes,Hours");
        assert_eq!(lines.next().unwrap(), "2024-03-04,Site A,A-100,,,,90,1.50");
    }

    #[test]
    fn test_export_json_round_trips_rows() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("ledger.json");

        Exporter::new(ExportFormat::Json, Some(output.clone()))
            .export(&[entry((2024, 3, 4), "Site A", 60)])
            .unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        let rows: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(rows[0]["project"], "Site A");
        assert_eq!(rows[0]["hours"], "1.00");
    }

    #[test]
    fn test_export_excel_creates_workbook() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("ledger.xlsx");

        Exporter::new(ExportFormat::Excel, Some(output.clone()))
            .export(&[entry((2024, 3, 4), "Site A", 60)])
            .unwrap();

        assert!(output.exists());
        assert!(std::fs::metadata(&output).unwrap().len() > 0);
    }
}
