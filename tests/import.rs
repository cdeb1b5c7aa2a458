#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use tidbok::libs::import::parse_table;

    #[test]
    fn test_import_accepts_norwegian_headers_and_dotted_dates() {
        let report = parse_table("Dato,Arbeidssted,Minutter\n05.03.2024,X,90\n").unwrap();
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.skipped, 0);

        let entry = &report.entries[0];
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(entry.project, "X");
        assert_eq!(entry.minutes, 90);
    }

    #[test]
    fn test_import_drops_row_missing_project_silently() {
        let report = parse_table("Dato,Arbeidssted,Minutter\n05.03.2024,X,90\n06.03.2024,,60\n").unwrap();
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_import_derives_minutes_from_start_and_end() {
        let report = parse_table("Date,Project,Start,End\n2024-03-05,Site A,9:00,1730\n").unwrap();
        assert_eq!(report.entries.len(), 1);

        let entry = &report.entries[0];
        assert_eq!(entry.minutes, 510);
        assert_eq!(entry.start, NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(entry.end, NaiveTime::from_hms_opt(17, 30, 0));
    }

    #[test]
    fn test_import_prefers_supplied_minutes_over_derived() {
        let report = parse_table("Date,Project,Start,End,Minutes\n2024-03-05,Site A,09:00,10:00,45\n").unwrap();
        assert_eq!(report.entries[0].minutes, 45);
    }

    #[test]
    fn test_import_drops_rows_without_positive_duration() {
        let text = "Date,Project,Start,End,Minutes\n\
                    2024-03-05,Site A,17:00,09:00,\n\
                    2024-03-05,Site A,,,0\n\
                    2024-03-05,Site A,,,-30\n";
        let report = parse_table(text).unwrap();
        assert!(report.entries.is_empty());
        assert_eq!(report.skipped, 3);
    }

    #[test]
    fn test_import_drops_rows_with_unparseable_dates() {
        let report = parse_table("Date,Project,Minutes\nsometime,Site A,90\n").unwrap();
        assert!(report.entries.is_empty());
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_import_sniffs_semicolon_delimiter() {
        let report = parse_table("Dato;Arbeidssted;Ordrenr;Minutter\n05.03.2024;Site A;A-100;90\n").unwrap();
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].activity.as_deref(), Some("A-100"));
    }

    #[test]
    fn test_import_keeps_optional_cells_absent_when_empty() {
        let report = parse_table("Date,Project,Activity,Notes,Minutes\n2024-03-05,Site A,,,90\n").unwrap();
        let entry = &report.entries[0];
        assert_eq!(entry.activity, None);
        assert_eq!(entry.notes, None);
    }

    #[test]
    fn test_import_counts_mixed_file_correctly() {
        let text = "Dato,Arbeidssted,Minutter\n\
                    05.03.2024,X,90\n\
                    06.03.2024,,60\n\
                    bogus,X,30\n\
                    07.03.2024,Y,45\n";
        let report = parse_table(text).unwrap();
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.skipped, 2);
    }
}
