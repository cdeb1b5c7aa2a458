#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use tidbok::libs::entry::EntryPatch;
    use tidbok::libs::store::MemoryStore;
    use tidbok::libs::tracker::{NewEntry, Tracker};

    fn tracker() -> Tracker {
        Tracker::load(Box::new(MemoryStore::new()))
    }

    fn at(date: (i32, u32, u32), time: (u32, u32, u32)) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(time.0, time.1, time.2)
            .unwrap()
    }

    fn hm(hours: u32, minutes: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hours, minutes, 0).unwrap()
    }

    fn draft(project: &str) -> NewEntry {
        NewEntry {
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            project: project.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_timer_start_stop_produces_entry() {
        let mut tracker = tracker();
        let started = at((2024, 3, 5), (9, 0, 0));

        tracker.start_timer("Site A", Some("A-100".to_string()), None, started).unwrap();
        assert!(tracker.timer.is_some());

        // Stopped 125 seconds later: floors to 2 minutes.
        let entry = tracker.stop_timer(at((2024, 3, 5), (9, 2, 5))).unwrap();
        assert!(tracker.timer.is_none());
        assert_eq!(entry.minutes, 2);
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(entry.start, Some(hm(9, 0)));
        assert_eq!(entry.end, Some(hm(9, 2)));
        assert_eq!(entry.project, "Site A");
        assert_eq!(entry.activity.as_deref(), Some("A-100"));
        assert_eq!(tracker.entries.len(), 1);
    }

    #[test]
    fn test_timer_stop_floors_to_one_minute() {
        let mut tracker = tracker();
        tracker.start_timer("Site A", None, None, at((2024, 3, 5), (9, 0, 0))).unwrap();
        let entry = tracker.stop_timer(at((2024, 3, 5), (9, 0, 20))).unwrap();
        assert_eq!(entry.minutes, 1);
    }

    #[test]
    fn test_second_start_is_rejected_and_timer_untouched() {
        let mut tracker = tracker();
        let first = tracker.start_timer("Site A", None, None, at((2024, 3, 5), (9, 0, 0))).unwrap();
        let result = tracker.start_timer("Site B", None, None, at((2024, 3, 5), (10, 0, 0)));
        assert!(result.is_err());
        assert_eq!(tracker.timer.as_ref().unwrap().id, first.id);
        assert_eq!(tracker.timer.as_ref().unwrap().project, "Site A");
    }

    #[test]
    fn test_start_rejects_blank_project() {
        let mut tracker = tracker();
        assert!(tracker.start_timer("   ", None, None, at((2024, 3, 5), (9, 0, 0))).is_err());
        assert!(tracker.timer.is_none());
    }

    #[test]
    fn test_stop_without_timer_fails() {
        let mut tracker = tracker();
        assert!(tracker.stop_timer(at((2024, 3, 5), (9, 0, 0))).is_err());
    }

    #[test]
    fn test_start_registers_project() {
        let mut tracker = tracker();
        tracker.start_timer("Site B", None, None, at((2024, 3, 5), (9, 0, 0))).unwrap();
        assert_eq!(tracker.projects, vec!["Site B".to_string()]);
    }

    #[test]
    fn test_add_entry_derives_minutes_from_times() {
        let mut tracker = tracker();
        let mut draft = draft("Site A");
        draft.start = Some(hm(9, 0));
        draft.end = Some(hm(17, 30));

        let entry = tracker.add_entry(draft).unwrap();
        assert_eq!(entry.minutes, 510);
    }

    #[test]
    fn test_add_entry_rejects_non_positive_time_span() {
        let mut tracker = tracker();
        let mut backwards = draft("Site A");
        backwards.start = Some(hm(17, 0));
        backwards.end = Some(hm(9, 0));
        assert!(tracker.add_entry(backwards).is_err());

        let mut zero = draft("Site A");
        zero.start = Some(hm(9, 0));
        zero.end = Some(hm(9, 0));
        assert!(tracker.add_entry(zero).is_err());

        assert!(tracker.entries.is_empty());
    }

    #[test]
    fn test_add_entry_accepts_direct_minutes() {
        let mut tracker = tracker();
        let mut draft = draft("Site A");
        draft.minutes = Some(90);
        let entry = tracker.add_entry(draft).unwrap();
        assert_eq!(entry.minutes, 90);
        assert_eq!(entry.start, None);
        assert_eq!(entry.end, None);
    }

    #[test]
    fn test_add_entry_requires_some_duration() {
        let mut tracker = tracker();
        assert!(tracker.add_entry(draft("Site A")).is_err());

        let mut non_positive = draft("Site A");
        non_positive.minutes = Some(0);
        assert!(tracker.add_entry(non_positive).is_err());
    }

    #[test]
    fn test_update_recomputes_minutes_when_times_touched() {
        let mut tracker = tracker();
        let mut draft = draft("Site A");
        draft.start = Some(hm(9, 0));
        draft.end = Some(hm(10, 0));
        let entry = tracker.add_entry(draft).unwrap();

        let patch = EntryPatch {
            end: Some(Some(hm(11, 30))),
            ..Default::default()
        };
        let updated = tracker.update_entry(&entry.id, patch).unwrap();
        assert_eq!(updated.minutes, 150);
    }

    #[test]
    fn test_update_minutes_does_not_back_propagate_times() {
        let mut tracker = tracker();
        let mut draft = draft("Site A");
        draft.start = Some(hm(9, 0));
        draft.end = Some(hm(10, 0));
        let entry = tracker.add_entry(draft).unwrap();

        let patch = EntryPatch {
            minutes: Some(240),
            ..Default::default()
        };
        let updated = tracker.update_entry(&entry.id, patch).unwrap();
        assert_eq!(updated.minutes, 240);
        assert_eq!(updated.start, Some(hm(9, 0)));
        assert_eq!(updated.end, Some(hm(10, 0)));
    }

    #[test]
    fn test_update_with_identical_values_is_idempotent() {
        let mut tracker = tracker();
        let mut draft = draft("Site A");
        draft.start = Some(hm(9, 0));
        draft.end = Some(hm(10, 0));
        let entry = tracker.add_entry(draft).unwrap();

        let patch = EntryPatch {
            date: Some(entry.date),
            project: Some(entry.project.clone()),
            start: Some(entry.start),
            end: Some(entry.end),
            ..Default::default()
        };
        let updated = tracker.update_entry(&entry.id, patch).unwrap();
        assert_eq!(updated, *tracker.find_entry(&entry.id).unwrap());
        assert_eq!(updated.minutes, 60);
    }

    #[test]
    fn test_update_rejecting_patch_leaves_entry_unchanged() {
        let mut tracker = tracker();
        let mut draft = draft("Site A");
        draft.start = Some(hm(9, 0));
        draft.end = Some(hm(10, 0));
        let entry = tracker.add_entry(draft).unwrap();

        // Moving start past end would leave a negative duration.
        let patch = EntryPatch {
            start: Some(Some(hm(12, 0))),
            ..Default::default()
        };
        assert!(tracker.update_entry(&entry.id, patch).is_err());
        assert_eq!(tracker.find_entry(&entry.id).unwrap().minutes, 60);
        assert_eq!(tracker.find_entry(&entry.id).unwrap().start, Some(hm(9, 0)));
    }

    #[test]
    fn test_update_unknown_id_fails() {
        let mut tracker = tracker();
        assert!(tracker.update_entry("no-such-id", EntryPatch::default()).is_err());
    }

    #[test]
    fn test_delete_entry_removes_it() {
        let mut tracker = tracker();
        let mut draft = draft("Site A");
        draft.minutes = Some(30);
        let entry = tracker.add_entry(draft).unwrap();

        tracker.delete_entry(&entry.id).unwrap();
        assert!(tracker.entries.is_empty());
        assert!(tracker.delete_entry(&entry.id).is_err());
    }

    #[test]
    fn test_resolve_entry_id_accepts_unique_prefix() {
        let mut tracker = tracker();
        let mut draft = draft("Site A");
        draft.minutes = Some(30);
        let entry = tracker.add_entry(draft).unwrap();

        let prefix = &entry.id[..8];
        assert_eq!(tracker.resolve_entry_id(prefix).unwrap(), entry.id);
        assert!(tracker.resolve_entry_id("zzzz").is_err());
    }

    #[test]
    fn test_project_list_is_sorted_and_deduplicated() {
        let mut tracker = tracker();
        assert!(tracker.register_project("Site B").unwrap());
        assert!(tracker.register_project("Site A").unwrap());
        assert!(!tracker.register_project("Site B").unwrap());
        assert_eq!(tracker.projects, vec!["Site A".to_string(), "Site B".to_string()]);
    }

    #[test]
    fn test_replace_entries_overwrites_and_folds_projects() {
        let mut tracker = tracker();
        let mut local = draft("Local only");
        local.minutes = Some(30);
        tracker.add_entry(local).unwrap();

        let mut incoming = draft("Cloud site");
        incoming.minutes = Some(60);
        let other = tracker_entry(incoming);

        tracker.replace_entries(vec![other]).unwrap();
        assert_eq!(tracker.entries.len(), 1);
        assert_eq!(tracker.entries[0].project, "Cloud site");
        // Cloud overwrote the entries; the project list keeps growing.
        assert!(tracker.projects.contains(&"Cloud site".to_string()));
    }

    fn tracker_entry(draft: NewEntry) -> tidbok::libs::entry::Entry {
        let mut scratch = Tracker::load(Box::new(MemoryStore::new()));
        scratch.add_entry(draft).unwrap()
    }

    #[test]
    fn test_clear_discards_everything_including_timer() {
        let mut tracker = tracker();
        let mut draft = draft("Site A");
        draft.minutes = Some(30);
        tracker.add_entry(draft).unwrap();
        tracker.start_timer("Site B", None, None, at((2024, 3, 5), (9, 0, 0))).unwrap();

        tracker.clear().unwrap();
        assert!(tracker.entries.is_empty());
        assert!(tracker.projects.is_empty());
        assert!(tracker.timer.is_none());
    }
}
