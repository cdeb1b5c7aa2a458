#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tidbok::libs::store::{JsonStore, MemoryStore, StorageKey, StoragePort};
    use tidbok::libs::tracker::{NewEntry, Tracker};

    struct StoreTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StoreTestContext { _temp_dir: temp_dir }
        }
    }

    fn draft(project: &str, minutes: i64) -> NewEntry {
        NewEntry {
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            project: project.to_string(),
            minutes: Some(minutes),
            ..Default::default()
        }
    }

    // One test exercises the whole file-backed lifecycle: the data directory
    // comes from the environment, so splitting this up would let parallel
    // tests race on HOME.
    #[test_context(StoreTestContext)]
    #[test]
    fn test_json_store_lifecycle(_ctx: &mut StoreTestContext) {
        // Raw key-value behavior.
        let store = JsonStore::new();
        assert_eq!(store.load(StorageKey::Entries), None);

        store.save(StorageKey::Entries, "[1,2,3]").unwrap();
        assert_eq!(store.load(StorageKey::Entries).as_deref(), Some("[1,2,3]"));

        store.remove(StorageKey::Entries).unwrap();
        assert_eq!(store.load(StorageKey::Entries), None);
        // Removing an absent key is not an error.
        store.remove(StorageKey::Entries).unwrap();

        // The ledger survives a reload.
        let mut tracker = Tracker::open();
        let entry = tracker.add_entry(draft("Site A", 90)).unwrap();

        let reloaded = Tracker::open();
        assert_eq!(reloaded.entries.len(), 1);
        assert_eq!(reloaded.entries[0], entry);
        assert_eq!(reloaded.projects, vec!["Site A".to_string()]);

        // The timer snapshot exists exactly while a timer runs.
        let now = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(9, 0, 0).unwrap();
        tracker.start_timer("Site B", None, None, now).unwrap();
        assert!(store.load(StorageKey::Timer).is_some());
        assert!(Tracker::open().timer.is_some());

        tracker.stop_timer(now + chrono::Duration::minutes(5)).unwrap();
        assert!(store.load(StorageKey::Timer).is_none());
        assert!(Tracker::open().timer.is_none());

        // Malformed payloads degrade to an empty ledger instead of failing.
        store.save(StorageKey::Entries, "{ not json at all").unwrap();
        store.save(StorageKey::Projects, "42").unwrap();
        store.save(StorageKey::Timer, "").unwrap();

        let tolerant = Tracker::open();
        assert!(tolerant.entries.is_empty());
        assert!(tolerant.projects.is_empty());
        assert!(tolerant.timer.is_none());
    }

    #[test]
    fn test_memory_store_is_isolated_per_instance() {
        let first = MemoryStore::new();
        let second = MemoryStore::new();
        first.save(StorageKey::Projects, "[\"Site A\"]").unwrap();
        assert!(second.load(StorageKey::Projects).is_none());
    }
}
