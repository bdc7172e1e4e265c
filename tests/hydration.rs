#[cfg(test)]
mod tests {
    use gtd::db::memory::MemoryStorage;
    use gtd::db::Storage;
    use gtd::libs::messages::Message;
    use gtd::libs::store::{TaskStore, DEFAULT_STORAGE_KEY};
    use gtd::libs::task::{seed_tasks, Task};

    fn hydrate(storage: MemoryStorage) -> TaskStore<MemoryStorage> {
        TaskStore::hydrate(storage, DEFAULT_STORAGE_KEY)
    }

    #[test]
    fn test_missing_key_yields_seed_without_error() {
        let store = hydrate(MemoryStorage::new());

        let ids: Vec<i64> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.tasks(), seed_tasks().as_slice());
        assert!(store.tasks().iter().all(|t| !t.completed));
        assert!(store.load_error().is_none());
    }

    #[test]
    fn test_seed_is_not_written_back() {
        let store = hydrate(MemoryStorage::new());

        assert_eq!(store.storage().writes, 0);
        assert_eq!(store.storage().get(DEFAULT_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_empty_blob_counts_as_missing() {
        let store = hydrate(MemoryStorage::with(DEFAULT_STORAGE_KEY, ""));

        assert_eq!(store.tasks(), seed_tasks().as_slice());
        assert!(store.load_error().is_none());
    }

    #[test]
    fn test_malformed_blob_yields_seed_with_error() {
        let store = hydrate(MemoryStorage::with(DEFAULT_STORAGE_KEY, "{not json"));

        assert_eq!(store.tasks(), seed_tasks().as_slice());
        assert_eq!(store.load_error(), Some(&Message::TasksLoadFailed));
        assert_eq!(store.load_error().unwrap().to_string(), "Failed to load tasks");
    }

    #[test]
    fn test_wrong_shape_blob_yields_seed_with_error() {
        let store = hydrate(MemoryStorage::with(DEFAULT_STORAGE_KEY, r#"{"id":1,"title":"x","completed":false}"#));

        assert_eq!(store.tasks(), seed_tasks().as_slice());
        assert!(store.load_error().is_some());
    }

    #[test]
    fn test_read_failure_yields_seed_with_error() {
        let mut storage = MemoryStorage::new();
        storage.fail_reads = true;
        let store = hydrate(storage);

        assert_eq!(store.tasks(), seed_tasks().as_slice());
        assert_eq!(store.load_error(), Some(&Message::TasksLoadFailed));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let blob = r#"[{"id":5,"title":"a","completed":false},{"id":5,"title":"b","completed":true}]"#;
        let store = hydrate(MemoryStorage::with(DEFAULT_STORAGE_KEY, blob));

        assert_eq!(store.tasks(), seed_tasks().as_slice());
        assert!(store.load_error().is_some());
    }

    #[test]
    fn test_blank_titles_are_rejected() {
        let blob = r#"[{"id":5,"title":"  ","completed":false}]"#;
        let store = hydrate(MemoryStorage::with(DEFAULT_STORAGE_KEY, blob));

        assert_eq!(store.tasks(), seed_tasks().as_slice());
        assert!(store.load_error().is_some());
    }

    #[test]
    fn test_valid_blob_is_loaded_in_order() {
        let blob = r#"[{"id":1700000000000,"title":"Buy milk","completed":true},{"id":2,"title":"Eat lunch","completed":false}]"#;
        let store = hydrate(MemoryStorage::with(DEFAULT_STORAGE_KEY, blob));

        let mut milk = Task::new(1700000000000, "Buy milk");
        milk.completed = true;
        assert_eq!(store.tasks(), &[milk, Task::new(2, "Eat lunch")]);
        assert!(store.load_error().is_none());
    }

    #[test]
    fn test_empty_array_is_a_valid_collection() {
        let store = hydrate(MemoryStorage::with(DEFAULT_STORAGE_KEY, "[]"));

        assert!(store.tasks().is_empty());
        assert!(store.load_error().is_none());
    }

    #[test]
    fn test_load_error_survives_mutations() {
        let mut store = hydrate(MemoryStorage::with(DEFAULT_STORAGE_KEY, "garbage"));
        store.add_task("New").unwrap();

        assert!(store.load_error().is_some());
        assert_eq!(store.tasks().len(), 4);
    }

    #[test]
    fn test_key_is_respected() {
        let storage = MemoryStorage::with("otherKey", r#"[{"id":9,"title":"Elsewhere","completed":false}]"#);

        let store = TaskStore::hydrate(storage.clone(), "otherKey");
        assert_eq!(store.tasks(), &[Task::new(9, "Elsewhere")]);

        let store = TaskStore::hydrate(storage, DEFAULT_STORAGE_KEY);
        assert_eq!(store.tasks(), seed_tasks().as_slice());
    }
}
