use std::fs;

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use tempfile::tempdir;

use shelf_core::{
    summarize, view, Category, Criteria, EntryDraft, EntryStore, FileStore, FixedClock,
    Rating, RecordingNotifier, SortKey, DEFAULT_STORAGE_KEY,
};

fn open(dir: &std::path::Path) -> EntryStore<FileStore> {
    let mut store = EntryStore::new(FileStore::new(dir));
    store.load().expect("load should succeed");
    store
}

#[test]
fn test_add_then_reload_yields_one_more_entry() {
    let dir = tempdir().expect("tempdir");

    let mut store = open(dir.path());
    let first = store
        .add(EntryDraft::new("Berserk", Category::Manga, Rating::Ex))
        .expect("add should succeed");

    let mut reopened = open(dir.path());
    assert_eq!(reopened.len(), 1);

    let second = reopened
        .add(EntryDraft::new("Tower of God", Category::Manhwa, Rating::A))
        .expect("add should succeed");
    assert_ne!(first.id, second.id);

    let reloaded = open(dir.path());
    assert_eq!(reloaded.len(), 2);
    assert!(reloaded.get(&first.id).is_some());
    assert!(reloaded.get(&second.id).is_some());
}

#[test]
fn test_persist_then_load_preserves_records_and_order() {
    let dir = tempdir().expect("tempdir");
    let mut store = open(dir.path());

    store
        .add(
            EntryDraft::new("Vinland Saga", Category::Manga, Rating::SPlus)
                .with_link("https://example.org/vinland")
                .with_last_position("Ch. 210")
                .with_view_date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()),
        )
        .expect("add should succeed");
    store
        .add(EntryDraft::new("a side story", Category::Outro, Rating::Later))
        .expect("add should succeed");
    store
        .add(EntryDraft::new("Omniscient Reader", Category::Manhwa, Rating::S))
        .expect("add should succeed");
    store.persist().expect("persist should succeed");

    let reloaded = open(dir.path());
    assert_eq!(reloaded.entries(), store.entries());
}

#[test]
fn test_update_and_remove_survive_reload() {
    let dir = tempdir().expect("tempdir");
    let mut store = open(dir.path());

    let a = store
        .add(EntryDraft::new("A", Category::Manga, Rating::B))
        .expect("add A");
    let b = store
        .add(EntryDraft::new("B", Category::Manga, Rating::B))
        .expect("add B");
    let c = store
        .add(EntryDraft::new("C", Category::Manga, Rating::B))
        .expect("add C");

    let mut changed = b.clone();
    changed.last_position = Some("42".to_string());
    store.update(changed).expect("update should succeed");
    store.remove(&a.id).expect("remove should succeed");

    let reloaded = open(dir.path());
    let ids: Vec<_> = reloaded.entries().iter().map(|e| e.id.clone()).collect();
    assert_eq!(ids, vec![b.id.clone(), c.id.clone()]);
    assert_eq!(
        reloaded.get(&b.id).and_then(|e| e.last_position.as_deref()),
        Some("42")
    );
}

#[test]
fn test_malformed_document_loads_empty_and_is_reported() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(format!("{}.json", DEFAULT_STORAGE_KEY));
    fs::write(&path, "[{\"id\": 1").expect("write document");

    let notifier = RecordingNotifier::new();
    let mut store = EntryStore::new(FileStore::new(dir.path())).with_notifier(notifier.clone());

    let err = store.load().expect_err("load should fail");
    assert!(err.is_load_failure());
    assert!(store.is_empty());
    assert_eq!(notifier.notices().len(), 1);

    // The unreadable document is left alone by a failed load.
    assert_eq!(fs::read_to_string(&path).expect("read"), "[{\"id\": 1");
}

#[test]
fn test_browser_export_loads_and_feeds_views() {
    let dir = tempdir().expect("tempdir");
    let doc = r#"[
        {"id":"1700000000001","name":"Naruto","type":"manga","rating":"B",
         "link":"","lastChapter":"700","viewDate":"2023-11-14",
         "dateAdded":"2023-11-14T22:13:20.001Z"},
        {"id":"1700000000002","name":"OnePiece","type":"manga","rating":"EX",
         "link":"https://example.org/op","lastChapter":"1100","viewDate":"2024-01-02",
         "dateAdded":"2024-01-02T10:00:00.000Z"},
        {"id":"1700000000003","name":"Lookism","type":"manhwa","rating":"C",
         "dateAdded":"2024-01-20T10:00:00.000Z"}
    ]"#;
    fs::write(dir.path().join("mangas.json"), doc).expect("write document");

    let store = open(dir.path());
    assert_eq!(store.len(), 3);

    let by_rating = view(store.entries(), &Criteria::new().sort_by(SortKey::Rating));
    let names: Vec<_> = by_rating.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["OnePiece", "Naruto", "Lookism"]);

    let found = view(store.entries(), &Criteria::new().search("one"));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "OnePiece");

    let now = Utc.with_ymd_and_hms(2024, 1, 25, 0, 0, 0).unwrap();
    let stats = summarize(store.entries(), now);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.recent_count, 2);
    assert_eq!(stats.category_count(Category::Manga), 2);
    assert_eq!(stats.category_count(Category::Manhwa), 1);
}

#[test]
fn test_fixed_clock_controls_date_added() {
    let dir = tempdir().expect("tempdir");
    let t = Utc.with_ymd_and_hms(2024, 8, 15, 8, 0, 0).unwrap();
    let mut store = EntryStore::new(FileStore::new(dir.path())).with_clock(FixedClock(t));

    let entry = store
        .add(EntryDraft::new("Dandadan", Category::Manga, Rating::APlus))
        .expect("add should succeed");
    assert_eq!(entry.date_added, t);

    let stats = summarize(store.entries(), t + Duration::days(31));
    assert_eq!(stats.recent_count, 0);
}
