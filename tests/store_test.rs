//! Integration tests for the local state store.

use std::fs;

use pulpit::bible::Verse;
use pulpit::generate::{ContentType, GenerationRequest, GenerationStatus, Generator};
use pulpit::store::{
    Draft, HistoryEntry, JsonFile, RecentList, SavedTemplate, HISTORY_CAPACITY, RECENT_CAPACITY,
};
use pulpit::{ContentDocument, Error, LocalState};

fn open() -> (tempfile::TempDir, LocalState) {
    let dir = tempfile::tempdir().unwrap();
    let state = LocalState::open(dir.path().join("state")).unwrap();
    (dir, state)
}

fn entry(title: &str) -> HistoryEntry {
    HistoryEntry::new(ContentDocument::new(
        title,
        "# Body",
        ContentType::Sermon,
        GenerationStatus::Demo,
    ))
}

#[test]
fn test_open_creates_directory() {
    let (dir, state) = open();
    assert!(dir.path().join("state").is_dir());
    assert_eq!(state.dir(), dir.path().join("state"));
    assert!(state.history().unwrap().is_empty());
    assert!(state.draft().unwrap().is_none());
}

#[test]
fn test_history_is_newest_first_and_bounded() {
    let (_dir, state) = open();
    for i in 0..HISTORY_CAPACITY + 3 {
        state.record_history(entry(&format!("Sermon {}", i))).unwrap();
    }
    let history = state.history().unwrap();
    assert_eq!(history.len(), HISTORY_CAPACITY);
    assert_eq!(history[0].title, format!("Sermon {}", HISTORY_CAPACITY + 2));

    assert!(state.clear_history().unwrap());
    assert!(state.history().unwrap().is_empty());
}

#[test]
fn test_history_keeps_entries_with_the_same_title() {
    let (_dir, state) = open();
    let first = GenerationRequest::new(ContentType::Sermon, "Grace").with_scripture("Ephesians 2:8");
    let second = GenerationRequest::new(ContentType::Sermon, "Grace").with_audience("Youth");
    let generator = Generator::demo();
    for request in [&first, &second] {
        state
            .record_history(HistoryEntry::from_response(request, &generator.generate(request)))
            .unwrap();
    }

    let history = state.history().unwrap();
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|e| e.title == "Sermon: Grace"));
}

#[test]
fn test_history_from_generated_response() {
    let (_dir, state) = open();
    let request = GenerationRequest::new(ContentType::Prayer, "Healing");
    let response = Generator::demo().generate(&request);
    state
        .record_history(HistoryEntry::from_response(&request, &response))
        .unwrap();

    let stored = &state.history().unwrap()[0];
    assert_eq!(stored.content_type, ContentType::Prayer);
    assert_eq!(stored.document().title, "Prayer: Healing");
}

#[test]
fn test_recent_verses_dedupe_by_reference() {
    let (_dir, state) = open();
    for n in 0..RECENT_CAPACITY + 5 {
        state
            .record_verse(Verse::kjv(format!("Psalms 119:{}", n + 1), "text"))
            .unwrap();
    }
    state.record_verse(Verse::kjv("Psalms 119:10", "text")).unwrap();

    let recent = state.recent_verses().unwrap();
    assert_eq!(recent.len(), RECENT_CAPACITY);
    assert_eq!(recent[0].reference, "Psalms 119:10");
    assert_eq!(
        recent.iter().filter(|v| v.reference == "Psalms 119:10").count(),
        1
    );
}

#[test]
fn test_favorites_toggle() {
    let (_dir, state) = open();
    assert!(state.toggle_favorite("John 3:16").unwrap());
    assert!(state.toggle_favorite("Romans 8:28").unwrap());
    assert_eq!(state.favorites().unwrap(), vec!["John 3:16", "Romans 8:28"]);
    assert!(state.is_favorite("John 3:16").unwrap());

    assert!(!state.toggle_favorite("John 3:16").unwrap());
    assert_eq!(state.favorites().unwrap(), vec!["Romans 8:28"]);
    assert!(!state.is_favorite("John 3:16").unwrap());
}

#[test]
fn test_templates_roundtrip_by_name() {
    let (_dir, state) = open();
    let request = GenerationRequest::new(ContentType::BibleStudy, "Parables")
        .with_scripture("Luke 15:1-7")
        .with_audience("Young Adults");
    state
        .save_template(SavedTemplate::new("Wednesday study", request.clone()))
        .unwrap();
    state
        .save_template(SavedTemplate::new("Wednesday study", request.clone().with_audience("Seniors")))
        .unwrap();

    let templates = state.templates().unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].request.target_audience, "Seniors");

    let found = state.template("Wednesday study").unwrap().unwrap();
    assert_eq!(found.request.scripture.as_deref(), Some("Luke 15:1-7"));

    assert!(state.delete_template("Wednesday study").unwrap());
    assert!(!state.delete_template("Wednesday study").unwrap());
    assert!(state.template("Wednesday study").unwrap().is_none());
}

#[test]
fn test_draft_save_and_clear() {
    let (_dir, state) = open();
    state
        .save_draft(&Draft::new("Notes", "# Notes\n- one", ContentType::Devotional))
        .unwrap();

    let draft = state.draft().unwrap().unwrap();
    assert_eq!(draft.title, "Notes");
    assert_eq!(draft.content_type, ContentType::Devotional);

    assert!(state.clear_draft().unwrap());
    assert!(state.draft().unwrap().is_none());
    assert!(!state.clear_draft().unwrap());
}

#[test]
fn test_malformed_file_is_an_error() {
    let (_dir, state) = open();
    fs::write(state.dir().join("history.json"), "{ not json").unwrap();
    assert!(matches!(state.history(), Err(Error::Store(_))));
}

#[test]
fn test_json_file_persists_camel_case() {
    let dir = tempfile::tempdir().unwrap();
    let file: JsonFile<Vec<Draft>> = JsonFile::new(dir.path().join("nested/drafts.json"));
    file.save(&vec![Draft::new("A", "b", ContentType::Sermon)])
        .unwrap();

    let raw = fs::read_to_string(file.path()).unwrap();
    assert!(raw.contains("\"contentType\""));
    assert!(raw.contains("\"savedAt\""));
    assert_eq!(file.load().unwrap().unwrap().len(), 1);
}

#[test]
fn test_recent_list_semantics() {
    let mut list = RecentList::new(3);
    for item in ["a", "b", "c", "d"] {
        list.push(item.to_string());
    }
    assert_eq!(list.items(), ["d", "c", "b"]);
    list.push("b".to_string());
    assert_eq!(list.items(), ["b", "d", "c"]);
    assert_eq!(list.remove("d"), Some("d".to_string()));
    assert_eq!(list.len(), 2);
}
