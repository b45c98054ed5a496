use chrono::Utc;
use pretty_assertions::assert_eq;
use prompt_manager::core::persist::DEFAULT_STORAGE_KEY;
use prompt_manager::{
    Document, FileBackend, JsonAdapter, KvBackend, MemoryBackend, Persistence, Prompt,
    PromptDraft, PromptStore, Version, ViewFilter,
};
use std::fs;
use tempfile::TempDir;

fn prompt(id: &str, title: &str, content: &str) -> Prompt {
    let now = Utc::now();
    Prompt {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        tags: vec![],
        starred: false,
        folder_id: None,
        use_count: 0,
        positive_count: 0,
        negative_count: 0,
        created_at: now,
        versions: vec![Version {
            version: 1,
            content: content.to_string(),
            change_note: Some("Initial version".to_string()),
            created_at: now,
        }],
        current_version: 1,
    }
}

fn memory_store() -> (PromptStore, MemoryBackend) {
    let backend = MemoryBackend::new();
    let store = PromptStore::open(JsonAdapter::new(backend.clone(), DEFAULT_STORAGE_KEY));
    (store, backend)
}

#[test]
fn single_prompt_shows_up_in_unfiltered_view() {
    let (mut store, _) = memory_store();
    store.add_prompt(prompt("1", "A", "x"));

    let view = store.filtered_prompts(&ViewFilter::default());
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, "1");
}

#[test]
fn folder_filter_selects_assigned_prompt_only() {
    let (mut store, _) = memory_store();
    store.add_prompt(prompt("1", "A", "x"));
    let work = store.add_folder("Work");
    let home = store.add_folder("Home");
    store.assign_to_folder("1", Some(work.clone()));

    let in_work = store.filtered_prompts(&ViewFilter::default().in_folder(Some(work)));
    assert_eq!(in_work.len(), 1);
    assert_eq!(in_work[0].id, "1");

    let in_home = store.filtered_prompts(&ViewFilter::default().in_folder(Some(home)));
    assert!(in_home.is_empty());
}

#[test]
fn version_then_rollback_restores_content_without_losing_history() {
    let (mut store, _) = memory_store();
    store.add_prompt(prompt("1", "A", "first"));
    store.create_version("1", "second", Some("reword".to_string()));
    store.create_version("1", "third", None);

    for v in [1, 2, 3] {
        store.rollback_version("1", v);
        let p = store.prompt("1").unwrap();
        assert_eq!(p.content, p.version(v).unwrap().content);
        assert_eq!(p.current_version, v);
        assert_eq!(p.versions.len(), 3);
    }
}

#[test]
fn duplicate_gets_new_identity_and_zeroed_counters() {
    let (mut store, _) = memory_store();
    store.add_prompt(prompt("1", "Summarize", "tl;dr"));
    store.increment_use("1");
    store.record_feedback("1", true);
    store.record_feedback("1", false);

    let original = store.prompt("1").unwrap().clone();
    let copy_id = store.duplicate_prompt(&original);
    let copy = store.prompt(&copy_id).unwrap();

    assert_ne!(copy.id, original.id);
    assert_eq!(copy.title, "Summarize (Copy)");
    assert_eq!((copy.use_count, copy.positive_count, copy.negative_count), (0, 0, 0));
    assert_eq!(store.prompt("1").unwrap().use_count, 1);
}

#[test]
fn mutations_survive_reopen() {
    let (mut store, backend) = memory_store();
    let id = store.fresh_prompt_id();
    let draft = PromptDraft {
        title: "Translate".into(),
        tags: "language, daily".into(),
        ..PromptDraft::prefilled("Translate the following to French:")
    };
    store.add_prompt(draft.into_prompt(id.clone()).unwrap());
    store.toggle_star(&id);
    store.create_version(&id, "Translate the following to German:", None);
    let folder = store.add_folder("Languages");
    store.assign_to_folder(&id, Some(folder.clone()));
    let expected = store.document().clone();
    drop(store);

    let reopened = PromptStore::open(JsonAdapter::new(backend, DEFAULT_STORAGE_KEY));
    assert_eq!(reopened.document(), &expected);
    let p = reopened.prompt(&id).unwrap();
    assert_eq!(p.tags, vec!["language", "daily"]);
    assert_eq!(p.folder_id.as_deref(), Some(folder.as_str()));
}

#[test]
fn legacy_extension_data_loads() {
    let backend = MemoryBackend::new();
    let raw = serde_json::json!({
        "prompts": [{
            "id": "1717000000000",
            "title": "Code Review Assistant",
            "content": "Review this code",
            "tags": ["coding"],
            "starred": true,
            "folderId": "",
            "useCount": 4,
            "positiveCount": 3,
            "negativeCount": 1,
            "createdAt": "2024-05-29T16:26:40.000Z",
            "versions": [{
                "version": 1,
                "content": "Review this code",
                "changeNote": "Initial version",
                "createdAt": "2024-05-29T16:26:40.000Z"
            }],
            "currentVersion": 1
        }],
        "folders": [{ "id": "1717000000001", "name": "Work" }]
    });
    backend.set(DEFAULT_STORAGE_KEY, raw).unwrap();

    let store = PromptStore::open(JsonAdapter::new(backend, DEFAULT_STORAGE_KEY));
    let p = store.prompt("1717000000000").unwrap();
    assert_eq!(p.folder_id, None);
    assert_eq!(p.helpful_percent(), Some(75));
    assert_eq!(store.folders().len(), 1);
}

#[test]
fn save_of_load_is_byte_identical_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    {
        let mut store =
            PromptStore::open(JsonAdapter::new(FileBackend::new(&path), DEFAULT_STORAGE_KEY));
        store.add_prompt(prompt("1", "A", "x"));
        store.add_folder("Work");
    }
    let before = fs::read(&path).unwrap();

    let adapter = JsonAdapter::new(FileBackend::new(&path), DEFAULT_STORAGE_KEY);
    let doc: Document = adapter.load();
    adapter.save(&doc);
    adapter.flush();

    assert_eq!(fs::read(&path).unwrap(), before);
}
