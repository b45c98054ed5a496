//! Persistence of the document in a host key/value store.
//!
//! A [`KvBackend`] stores JSON values under string keys. [`JsonAdapter`]
//! keeps the whole [`Document`] under one storage key and implements
//! [`Persistence`]: loading never fails (corrupt or missing data yields the
//! empty document) and saves are best-effort. Saves go through a single
//! writer thread so they reach the backend in the order they were issued.

use crate::api::StoreError;
use crate::core::model::Document;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Storage key used by installations that never configured one.
pub const DEFAULT_STORAGE_KEY: &str = "ai_prompt_manager_data";

/// Host-provided key/value store of JSON values.
pub trait KvBackend: Send + Sync + 'static {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;
    fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;
}

/// Load/save contract consumed by the prompt store.
pub trait Persistence {
    /// Last persisted document, or the empty document.
    fn load(&self) -> Document;
    /// Best-effort write of the full document. Failures are logged only.
    fn save(&self, document: &Document);
    /// Block until every save issued so far has been handed to storage.
    fn flush(&self) {}
}

/// JSON object file on disk, one entry per storage key.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>, StoreError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str(&raw)? {
            Value::Object(map) => Ok(map),
            _ => Err(StoreError::Storage(format!(
                "{} does not hold a JSON object",
                self.path.display()
            ))),
        }
    }
}

impl KvBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut map = self.read_map().unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "replacing unreadable storage file");
            Map::new()
        });
        map.insert(key.to_string(), value);

        let mut bytes = serde_json::to_vec_pretty(&Value::Object(map))?;
        bytes.push(b'\n');
        atomic_write(&self.path, &bytes)?;
        Ok(())
    }
}

/// In-memory backend; clones share the same entries.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, Value>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Storage("memory backend lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Storage("memory backend lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}

enum WriteJob {
    Save(Value),
    Flush(Sender<()>),
}

struct Writer {
    tx: Sender<WriteJob>,
    handle: JoinHandle<()>,
}

/// Keeps the document under a single storage key of a [`KvBackend`].
pub struct JsonAdapter<B: KvBackend> {
    backend: Arc<B>,
    key: String,
    writer: Option<Writer>,
}

impl<B: KvBackend> JsonAdapter<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        let backend = Arc::new(backend);
        let key = key.into();

        let (tx, rx) = mpsc::channel();
        let worker_backend = Arc::clone(&backend);
        let worker_key = key.clone();
        let writer = match thread::Builder::new()
            .name("prompt-writer".to_string())
            .spawn(move || write_loop(worker_backend.as_ref(), &worker_key, rx))
        {
            Ok(handle) => Some(Writer { tx, handle }),
            Err(e) => {
                // Saves still work, just on the caller's thread.
                warn!(error = %e, "unable to start writer thread");
                None
            }
        };

        Self {
            backend,
            key,
            writer,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<B: KvBackend> Persistence for JsonAdapter<B> {
    fn load(&self) -> Document {
        match self.backend.get(&self.key) {
            Ok(Some(value)) => match serde_json::from_value::<Document>(value) {
                Ok(doc) => {
                    debug!(
                        prompts = doc.prompts.len(),
                        folders = doc.folders.len(),
                        "document loaded"
                    );
                    doc
                }
                Err(e) => {
                    warn!(key = %self.key, error = %e, "stored document is corrupt, starting empty");
                    Document::default()
                }
            },
            Ok(None) => {
                debug!(key = %self.key, "no stored document, starting empty");
                Document::default()
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "unable to read storage, starting empty");
                Document::default()
            }
        }
    }

    fn save(&self, document: &Document) {
        let value = match serde_json::to_value(document) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "unable to serialize document");
                return;
            }
        };

        match &self.writer {
            Some(writer) => {
                if let Err(mpsc::SendError(WriteJob::Save(value))) =
                    writer.tx.send(WriteJob::Save(value))
                {
                    warn!("writer thread stopped, saving inline");
                    write_value(self.backend.as_ref(), &self.key, value);
                }
            }
            None => write_value(self.backend.as_ref(), &self.key, value),
        }
    }

    fn flush(&self) {
        if let Some(writer) = &self.writer {
            let (ack_tx, ack_rx) = mpsc::channel();
            if writer.tx.send(WriteJob::Flush(ack_tx)).is_ok() {
                let _ = ack_rx.recv();
            }
        }
    }
}

impl<B: KvBackend> Drop for JsonAdapter<B> {
    fn drop(&mut self) {
        if let Some(Writer { tx, handle }) = self.writer.take() {
            // Closing the channel lets the writer drain pending saves and exit.
            drop(tx);
            if handle.join().is_err() {
                warn!("writer thread panicked");
            }
        }
    }
}

fn write_loop<B: KvBackend>(backend: &B, key: &str, rx: Receiver<WriteJob>) {
    for job in rx {
        match job {
            WriteJob::Save(value) => write_value(backend, key, value),
            WriteJob::Flush(ack) => {
                let _ = ack.send(());
            }
        }
    }
}

fn write_value<B: KvBackend + ?Sized>(backend: &B, key: &str, value: Value) {
    match backend.set(key, value) {
        Ok(()) => debug!(key, "document persisted"),
        Err(e) => warn!(key, error = %e, "failed to persist document"),
    }
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Folder, Prompt, Version};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_document() -> Document {
        let ts = "2024-03-01T10:00:00Z".parse().unwrap();
        Document {
            prompts: vec![Prompt {
                id: "p1".into(),
                title: "Code Review Assistant".into(),
                content: "Review this diff".into(),
                tags: vec!["coding".into(), "review".into()],
                starred: false,
                folder_id: Some("f1".into()),
                use_count: 3,
                positive_count: 2,
                negative_count: 1,
                created_at: ts,
                versions: vec![Version {
                    version: 1,
                    content: "Review this diff".into(),
                    change_note: Some("Initial version".into()),
                    created_at: ts,
                }],
                current_version: 1,
            }],
            folders: vec![Folder {
                id: "f1".into(),
                name: "Work".into(),
            }],
        }
    }

    struct FailingBackend;

    impl KvBackend for FailingBackend {
        fn get(&self, _key: &str) -> Result<Option<Value>, StoreError> {
            Err(StoreError::Storage("unavailable".into()))
        }

        fn set(&self, _key: &str, _value: Value) -> Result<(), StoreError> {
            Err(StoreError::Storage("quota exceeded".into()))
        }
    }

    #[derive(Clone, Default)]
    struct RecordingBackend {
        writes: Arc<Mutex<Vec<Value>>>,
    }

    impl KvBackend for RecordingBackend {
        fn get(&self, _key: &str) -> Result<Option<Value>, StoreError> {
            Ok(self.writes.lock().unwrap().last().cloned())
        }

        fn set(&self, _key: &str, value: Value) -> Result<(), StoreError> {
            self.writes.lock().unwrap().push(value);
            Ok(())
        }
    }

    #[test]
    fn missing_file_loads_empty_document() {
        let dir = TempDir::new().unwrap();
        let adapter = JsonAdapter::new(FileBackend::new(dir.path().join("data.json")), "k");
        assert_eq!(adapter.load(), Document::default());
    }

    #[test]
    fn corrupt_file_loads_empty_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "{ not json").unwrap();
        let adapter = JsonAdapter::new(FileBackend::new(&path), "k");
        assert_eq!(adapter.load(), Document::default());
    }

    #[test]
    fn wrong_shape_loads_empty_document() {
        let backend = MemoryBackend::new();
        backend.set("k", serde_json::json!({"prompts": "nope"})).unwrap();
        let adapter = JsonAdapter::new(backend, "k");
        assert_eq!(adapter.load(), Document::default());
    }

    #[test]
    fn unreadable_backend_loads_empty_and_swallows_save_errors() {
        let adapter = JsonAdapter::new(FailingBackend, "k");
        assert_eq!(adapter.load(), Document::default());
        adapter.save(&sample_document());
        adapter.flush();
    }

    #[test]
    fn file_round_trip_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");

        let adapter = JsonAdapter::new(FileBackend::new(&path), DEFAULT_STORAGE_KEY);
        adapter.save(&sample_document());
        adapter.flush();
        let first = fs::read(&path).unwrap();

        let loaded = adapter.load();
        assert_eq!(loaded, sample_document());
        adapter.save(&loaded);
        adapter.flush();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn file_backend_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        let backend = FileBackend::new(&path);
        backend.set("other", Value::from(42)).unwrap();
        backend.set("k", Value::from("x")).unwrap();
        assert_eq!(backend.get("other").unwrap(), Some(Value::from(42)));
        assert_eq!(backend.get("k").unwrap(), Some(Value::from("x")));
    }

    #[test]
    fn saves_land_in_issue_order() {
        let backend = RecordingBackend::default();
        let writes = Arc::clone(&backend.writes);
        let adapter = JsonAdapter::new(backend, "k");

        let mut doc = Document::default();
        for i in 0..20 {
            doc.folders.push(Folder {
                id: format!("f{i}"),
                name: format!("Folder {i}"),
            });
            adapter.save(&doc);
        }
        adapter.flush();

        let writes = writes.lock().unwrap();
        assert_eq!(writes.len(), 20);
        for (i, value) in writes.iter().enumerate() {
            assert_eq!(value["folders"].as_array().unwrap().len(), i + 1);
        }
    }

    #[test]
    fn drop_drains_pending_saves() {
        let backend = MemoryBackend::new();
        {
            let adapter = JsonAdapter::new(backend.clone(), "k");
            adapter.save(&sample_document());
        }
        let reopened = JsonAdapter::new(backend, "k");
        assert_eq!(reopened.load(), sample_document());
    }
}
