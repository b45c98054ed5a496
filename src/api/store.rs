//! The main entry point for interacting with the prompt store.

use chrono::Utc;
use tracing::{debug, info};

use super::draft::{PromptEdit, PromptPatch};
use super::filter::{filter_prompts, ViewFilter};
use crate::core::model::{Document, Folder, Prompt, Version};
use crate::core::persist::Persistence;
use crate::core::utils::new_id;

/// Suffix appended to the title of a duplicated prompt.
pub const COPY_SUFFIX: &str = " (Copy)";

/// Single owner of the [`Document`].
///
/// Create one at startup and pass it by reference to whatever needs it.
/// Every mutation is applied to the in-memory document first and then
/// handed to the [`Persistence`] layer; a failed save never undoes it.
/// Mutations naming an unknown prompt are silent no-ops and persist nothing.
pub struct PromptStore {
    doc: Document,
    persistence: Box<dyn Persistence>,
}

impl PromptStore {
    /// Load the document from `persistence` and take ownership of both.
    pub fn open(persistence: impl Persistence + 'static) -> Self {
        let doc = persistence.load();
        info!(
            prompts = doc.prompts.len(),
            folders = doc.folders.len(),
            "prompt store opened"
        );
        Self {
            doc,
            persistence: Box::new(persistence),
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.doc.prompts
    }

    pub fn folders(&self) -> &[Folder] {
        &self.doc.folders
    }

    pub fn prompt(&self, id: &str) -> Option<&Prompt> {
        self.doc.prompt(id)
    }

    pub fn folder(&self, id: &str) -> Option<&Folder> {
        self.doc.folder(id)
    }

    /// Prompts passing `filter`, recomputed on every call.
    pub fn filtered_prompts(&self, filter: &ViewFilter) -> Vec<&Prompt> {
        filter_prompts(&self.doc, filter)
    }

    /// A prompt id not used by any prompt in the document.
    pub fn fresh_prompt_id(&self) -> String {
        new_id(|id| self.doc.prompt(id).is_some())
    }

    /// Prepend `prompt`. The caller supplies a fresh id; duplicates are not checked.
    pub fn add_prompt(&mut self, prompt: Prompt) {
        debug!(id = %prompt.id, "add prompt");
        self.doc.prompts.insert(0, prompt);
        self.commit();
    }

    pub fn update_prompt(&mut self, id: &str, patch: PromptPatch) {
        self.mutate(id, |p| patch.apply(p));
    }

    /// Remove a prompt. Folder references held by other prompts are untouched.
    pub fn delete_prompt(&mut self, id: &str) {
        let before = self.doc.prompts.len();
        self.doc.prompts.retain(|p| p.id != id);
        if self.doc.prompts.len() != before {
            debug!(id, "delete prompt");
            self.commit();
        }
    }

    /// Prepend a copy of `prompt` and return the id of the copy.
    ///
    /// The copy shares the original's version history and current version
    /// as-is rather than starting its own baseline. Whether that is desired
    /// is an open question; it is kept for compatibility with stored data.
    pub fn duplicate_prompt(&mut self, prompt: &Prompt) -> String {
        let id = self.fresh_prompt_id();
        let duplicate = Prompt {
            id: id.clone(),
            title: format!("{}{}", prompt.title, COPY_SUFFIX),
            use_count: 0,
            positive_count: 0,
            negative_count: 0,
            created_at: Utc::now(),
            ..prompt.clone()
        };
        debug!(source = %prompt.id, id = %id, "duplicate prompt");
        self.add_prompt(duplicate);
        id
    }

    pub fn toggle_star(&mut self, id: &str) {
        self.mutate(id, |p| p.starred = !p.starred);
    }

    pub fn increment_use(&mut self, id: &str) {
        self.mutate(id, |p| p.use_count += 1);
    }

    pub fn record_feedback(&mut self, id: &str, is_positive: bool) {
        self.mutate(id, |p| {
            if is_positive {
                p.positive_count += 1;
            } else {
                p.negative_count += 1;
            }
        });
    }

    /// Append a new version and make it current.
    ///
    /// The number is one past the highest existing version, so it never
    /// reuses a number even after a rollback.
    pub fn create_version(&mut self, prompt_id: &str, content: &str, change_note: Option<String>) {
        self.mutate(prompt_id, |p| {
            let number = p.latest_version() + 1;
            p.versions.push(Version {
                version: number,
                content: content.to_string(),
                change_note,
                created_at: Utc::now(),
            });
            p.content = content.to_string();
            p.current_version = number;
        });
    }

    /// Make an existing version current again. History is kept intact.
    pub fn rollback_version(&mut self, prompt_id: &str, version: u32) {
        let Some(content) = self
            .doc
            .prompt(prompt_id)
            .and_then(|p| p.version(version))
            .map(|v| v.content.clone())
        else {
            return;
        };
        self.mutate(prompt_id, |p| {
            p.content = content;
            p.current_version = version;
        });
    }

    /// Append a folder and return its id. Names need not be unique or non-empty.
    pub fn add_folder(&mut self, name: &str) -> String {
        let id = new_id(|id| self.doc.folder(id).is_some());
        debug!(id = %id, name, "add folder");
        self.doc.folders.push(Folder {
            id: id.clone(),
            name: name.to_string(),
        });
        self.commit();
        id
    }

    /// Point a prompt at a folder.
    ///
    /// The folder id is not checked against existing folders, so a prompt may
    /// reference a folder that does not exist. Readers treat it as unfiled.
    pub fn assign_to_folder(&mut self, prompt_id: &str, folder_id: Option<String>) {
        self.mutate(prompt_id, |p| p.folder_id = folder_id);
    }

    /// Apply an edit form: a new version first, then the metadata.
    ///
    /// These are two separate mutations and two saves, matching callers that
    /// issue `create_version` and `update_prompt` themselves.
    pub fn apply_edit(&mut self, id: &str, edit: &PromptEdit) {
        self.create_version(id, edit.content.trim(), edit.change_note.clone());
        self.update_prompt(id, edit.metadata_patch());
    }

    /// Wait until every save issued so far reached storage.
    pub fn flush(&self) {
        self.persistence.flush();
    }

    fn mutate(&mut self, id: &str, f: impl FnOnce(&mut Prompt)) {
        if let Some(prompt) = self.doc.prompts.iter_mut().find(|p| p.id == id) {
            f(prompt);
            self.commit();
        }
    }

    fn commit(&self) {
        self.persistence.save(&self.doc);
    }
}
