//! Form input for creating and editing prompts.
//!
//! Validation of user input happens here rather than in the store, which
//! trusts its callers.

use chrono::Utc;
use serde::Deserialize;

use super::error::StoreError;
use crate::core::model::{Prompt, Version};
use crate::core::utils::parse_tags;

/// Change note recorded on the first version of every new prompt.
pub const INITIAL_VERSION_NOTE: &str = "Initial version";

/// Typed set of the metadata fields `update_prompt` may change.
///
/// Unset fields are left alone. `folder_id: Some(None)` clears the folder.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PromptPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub starred: Option<bool>,
    #[serde(default, with = "double_option")]
    pub folder_id: Option<Option<String>>,
}

impl PromptPatch {
    /// Parse a patch received as JSON, rejecting fields it does not know.
    pub fn from_json(raw: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.tags.is_none()
            && self.starred.is_none()
            && self.folder_id.is_none()
    }

    pub(crate) fn apply(self, prompt: &mut Prompt) {
        if let Some(title) = self.title {
            prompt.title = title;
        }
        if let Some(tags) = self.tags {
            prompt.tags = tags;
        }
        if let Some(starred) = self.starred {
            prompt.starred = starred;
        }
        if let Some(folder_id) = self.folder_id {
            prompt.folder_id = folder_id.filter(|f| !f.is_empty());
        }
    }
}

/// Distinguishes an absent `folderId` from an explicit `null`.
mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer).map(Some)
    }
}

/// Input of the "add prompt" form.
#[derive(Debug, Clone, Default)]
pub struct PromptDraft {
    pub title: String,
    pub content: String,
    /// Comma-separated tag line as typed by the user.
    pub tags: String,
    pub starred: bool,
    pub folder_id: Option<String>,
}

impl PromptDraft {
    /// Draft whose content is pre-filled, e.g. from text the user already typed.
    pub fn prefilled(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        if self.title.trim().is_empty() {
            return Err(StoreError::Validation("Title cannot be empty".to_string()));
        }
        if self.content.trim().is_empty() {
            return Err(StoreError::Validation("Content cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Build a fresh prompt with its initial version.
    pub fn into_prompt(self, id: String) -> Result<Prompt, StoreError> {
        self.validate()?;
        let now = Utc::now();
        let content = self.content.trim().to_string();
        Ok(Prompt {
            id,
            title: self.title.trim().to_string(),
            content: content.clone(),
            tags: parse_tags(&self.tags),
            starred: self.starred,
            folder_id: self.folder_id.filter(|f| !f.is_empty()),
            use_count: 0,
            positive_count: 0,
            negative_count: 0,
            created_at: now,
            versions: vec![Version {
                version: 1,
                content,
                change_note: Some(INITIAL_VERSION_NOTE.to_string()),
                created_at: now,
            }],
            current_version: 1,
        })
    }
}

/// Input of the "edit prompt" form: a new version plus metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptEdit {
    pub content: String,
    pub change_note: Option<String>,
    pub title: String,
    /// Comma-separated tag line as typed by the user.
    pub tags: String,
    pub starred: bool,
    pub folder_id: Option<String>,
}

impl PromptEdit {
    /// Edit form pre-populated from the prompt's current state.
    pub fn from_prompt(prompt: &Prompt) -> Self {
        Self {
            content: prompt.content.clone(),
            change_note: None,
            title: prompt.title.clone(),
            tags: prompt.tags.join(", "),
            starred: prompt.starred,
            folder_id: prompt.folder_id.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        if self.title.trim().is_empty() {
            return Err(StoreError::Validation("Title cannot be empty".to_string()));
        }
        if self.content.trim().is_empty() {
            return Err(StoreError::Validation("Content cannot be empty".to_string()));
        }
        Ok(())
    }

    /// True when applying this edit would leave `prompt` as it is, once the
    /// content and title are trimmed and the tag line is parsed.
    pub fn is_noop_for(&self, prompt: &Prompt) -> bool {
        self.change_note.is_none()
            && self.content.trim() == prompt.content
            && self.title.trim() == prompt.title
            && parse_tags(&self.tags) == prompt.tags
            && self.starred == prompt.starred
            && self.folder_id == prompt.folder_id
    }

    pub(crate) fn metadata_patch(&self) -> PromptPatch {
        PromptPatch {
            title: Some(self.title.trim().to_string()),
            tags: Some(parse_tags(&self.tags)),
            starred: Some(self.starred),
            folder_id: Some(self.folder_id.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn draft_requires_title_and_content() {
        let draft = PromptDraft {
            title: "   ".into(),
            content: "x".into(),
            ..Default::default()
        };
        assert!(matches!(draft.validate(), Err(StoreError::Validation(_))));

        let draft = PromptDraft {
            title: "t".into(),
            content: "\n\t".into(),
            ..Default::default()
        };
        assert!(matches!(draft.into_prompt("1".into()), Err(StoreError::Validation(_))));
    }

    #[test]
    fn draft_builds_initial_version() {
        let draft = PromptDraft {
            title: "  Code Review  ".into(),
            content: " Review this code \n".into(),
            tags: "coding, review,".into(),
            starred: true,
            folder_id: Some(String::new()),
        };
        let p = draft.into_prompt("abc".into()).unwrap();
        assert_eq!(p.title, "Code Review");
        assert_eq!(p.content, "Review this code");
        assert_eq!(p.tags, vec!["coding", "review"]);
        assert_eq!(p.folder_id, None);
        assert_eq!(p.current_version, 1);
        assert_eq!(p.versions.len(), 1);
        assert_eq!(p.versions[0].content, "Review this code");
        assert_eq!(p.versions[0].change_note.as_deref(), Some(INITIAL_VERSION_NOTE));
        assert_eq!(p.versions[0].created_at, p.created_at);
    }

    #[test]
    fn patch_rejects_unknown_fields() {
        let err = PromptPatch::from_json(r#"{"title":"x","useCount":99}"#).unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
    }

    #[test]
    fn patch_distinguishes_missing_and_null_folder() {
        let keep = PromptPatch::from_json(r#"{"starred":true}"#).unwrap();
        assert_eq!(keep.folder_id, None);
        assert_eq!(keep.starred, Some(true));

        let clear = PromptPatch::from_json(r#"{"folderId":null}"#).unwrap();
        assert_eq!(clear.folder_id, Some(None));

        let set = PromptPatch::from_json(r#"{"folderId":"f1","tags":["a"]}"#).unwrap();
        assert_eq!(set.folder_id, Some(Some("f1".into())));
        assert_eq!(set.tags, Some(vec!["a".to_string()]));
        assert!(PromptPatch::default().is_empty());
    }

    #[test]
    fn edit_with_only_whitespace_changes_is_noop() {
        let draft = PromptDraft {
            title: "Greeting".into(),
            content: "Hello".into(),
            tags: "a, b".into(),
            ..Default::default()
        };
        let prompt = draft.into_prompt("1".into()).unwrap();

        let mut edit = PromptEdit::from_prompt(&prompt);
        edit.content = "Hello \n".into();
        edit.title = " Greeting".into();
        edit.tags = "a,b,".into();
        assert!(edit.is_noop_for(&prompt));

        edit.content = "Hello there".into();
        assert!(!edit.is_noop_for(&prompt));

        let mut noted = PromptEdit::from_prompt(&prompt);
        noted.change_note = Some("same text, new note".into());
        assert!(!noted.is_noop_for(&prompt));
    }
}
