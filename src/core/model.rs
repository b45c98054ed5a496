//! Persisted data types: the document, its prompts, versions and folders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Entire persisted state of one installation.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Document {
    #[serde(default)]
    pub prompts: Vec<Prompt>,
    #[serde(default)]
    pub folders: Vec<Folder>,
}

impl Document {
    pub fn prompt(&self, id: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == id)
    }

    pub fn folder(&self, id: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }
}

/// A saved, reusable prompt with usage counters and version history.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub starred: bool,
    /// May name a folder that no longer exists; readers treat that as unfiled.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub folder_id: Option<String>,
    #[serde(default)]
    pub use_count: u64,
    #[serde(default)]
    pub positive_count: u64,
    #[serde(default)]
    pub negative_count: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub versions: Vec<Version>,
    #[serde(default)]
    pub current_version: u32,
}

impl Prompt {
    /// Highest version number recorded, 0 when the history is empty.
    pub fn latest_version(&self) -> u32 {
        self.versions.iter().map(|v| v.version).max().unwrap_or(0)
    }

    pub fn version(&self, number: u32) -> Option<&Version> {
        self.versions.iter().find(|v| v.version == number)
    }

    pub fn total_feedback(&self) -> u64 {
        self.positive_count + self.negative_count
    }

    /// Share of positive feedback as a rounded percentage.
    pub fn helpful_percent(&self) -> Option<u32> {
        let total = self.total_feedback();
        if total == 0 {
            return None;
        }
        Some(((self.positive_count as f64 / total as f64) * 100.0).round() as u32)
    }

    /// Case-insensitive substring match against the title or any tag.
    /// `needle` must already be lowercase.
    pub(crate) fn matches_query(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// Immutable snapshot of a prompt's content at one edit point.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub version: u32,
    pub content: String,
    #[serde(default)]
    pub change_note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Named grouping referenced by prompts through `folder_id`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Folder {
    pub id: String,
    pub name: String,
}

/// Older data stores "no folder" as an empty string.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()))
}
